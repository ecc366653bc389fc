use std::fmt;
use thiserror::Error;

/// Business error catalog. Every existence-check failure across the
/// services resolves to one of these kinds; transports read the paired
/// status and message instead of inventing their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BoardNotFound,
    CommentNotFound,
    MemberNotFound,
    MemberExists,
}

impl ErrorCode {
    /// HTTP status paired with this kind.
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::BoardNotFound => 404,
            ErrorCode::CommentNotFound => 404,
            ErrorCode::MemberNotFound => 404,
            ErrorCode::MemberExists => 409,
        }
    }

    /// Stable human-readable message paired with this kind.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::BoardNotFound => "Board not found",
            ErrorCode::CommentNotFound => "Comment not found",
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::MemberExists => "Member exists",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Domain(ErrorCode),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl From<ErrorCode> for ServiceError {
    fn from(code: ErrorCode) -> Self { Self::Domain(code) }
}

impl ServiceError {
    /// The catalog kind carried by this error, when it is a domain failure.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ServiceError::Domain(code) => Some(*code),
            _ => None,
        }
    }
}
