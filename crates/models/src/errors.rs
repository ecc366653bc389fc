use thiserror::Error;

/// Errors raised by entity helpers (input validation and database access).
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}
