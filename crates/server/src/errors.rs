use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::{ErrorCode, ServiceError};

/// Transport-facing error: the status and message the error catalog pairs
/// with a failure, plus an optional detail for validation problems.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), detail: None }
    }
}

impl From<ErrorCode> for ApiError {
    fn from(code: ErrorCode) -> Self {
        let status = StatusCode::from_u16(code.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, code.message())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(code) => code.into(),
            ServiceError::Model(ModelError::Validation(msg)) => Self {
                status: StatusCode::BAD_REQUEST,
                message: "Invalid request".to_string(),
                detail: Some(msg),
            },
            ServiceError::Model(ModelError::Db(msg)) | ServiceError::Db(msg) => {
                error!(error = %msg, "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "status": self.status.as_u16(),
            "message": self.message,
        });
        if let Some(detail) = self.detail {
            body["detail"] = serde_json::Value::String(detail);
        }
        (self.status, Json(body)).into_response()
    }
}
