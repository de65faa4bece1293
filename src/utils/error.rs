use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("need content-type '{expected}' but got '{actual}'")]
    UnsupportedMediaType {
        expected: &'static str,
        actual: String,
    },

    #[error("Malformed event payload: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BodyRead(_) => "BODY_READ_ERROR",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Encode(_) => "ENCODE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::BodyRead(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Encode(e) => {
                error!(error = ?e, "Response encoding error");
            }
            _ => {
                warn!(code = self.code(), message = %self, "Request rejected");
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::BodyRead(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::UnsupportedMediaType { .. } => self.to_string(),
            AppError::Encode(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        error_response(code, self.public_message(), status)
    }
}
