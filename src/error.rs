//! Application error type and its HTTP representation.
//!
//! Every API error is rendered as:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "invalid_youtube_url",
//!     "message": "Invalid YouTube URL. Please check the URL and try again.",
//!     "details": { "url": "https://vimeo.com/1" }
//!   }
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::preview_session::INVALID_YOUTUBE_URL_MESSAGE;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    InvalidYoutubeUrl { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// The URL matched none of the recognized YouTube URL shapes.
    pub fn invalid_youtube_url(details: Value) -> Self {
        Self::InvalidYoutubeUrl {
            message: INVALID_YOUTUBE_URL_MESSAGE.to_string(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::InvalidYoutubeUrl { .. } => (StatusCode::BAD_REQUEST, "invalid_youtube_url"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::InvalidYoutubeUrl { message, details }
            | AppError::NotFound { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}
