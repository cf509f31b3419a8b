//! HTTP-facing error type and its status-code mapping.
//!
//! Every failure that reaches a handler is an [`AppError`]. Clients only ever
//! see `{"error": "<message>"}`; the `details` payload is written to the
//! structured log so the full cause stays available to operators.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::{CounterError, StoreError};
use crate::utils::code_generator::GeneratorError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A store-level uniqueness conflict. The shortener recovers from these
    /// locally, so one reaching the HTTP layer is rendered as a 500.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn exhausted(attempts: usize) -> Self {
        Self::GenerationExhausted { attempts }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::GenerationExhausted { .. } => StatusCode::CONFLICT,
            AppError::Conflict { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand to a client.
    fn public_message(&self) -> String {
        match self {
            AppError::Conflict { .. } | AppError::Internal { .. } => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Internal { message, details } | AppError::Conflict { message, details } => {
                tracing::error!(%status, %details, "{}", message);
            }
            AppError::GenerationExhausted { attempts } => {
                tracing::warn!(%status, attempts, "Short code generation exhausted");
            }
            AppError::Validation { message, details } | AppError::NotFound { message, details } => {
                tracing::debug!(%status, %details, "{}", message);
            }
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::not_found("Short link not found", json!({})),
            StoreError::Conflict(code) => {
                AppError::conflict("Short code already exists", json!({ "short_code": code }))
            }
            other => AppError::internal("Link store failure", json!({ "cause": other.to_string() })),
        }
    }
}

impl From<CounterError> for AppError {
    fn from(e: CounterError) -> Self {
        AppError::internal("Visit counter failure", json!({ "cause": e.to_string() }))
    }
}

impl From<GeneratorError> for AppError {
    fn from(e: GeneratorError) -> Self {
        AppError::internal("Short code generation failed", json!({ "cause": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let field_errors = e.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        AppError::bad_request(
            format!("Invalid request: {}", fields.join(", ")),
            json!({ "reason": e.to_string() }),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request(e.body_text(), json!({ "status": e.status().as_u16() }))
    }
}
