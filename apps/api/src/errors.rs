use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Each pipeline failure is a distinct variant — callers can tell a transport
/// failure from a parse failure from an authorization failure without
/// string-matching messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("User not found")]
    UserNotFound,

    #[error("Interview {0} not found")]
    InterviewNotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Completion service returned no extractable text")]
    EmptyResponse,

    #[error("Malformed model output: {reason}")]
    MalformedOutput {
        reason: String,
        /// Original raw model text. Logged for diagnosis, never echoed to clients.
        raw: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::UserNotFound => (
                StatusCode::NOT_FOUND,
                "USER_NOT_FOUND",
                "No user record for the authenticated identity".to_string(),
            ),
            AppError::InterviewNotFound(id) => (
                StatusCode::NOT_FOUND,
                "INTERVIEW_NOT_FOUND",
                format!("Interview {id} not found"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Completion service unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    "The question generation service is unavailable. Please retry.".to_string(),
                )
            }
            AppError::EmptyResponse => {
                tracing::error!("Completion service returned no extractable text");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_RESPONSE",
                    "The question generation service returned an empty response. Please retry."
                        .to_string(),
                )
            }
            AppError::MalformedOutput { reason, raw } => {
                // The raw model text is logged so malformed responses can be
                // diagnosed. The interview record is never touched on this path.
                tracing::error!("Malformed model output ({reason}); raw text: {raw}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_OUTPUT",
                    "The question generation service returned unparseable output. Please retry."
                        .to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
