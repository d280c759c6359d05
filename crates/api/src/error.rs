use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cardapio_core::error::{CoreError, ErrorKind};
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cardapio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx that no handler translated.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON for the endpoint.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The query string could not be parsed.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// No route matched.
    #[error("Unknown endpoint: {method} {path}")]
    UnknownEndpoint { method: String, path: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body: `{"error": <code>, "details": <message>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    Some("An internal error occurred".to_string()),
                )
            }

            // --- HTTP-specific errors ---
            AppError::InvalidBody(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_body", Some(msg.clone()))
            }
            AppError::InvalidQuery(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_query", Some(msg.clone()))
            }
            AppError::UnknownEndpoint { method, path } => (
                StatusCode::NOT_FOUND,
                "unknown_endpoint",
                Some(format!("{method} {path}")),
            ),
        };

        (status, axum::Json(ErrorBody { error, details })).into_response()
    }
}

/// Map a domain error onto status, code and optional details.
///
/// Only infrastructure failures carry details: the underlying cause as a
/// plain message string.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, Option<String>) {
    match err.kind() {
        ErrorKind::Validation | ErrorKind::StateConflict => {
            (StatusCode::BAD_REQUEST, err.code(), None)
        }
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.code(), None),
        ErrorKind::Infrastructure => {
            tracing::error!(code = err.code(), error = %err, "Request failed");
            let details = match err {
                CoreError::OrderFailed(cause) | CoreError::RatingFailed(cause) => {
                    Some(cause.clone())
                }
                _ => None,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, err.code(), details)
        }
    }
}
