use axum::extract::OriginalUri;
use axum::http::Method;

use crate::error::AppError;

/// Any unmatched method/path.
///
/// Uses the original URI so misses under `/api` report the full path.
pub async fn unknown_endpoint(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "No route matched");
    AppError::UnknownEndpoint {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
