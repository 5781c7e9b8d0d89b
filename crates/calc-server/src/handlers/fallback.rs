use axum::http::{Method, Uri};
use tracing::error;

use crate::error::AppError;

/// Handler for any path without a route: `404 {"error":"Not Found"}`.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    error!(%method, path = uri.path(), "No route for request");
    AppError::NotFound("Not Found".to_string())
}

/// Handler for a known path called with an unsupported method:
/// `405 {"error":"Method Not Allowed"}`.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    error!(%method, path = uri.path(), "Method not allowed for route");
    AppError::MethodNotAllowed
}
