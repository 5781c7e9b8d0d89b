//! Middleware stack del servidor HTTP.
//!
//! Tower middleware applied to every request, outermost first:
//! - `RequestIdLayer`: propagates or generates `x-request-id`
//! - `LoggingLayer`: logs method, path and raw body, enforces the body limit

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer, RequestIdMiddleware};
