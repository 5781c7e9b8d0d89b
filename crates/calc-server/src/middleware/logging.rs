//! Middleware de logging estructurado.
//!
//! Emits exactly one "Request received" line per request, carrying method,
//! path and raw body. Handlers add the outcome line. Completion (status and
//! duration) is logged at DEBUG so the default output stays at two lines
//! per request.

use axum::{
    body::{Body, Bytes},
    http::{Request, Response},
    response::IntoResponse,
};
use http_body_util::LengthLimitError;
use std::{
    sync::Arc,
    task::{Context, Poll},
    time::Instant,
};
use tower::{Layer, Service};
use tracing::{Instrument, debug, error, info, info_span};

use super::request_id::RequestId;
use crate::error::AppError;

/// Layer that logs requests and buffers their bodies.
#[derive(Clone)]
pub struct LoggingLayer {
    service: Arc<str>,
    max_body_bytes: usize,
}

impl LoggingLayer {
    /// Creates a layer tagging records with `service` and rejecting bodies
    /// larger than `max_body_bytes`.
    pub fn new(service: impl Into<Arc<str>>, max_body_bytes: usize) -> Self {
        Self {
            service: service.into(),
            max_body_bytes,
        }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddleware {
            inner,
            service: Arc::clone(&self.service),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Middleware that logs request details.
#[derive(Clone)]
pub struct LoggingMiddleware<S> {
    inner: S,
    service: Arc<str>,
    max_body_bytes: usize,
}

impl<S> Service<Request<Body>> for LoggingMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let start = Instant::now();
        let method = request.method().clone();
        let path = request.uri().path().to_string();

        // Set by RequestIdMiddleware when it runs first
        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let span = info_span!(
            "http_request",
            service = %self.service,
            request_id = %request_id,
            method = %method,
            path = %path,
        );

        let limit = self.max_body_bytes;
        let mut inner = self.inner.clone();

        Box::pin(
            async move {
                let (parts, body) = request.into_parts();

                let bytes = match read_body(body, limit).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        info!(%method, %path, body = "<unread>", "Request received");
                        error!(error = %err, "Request body rejected");
                        return Ok(err.into_response());
                    },
                };

                info!(
                    %method,
                    %path,
                    body = %String::from_utf8_lossy(&bytes),
                    "Request received"
                );

                let request = Request::from_parts(parts, Body::from(bytes));
                let response = inner.call(request).await?;

                debug!(
                    status = response.status().as_u16(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Request completed"
                );

                Ok(response)
            }
            .instrument(span),
        )
    }
}

/// Buffers the whole body, refusing anything above `limit` bytes.
async fn read_body(body: Body, limit: usize) -> Result<Bytes, AppError> {
    axum::body::to_bytes(body, limit).await.map_err(|err| {
        let inner = err.into_inner();
        if inner.is::<LengthLimitError>() {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(format!("Failed to read request body: {inner}"))
        }
    })
}
