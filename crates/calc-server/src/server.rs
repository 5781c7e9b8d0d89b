use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use calc_core::Operation;
use tower::ServiceBuilder;

use crate::handlers::{
    calculate::calculate,
    fallback::{method_not_allowed, not_found},
    health::health_check,
    metrics::metrics_handler,
};
use crate::middleware::{LoggingLayer, RequestIdLayer};
use crate::state::AppState;

/// Creates the router: one `POST` route per operation plus `/health`,
/// and `/metrics` when the state carries a Prometheus handle.
pub fn create_router(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer::new(state.service(), state.max_body_bytes()));

    let mut app_router = Router::new().route("/health", get(health_check));

    for operation in Operation::ALL {
        app_router = app_router.route(
            operation.route(),
            post(move |payload| calculate(operation, payload)),
        );
    }

    if let Some(handle) = state.prometheus() {
        // Router for metrics endpoint (different state)
        let metrics_router = Router::new()
            .route("/metrics", get(metrics_handler))
            .with_state(handle.clone());
        app_router = app_router.merge(metrics_router);
    }

    app_router
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware_stack)
        // Outermost, so requests rejected by the logging layer (413) are counted
        .layer(middleware::from_fn(
            crate::metrics::http::http_metrics_middleware,
        ))
}

/// Binds `addr` and serves until SIGINT/SIGTERM.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<(), std::io::Error> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
