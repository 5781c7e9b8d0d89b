//! Calc Server - HTTP calculator service
//!
//! Axum-based server exposing the operations of [`calc_core`] as
//! `POST /<operation>` JSON endpoints, with request logging to the console
//! and two append-only files.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod settings;
pub mod state;

pub use error::{AppError, ErrorResponse};
pub use handlers::response::{CalcResponse, HealthResponse};
pub use logging::{LogGuards, LoggingError, init_logging};
pub use server::{create_router, run_server};
pub use settings::{AppConfig, ConfigError};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
