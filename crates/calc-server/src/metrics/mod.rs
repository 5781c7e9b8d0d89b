//! Metrics module for the calculator server.

pub mod http;
pub mod operations;
pub mod setup;

pub use operations::{OperationOutcome, record_operation};
pub use setup::{init_metrics, register_metrics};
