//! HTTP handlers.

pub mod calculate;
pub mod fallback;
pub mod health;
pub mod metrics;
pub mod response;
