//! Application state.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::settings::{AppConfig, LoggingConfig, ServerConfig};

/// Settings shared by the router and its middleware.
#[derive(Clone)]
pub struct AppState {
    /// Service name attached to every request record.
    service: Arc<str>,

    /// Largest request body accepted, in bytes.
    max_body_bytes: usize,

    /// Prometheus handle; `/metrics` is only mounted when present.
    prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Creates a new AppState without metrics.
    pub fn new(service: impl Into<Arc<str>>, max_body_bytes: usize) -> Self {
        Self {
            service: service.into(),
            max_body_bytes,
            prometheus: None,
        }
    }

    /// Creates an AppState from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.logging.service.as_str(), config.server.max_body_bytes)
    }

    /// Attaches a Prometheus handle, enabling `GET /metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    pub fn prometheus(&self) -> Option<&PrometheusHandle> {
        self.prometheus.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            LoggingConfig::default().service,
            ServerConfig::default().max_body_bytes,
        )
    }
}
