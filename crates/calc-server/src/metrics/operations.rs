//! Per-operation outcome counters.

use calc_core::Operation;
use metrics::counter;

/// Whether an operation produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    Ok,
    Error,
}

impl OperationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Incrementa `calc_operations_total{operation, outcome}`.
pub fn record_operation(operation: Operation, outcome: OperationOutcome) {
    counter!(
        "calc_operations_total",
        "operation" => operation.name(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Registra las metricas de operaciones
pub fn register_operation_metrics() {
    metrics::describe_counter!(
        "calc_operations_total",
        "Total number of arithmetic operations by outcome"
    );
}
