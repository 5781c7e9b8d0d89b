//! Generic operation handler.
//!
//! One handler serves every arithmetic route; the router binds each
//! [`Operation`] to its path and this module does the rest:
//! extract, validate, compute, log the outcome, respond.

use axum::{Json, extract::rejection::JsonRejection};
use calc_core::{CalcError, Operation};
use serde_json::Value;
use tracing::{error, info};

use crate::error::AppError;
use crate::handlers::response::CalcResponse;
use crate::metrics::operations::{OperationOutcome, record_operation};

/// Handler for `POST /<operation>`.
///
/// Malformed JSON is taken as a `Result` so that it goes through the same
/// outcome logging and error body as operand validation failures.
pub async fn calculate(
    operation: Operation,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalcResponse>, AppError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let err = AppError::from(rejection);
            error!(
                operation = operation.name(),
                kind = "malformed_body",
                error = %err,
                "{} error: {}",
                operation.label(),
                err
            );
            record_operation(operation, OperationOutcome::Error);
            return Err(err);
        },
    };

    match operation.apply(&body) {
        Ok(evaluation) => {
            info!(
                operation = operation.name(),
                result = evaluation.value(),
                "{} result: {}",
                operation.label(),
                evaluation
            );
            record_operation(operation, OperationOutcome::Ok);
            Ok(Json(CalcResponse::from(&evaluation)))
        },
        Err(err) => {
            error!(
                operation = operation.name(),
                kind = error_kind(&err),
                field = err.field(),
                found = err.found(),
                error = %err,
                "{} error: {}",
                operation.label(),
                err
            );
            record_operation(operation, OperationOutcome::Error);
            Err(err.into())
        },
    }
}

fn error_kind(err: &CalcError) -> &'static str {
    if err.is_validation_error() {
        "validation"
    } else {
        "domain"
    }
}
