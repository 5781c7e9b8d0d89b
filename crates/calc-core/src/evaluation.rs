//! Computed results and their JSON encoding.

use std::fmt;

use serde_json::{Number, Value};

use crate::operands::Operands;
use crate::operation::Operation;

/// Largest integer an `f64` represents exactly (2^53).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Outcome of a successful operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    operation: Operation,
    operands: Operands,
    value: f64,
}

impl Evaluation {
    pub(crate) fn new(operation: Operation, operands: Operands, value: f64) -> Self {
        Self {
            operation,
            operands,
            value,
        }
    }

    /// Returns the operation that produced this result.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the validated operands.
    pub fn operands(&self) -> Operands {
        self.operands
    }

    /// Returns the raw `f64` result.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the result encoded for a JSON response.
    pub fn to_json(&self) -> Value {
        result_to_json(self.value)
    }
}

/// Formats as an expression, e.g. `10 / 2 = 5` or `sqrt(16) = 4`.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands {
            Operands::Binary { lhs, rhs } => write!(
                f,
                "{} {} {} = {}",
                lhs,
                self.operation.symbol(),
                rhs,
                self.value
            ),
            Operands::Unary(value) => {
                write!(f, "{}({}) = {}", self.operation.symbol(), value, self.value)
            },
        }
    }
}

/// Encodes an `f64` result as a JSON value.
///
/// Integral values within +/- 2^53 become JSON integers, other finite
/// values JSON floats. NaN and infinities have no JSON representation and
/// become `null`.
pub fn result_to_json(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        // Exact: the value is integral and within the i64 range.
        return Value::from(value as i64);
    }

    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
