//! Operand extraction and validation.

use serde_json::{Map, Value};

use crate::error::{CalcError, Result};
use crate::operation::Arity;

/// Validated numeric operands of a single request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Two operands, in declaration order.
    Binary { lhs: f64, rhs: f64 },
    /// A single operand.
    Unary(f64),
}

impl Operands {
    /// Extracts the operands named by `arity` from a JSON request body.
    ///
    /// Every field must be present and hold a JSON number. Numeric strings
    /// are rejected. Fields are checked in order, so the first offending
    /// field is the one reported. Unknown fields are ignored.
    pub fn from_body(body: &Value, arity: Arity) -> Result<Self> {
        let object = body.as_object().ok_or(CalcError::InvalidBody)?;

        match arity {
            Arity::Unary(field) => Ok(Self::Unary(number_field(object, field)?)),
            Arity::Binary(first, second) => {
                let lhs = number_field(object, first)?;
                let rhs = number_field(object, second)?;
                Ok(Self::Binary { lhs, rhs })
            },
        }
    }
}

/// Strict numeric check: the field must already be a JSON number.
fn number_field(object: &Map<String, Value>, field: &str) -> Result<f64> {
    match object.get(field) {
        None | Some(Value::Null) => Err(CalcError::missing_operand(field)),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| CalcError::not_a_number(field, "number")),
        Some(other) => Err(CalcError::not_a_number(field, json_type(other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
