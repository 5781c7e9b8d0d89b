//! Catalogue of supported arithmetic operations.
//!
//! Each [`Operation`] carries everything the HTTP layer needs to expose it:
//! its route, the names of its operand fields and the arithmetic itself.
//! Handlers never special-case an operation; they dispatch through
//! [`Operation::apply`].

use std::fmt;

use serde_json::Value;

use crate::error::{CalcError, Result};
use crate::evaluation::Evaluation;
use crate::operands::Operands;

/// Shape of the operands an operation expects, with their JSON field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A single named operand, e.g. `{number}`.
    Unary(&'static str),
    /// Two named operands, e.g. `{num1, num2}`.
    Binary(&'static str, &'static str),
}

impl Arity {
    /// Returns the number of operands.
    pub fn operand_count(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(..) => 2,
        }
    }
}

/// An arithmetic operation exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiate,
    SquareRoot,
}

impl Operation {
    /// All operations, in route registration order.
    pub const ALL: [Operation; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Exponentiate,
        Self::SquareRoot,
    ];

    /// Short machine name, also used as metric label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulo => "modulo",
            Self::Exponentiate => "exponentiate",
            Self::SquareRoot => "sqrt",
        }
    }

    /// HTTP route the operation is served on.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Add => "/add",
            Self::Subtract => "/subtract",
            Self::Multiply => "/multiply",
            Self::Divide => "/divide",
            Self::Modulo => "/modulo",
            Self::Exponentiate => "/exponentiate",
            Self::SquareRoot => "/sqrt",
        }
    }

    /// Human readable label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Modulo => "Modulo",
            Self::Exponentiate => "Exponentiation",
            Self::SquareRoot => "Square root",
        }
    }

    /// Infix symbol for binary operations.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Exponentiate => "^",
            Self::SquareRoot => "sqrt",
        }
    }

    /// Operand shape and field names.
    pub fn arity(&self) -> Arity {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Modulo => {
                Arity::Binary("num1", "num2")
            },
            Self::Exponentiate => Arity::Binary("base", "exponent"),
            Self::SquareRoot => Arity::Unary("number"),
        }
    }

    /// Extracts operands from `body`, validates them and computes the result.
    ///
    /// # Errors
    ///
    /// Returns a [`CalcError`] if the body is not an object, an operand is
    /// missing or not a number, or the arithmetic domain check fails.
    pub fn apply(self, body: &Value) -> Result<Evaluation> {
        let operands = Operands::from_body(body, self.arity())?;
        let value = self.evaluate(operands)?;
        Ok(Evaluation::new(self, operands, value))
    }

    /// Computes the result for already validated operands.
    ///
    /// Plain IEEE-754 `f64` arithmetic: overflow yields infinities and
    /// modulo is the truncated remainder (sign follows the dividend).
    pub fn evaluate(self, operands: Operands) -> Result<f64> {
        match (self, operands) {
            (Self::Add, Operands::Binary { lhs, rhs }) => Ok(lhs + rhs),
            (Self::Subtract, Operands::Binary { lhs, rhs }) => Ok(lhs - rhs),
            (Self::Multiply, Operands::Binary { lhs, rhs }) => Ok(lhs * rhs),
            (Self::Divide, Operands::Binary { lhs, rhs }) => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            },
            (Self::Modulo, Operands::Binary { lhs, rhs }) => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs % rhs)
            },
            (Self::Exponentiate, Operands::Binary { lhs, rhs }) => Ok(lhs.powf(rhs)),
            (Self::SquareRoot, Operands::Unary(value)) => {
                if value < 0.0 {
                    return Err(CalcError::NegativeSquareRoot);
                }
                Ok(value.sqrt())
            },
            (operation, _) => Err(CalcError::ArityMismatch {
                operation: operation.name(),
                expected: operation.arity().operand_count(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
