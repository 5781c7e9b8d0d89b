//! Calc Core - Domain types for the calculator service
//!
//! This crate knows nothing about HTTP. It provides:
//! - [`Operation`]: the catalogue of supported arithmetic operations
//! - [`Operands`]: operand extraction and strict numeric validation
//! - [`Evaluation`]: a computed result and its JSON encoding
//! - [`CalcError`]: the single "invalid input" error family
//!
//! # Example
//!
//! ```
//! use calc_core::Operation;
//! use serde_json::json;
//!
//! let evaluation = Operation::Divide.apply(&json!({"num1": 10, "num2": 2})).unwrap();
//! assert_eq!(evaluation.to_json(), json!(5));
//! ```

mod error;
mod evaluation;
mod operands;
mod operation;

pub use error::{CalcError, Result};
pub use evaluation::{Evaluation, MAX_SAFE_INTEGER, result_to_json};
pub use operands::Operands;
pub use operation::{Arity, Operation};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
