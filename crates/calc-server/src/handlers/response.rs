use calc_core::Evaluation;
use serde::Serialize;

/// Successful operation response: `{"result": ...}`.
///
/// `result` is a JSON integer for integral values within 2^53, a float
/// otherwise, and `null` when the computation overflowed to a non-finite
/// value.
#[derive(Debug, Clone, Serialize)]
pub struct CalcResponse {
    pub result: serde_json::Value,
}

impl From<&Evaluation> for CalcResponse {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            result: evaluation.to_json(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}
