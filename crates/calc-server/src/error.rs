use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calc_core::CalcError;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    /// Entrada invalida (operandos, body mal formado)
    BadRequest(String),

    /// Ruta desconocida
    NotFound(String),

    /// Ruta conocida, metodo no soportado
    MethodNotAllowed,

    /// Body por encima del limite configurado
    PayloadTooLarge,
}

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Returns the message sent to the client.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.as_str(),
            AppError::MethodNotAllowed => "Method Not Allowed",
            AppError::PayloadTooLarge => "Request body too large",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_errors_are_bad_requests() {
        let err = AppError::from(CalcError::DivisionByZero);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Cannot divide by zero.");
    }

    #[test]
    fn payload_too_large_has_fixed_message() {
        let err = AppError::PayloadTooLarge;

        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "Request body too large");
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let err = AppError::MethodNotAllowed;

        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message(), "Method Not Allowed");
    }

    #[test]
    fn error_body_has_single_error_field() {
        let body = ErrorResponse {
            error: "num1 must be a number".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"num1 must be a number"}"#
        );
    }
}
