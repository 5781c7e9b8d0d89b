//! Custom assertions para tests.

use axum::http::StatusCode;
use serde_json::Value;

use super::TestResponse;

/// Verifica una respuesta exitosa `{"result": <expected>}`.
pub fn assert_result(response: &TestResponse, expected: f64) {
    response
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("application/json");

    let body: Value = response.json();
    let obj = body.as_object().expect("Response should be a JSON object");
    assert_eq!(obj.len(), 1, "Only 'result' expected, got {body}");

    let actual = obj["result"]
        .as_f64()
        .unwrap_or_else(|| panic!("'result' should be a number, got {body}"));
    assert!(
        actual == expected || (actual - expected).abs() <= f64::EPSILON * expected.abs(),
        "Expected result {expected} but got {actual}"
    );
}

/// Verifica una respuesta de error `{"error": <message>}` con el status dado.
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    response
        .assert_status(status)
        .assert_content_type_contains("application/json");

    let body: Value = response.json();
    let obj = body.as_object().expect("Response should be a JSON object");
    assert_eq!(obj.len(), 1, "Only 'error' expected, got {body}");
    assert_eq!(obj["error"], message, "Unexpected error body: {body}");
}

/// Verifica un 400 con body `{"error": ...}` sin fijar el mensaje.
pub fn assert_bad_request(response: &TestResponse) -> String {
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    body["error"]
        .as_str()
        .unwrap_or_else(|| panic!("'error' should be a string, got {body}"))
        .to_string()
}
