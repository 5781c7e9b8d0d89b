//! Tests de validacion de entrada.

mod helpers;

use axum::http::StatusCode;
use helpers::{assert_bad_request, assert_error, client};
use serde_json::json;

const BINARY_ROUTES: [&str; 5] = ["/add", "/subtract", "/multiply", "/divide", "/modulo"];

// === Operandos no numericos ===

#[tokio::test]
async fn non_numeric_num1_names_the_field() {
    let client = client();

    for route in BINARY_ROUTES {
        let response = client
            .post_json(route, json!({"num1": "abc", "num2": 1}))
            .await;

        assert_error(&response, StatusCode::BAD_REQUEST, "num1 must be a number");
    }
}

#[tokio::test]
async fn non_numeric_num2_names_the_field() {
    let client = client();

    for route in BINARY_ROUTES {
        let response = client
            .post_json(route, json!({"num1": 1, "num2": "abc"}))
            .await;

        assert_error(&response, StatusCode::BAD_REQUEST, "num2 must be a number");
    }
}

#[tokio::test]
async fn numeric_strings_are_rejected_everywhere() {
    let response = client()
        .post_json("/add", json!({"num1": "1", "num2": "2"}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "num1 must be a number");
}

#[tokio::test]
async fn type_check_runs_before_zero_check() {
    let response = client()
        .post_json("/divide", json!({"num1": "abc", "num2": 0}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "num1 must be a number");
}

#[tokio::test]
async fn booleans_and_arrays_are_not_numbers() {
    let client = client();

    let response = client
        .post_json("/multiply", json!({"num1": true, "num2": 2}))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "num1 must be a number");

    let response = client
        .post_json("/exponentiate", json!({"base": 2, "exponent": [3]}))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "exponent must be a number");
}

// === Campos ausentes ===

#[tokio::test]
async fn missing_operand_is_required() {
    let response = client().post_json("/subtract", json!({"num1": 1})).await;

    assert_error(&response, StatusCode::BAD_REQUEST, "num2 is required");
}

#[tokio::test]
async fn null_operand_is_required() {
    let response = client()
        .post_json("/exponentiate", json!({"base": null, "exponent": 2}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "base is required");
}

// === Body mal formado ===

#[tokio::test]
async fn non_object_body_is_rejected() {
    let response = client().post_json("/add", json!([1, 2])).await;

    assert_error(
        &response,
        StatusCode::BAD_REQUEST,
        "Request body must be a JSON object",
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = client()
        .post_raw("/add", "application/json", r#"{"num1": 1, "num2":"#)
        .await;

    let message = assert_bad_request(&response);
    assert!(!message.is_empty());
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let response = client()
        .post_raw("/add", "text/plain", r#"{"num1": 1, "num2": 2}"#)
        .await;

    let message = assert_bad_request(&response);
    assert!(message.contains("Content-Type"), "{message}");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let padding = "x".repeat(200 * 1024);
    let response = client()
        .post_json("/add", json!({"num1": 1, "num2": 2, "padding": padding}))
        .await;

    assert_error(
        &response,
        StatusCode::PAYLOAD_TOO_LARGE,
        "Request body too large",
    );
}

// === Rutas y metodos ===

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let response = client()
        .post_json("/factorial", json!({"number": 5}))
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn get_on_operation_route_is_not_allowed() {
    let response = client().get("/add").await;

    assert_error(&response, StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
}
