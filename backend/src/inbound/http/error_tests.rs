//! Tests for HTTP error mapping.

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::ResponseError;
use rstest::rstest;
use serde_json::{json, Value};

use crate::domain::Error;

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[actix_web::test]
async fn error_response_carries_code_and_message() {
    let error = Error::not_found("Task not found");
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let value: Value = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(value.get("code").and_then(Value::as_str), Some("not_found"));
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Task not found")
    );
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("connection string leaked").with_details(json!({"secret": "x"}));
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let value: Value = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("Internal server error")
    );
    assert!(value.get("details").is_none());
}

#[actix_web::test]
async fn non_internal_errors_keep_their_details() {
    let error = Error::invalid_request("bad").with_details(json!({"field": "title"}));
    let response = ResponseError::error_response(&error);

    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let value: Value = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(
        value
            .get("details")
            .and_then(|d| d.get("field"))
            .and_then(Value::as_str),
        Some("title")
    );
}
