#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::util::token_store;

fn gateway() -> ApiGateway {
    testing::reset();
    token_store::clear();
    ApiGateway::with_base(String::new())
}

// =============================================================
// Status interpretation
// =============================================================

#[test]
fn success_body_decodes_into_expected_type() {
    let gw = gateway();
    testing::enqueue(200, serde_json::json!({ "response": "hello" }));

    let body: crate::net::types::ChatResponse =
        block_on(gw.get("/api/learning/chat")).expect("decoded");
    assert_eq!(body.response, "hello");
}

#[test]
fn mismatched_success_body_is_a_decode_error() {
    let gw = gateway();
    testing::enqueue(200, serde_json::json!({ "unexpected": true }));

    let result: Result<crate::net::types::ChatResponse, ApiError> =
        block_on(gw.get("/api/learning/chat"));
    assert_eq!(result, Err(ApiError::Decode));
}

#[test]
fn error_status_surfaces_server_message() {
    let gw = gateway();
    testing::enqueue(400, serde_json::json!({ "message": "invalid credentials" }));

    let result: Result<serde_json::Value, ApiError> = block_on(gw.get("/api/auth/login"));
    assert_eq!(
        result,
        Err(ApiError::Api { status: 400, message: "invalid credentials".to_owned() })
    );
}

#[test]
fn transport_failure_is_a_network_error() {
    let gw = gateway();
    // No scripted response: the transport reports a network failure.
    let result: Result<serde_json::Value, ApiError> = block_on(gw.get("/api/quizzes"));
    assert!(matches!(result, Err(ApiError::Network(_))));
}

// =============================================================
// 401 invalidation policy
// =============================================================

#[test]
fn unauthorized_clears_token_and_bumps_epoch() {
    let gw = gateway();
    token_store::save("stale");
    testing::enqueue(401, serde_json::json!({ "message": "jwt expired" }));

    let result: Result<serde_json::Value, ApiError> = block_on(gw.get("/api/quizzes"));

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(token_store::load(), None);
    assert_eq!(gw.unauthorized_epoch().get_untracked(), 1);
}

#[test]
fn each_unauthorized_response_bumps_epoch_once() {
    let gw = gateway();
    token_store::save("stale");
    testing::enqueue(401, serde_json::Value::Null);
    testing::enqueue(401, serde_json::Value::Null);

    let _: Result<serde_json::Value, ApiError> = block_on(gw.get("/api/quizzes"));
    let _: Result<serde_json::Value, ApiError> = block_on(gw.get("/api/learning/sessions"));

    // Two failing responses, two epoch bumps; the session's own
    // idempotent teardown collapses them into one redirect.
    assert_eq!(gw.unauthorized_epoch().get_untracked(), 2);
    assert_eq!(token_store::load(), None);
}

#[test]
fn non_401_errors_leave_token_and_epoch_alone() {
    let gw = gateway();
    token_store::save("abc");
    testing::enqueue(500, serde_json::Value::Null);

    let result: Result<serde_json::Value, ApiError> = block_on(gw.get("/api/quizzes"));

    assert_eq!(result, Err(ApiError::Api { status: 500, message: "server error: 500".to_owned() }));
    assert_eq!(token_store::load(), Some("abc".to_owned()));
    assert_eq!(gw.unauthorized_epoch().get_untracked(), 0);
    token_store::clear();
}
