use super::*;

#[test]
fn failure_message_prefers_message_then_error() {
    let body = serde_json::json!({"message":"m1","error":"m2"});
    assert_eq!(failure_message(400, &body), "m1");

    let body = serde_json::json!({"error":"m2"});
    assert_eq!(failure_message(400, &body), "m2");
}

#[test]
fn failure_message_passes_server_text_through_verbatim() {
    let body = serde_json::json!({"message":"invalid credentials"});
    let err = ApiError::failure(400, &body);
    assert_eq!(err.to_string(), "invalid credentials");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn failure_message_generic_for_silent_server_fault() {
    let err = ApiError::failure(503, &serde_json::json!({}));
    assert_eq!(err.to_string(), "server error: 503");
}

#[test]
fn failure_message_generic_for_silent_client_error() {
    let err = ApiError::failure(404, &serde_json::Value::Null);
    assert_eq!(err.to_string(), "request failed: 404");
}

#[test]
fn unauthorized_reports_its_status() {
    assert_eq!(ApiError::Unauthorized.status(), Some(401));
    assert_eq!(ApiError::Decode.status(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}
