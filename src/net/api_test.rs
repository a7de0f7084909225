#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;
use crate::net::gateway::testing;
use crate::util::token_store;

#[test]
fn quiz_endpoint_formats_expected_path() {
    assert_eq!(quiz_endpoint("q123"), "/api/quizzes/q123");
}

#[test]
fn quiz_submit_endpoint_formats_expected_path() {
    assert_eq!(quiz_submit_endpoint("q123"), "/api/quizzes/q123/submit");
}

#[test]
fn session_end_endpoint_formats_expected_path() {
    assert_eq!(session_end_endpoint("s9"), "/api/learning/session/s9/end");
}

#[test]
fn login_posts_credentials_and_decodes_auth_response() {
    testing::reset();
    token_store::clear();
    testing::enqueue(
        200,
        serde_json::json!({
            "token": "tok-1",
            "user": { "username": "sam", "email": "sam@example.com" }
        }),
    );

    let gateway = ApiGateway::with_base(String::new());
    let credentials =
        LoginRequest { username: "sam".to_owned(), password: "secret".to_owned() };
    let auth = block_on(gateway.login(&credentials)).expect("login response");

    assert_eq!(auth.token, "tok-1");
    assert_eq!(auth.user.username, "sam");

    let recorded = testing::recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].url, "/api/auth/login");
    assert_eq!(
        recorded[0].body,
        Some(serde_json::json!({ "username": "sam", "password": "secret" }))
    );
    // Login itself carries no bearer token.
    assert_eq!(recorded[0].token, None);
}

#[test]
fn profile_fetch_attaches_stored_bearer_token() {
    testing::reset();
    token_store::save("abc");
    testing::enqueue(
        200,
        serde_json::json!({ "username": "sam", "email": "sam@example.com" }),
    );

    let gateway = ApiGateway::with_base(String::new());
    let user = block_on(gateway.fetch_profile()).expect("profile");

    assert_eq!(user.username, "sam");
    assert_eq!(testing::recorded()[0].token.as_deref(), Some("abc"));
    token_store::clear();
}

#[test]
fn submit_quiz_serializes_unanswered_slots_as_null() {
    testing::reset();
    token_store::clear();
    testing::enqueue(
        200,
        serde_json::json!({ "score": 50.0, "totalQuestions": 2, "correctAnswers": 1 }),
    );

    let gateway = ApiGateway::with_base(String::new());
    let answers = SubmitQuizRequest { answers: vec![Some(2), None] };
    let result = block_on(gateway.submit_quiz("q1", &answers)).expect("submission result");

    assert_eq!(result.correct_answers, 1);
    assert_eq!(
        testing::recorded()[0].body,
        Some(serde_json::json!({ "answers": [2, null] }))
    );
}

#[test]
fn base_address_prefixes_every_path() {
    testing::reset();
    token_store::clear();
    testing::enqueue(200, serde_json::json!({ "languages": {} }));

    let gateway = ApiGateway::with_base("https://api.eduagent.example".to_owned());
    let _ = block_on(gateway.languages()).expect("languages");

    assert_eq!(
        testing::recorded()[0].url,
        "https://api.eduagent.example/api/translation/languages"
    );
}
