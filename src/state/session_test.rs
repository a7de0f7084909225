#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::gateway::testing;
use crate::net::types::LearningProfile;

fn user(name: &str) -> User {
    User {
        id: Some("u1".to_owned()),
        username: name.to_owned(),
        email: format!("{name}@example.com"),
        created_at: None,
        learning_profile: LearningProfile::default(),
    }
}

fn user_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "username": name,
        "email": format!("{name}@example.com")
    })
}

fn store() -> (SessionStore, RwSignal<Session>) {
    testing::reset();
    token_store::clear();
    let session = RwSignal::new(Session::default());
    let store = SessionStore::new(session, ApiGateway::with_base(String::new()));
    (store, session)
}

// =============================================================
// Session state machine
// =============================================================

#[test]
fn default_session_is_uninitialized_and_loading() {
    let session = Session::default();
    assert_eq!(session.phase, SessionPhase::Uninitialized);
    assert!(session.loading());
    assert!(!session.settled());
    assert!(!session.is_authenticated());
}

#[test]
fn begin_restore_only_leaves_uninitialized() {
    let mut session = Session::default();
    session.begin_restore();
    assert_eq!(session.phase, SessionPhase::Loading);

    session.restore_failed();
    session.begin_restore();
    assert_eq!(session.phase, SessionPhase::Unauthenticated);
}

#[test]
fn restore_succeeded_authenticates_with_token_and_user() {
    let mut session = Session::default();
    session.begin_restore();
    session.restore_succeeded("abc".to_owned(), user("sam"));

    assert!(session.is_authenticated());
    assert!(!session.loading());
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.user.as_ref().map(|u| u.username.as_str()), Some("sam"));
}

#[test]
fn signed_out_is_idempotent() {
    let mut session = Session::default();
    session.login_succeeded("abc".to_owned(), user("sam"));
    session.signed_out();
    session.signed_out();

    assert_eq!(session.phase, SessionPhase::Unauthenticated);
    assert_eq!(session.token, None);
    assert_eq!(session.user, None);
}

#[test]
fn invalidated_tears_down_exactly_once() {
    let mut session = Session::default();
    session.login_succeeded("abc".to_owned(), user("sam"));

    // Two 401s arriving together: only the first teardown reports true,
    // so only one redirect fires.
    assert!(session.invalidated());
    assert!(!session.invalidated());
    assert_eq!(session.phase, SessionPhase::Unauthenticated);
    assert_eq!(session.token, None);
}

#[test]
fn invalidated_before_authentication_is_a_no_op() {
    let mut session = Session::default();
    session.begin_restore();
    assert!(!session.invalidated());
    assert_eq!(session.token, None);
}

#[test]
fn profile_replaced_requires_authentication() {
    let mut session = Session::default();
    session.profile_replaced(user("sam"));
    assert_eq!(session.user, None);

    session.login_succeeded("abc".to_owned(), user("sam"));
    session.profile_replaced(user("samantha"));
    assert_eq!(session.user.as_ref().map(|u| u.username.as_str()), Some("samantha"));
}

// =============================================================
// initialize()
// =============================================================

#[test]
fn initialize_without_stored_token_settles_without_any_request() {
    let (store, session) = store();

    block_on(store.initialize());

    assert_eq!(session.get_untracked().phase, SessionPhase::Unauthenticated);
    assert!(testing::recorded().is_empty());
}

#[test]
fn initialize_with_stored_token_restores_the_profile() {
    let (store, session) = store();
    token_store::save("abc");
    testing::enqueue(200, user_json("sam"));

    block_on(store.initialize());

    let state = session.get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("sam"));
    assert_eq!(state.token.as_deref(), Some("abc"));

    let recorded = testing::recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].url, "/api/auth/profile");
    assert_eq!(recorded[0].token.as_deref(), Some("abc"));
    token_store::clear();
}

#[test]
fn initialize_keeps_stored_token_on_transport_failure() {
    let (store, session) = store();
    token_store::save("abc");
    // No scripted response: the profile fetch fails at the transport.

    block_on(store.initialize());

    assert_eq!(session.get_untracked().phase, SessionPhase::Unauthenticated);
    // Only logout or a 401 clears the persisted token; a flaky network
    // must not force re-authentication on the next reload.
    assert_eq!(token_store::load(), Some("abc".to_owned()));
    token_store::clear();
}

#[test]
fn initialize_with_rejected_token_clears_it() {
    let (store, session) = store();
    token_store::save("stale");
    testing::enqueue(401, serde_json::json!({ "message": "jwt expired" }));

    block_on(store.initialize());

    assert_eq!(session.get_untracked().phase, SessionPhase::Unauthenticated);
    assert_eq!(token_store::load(), None);
}

#[test]
fn initialize_runs_only_once() {
    let (store, session) = store();

    block_on(store.initialize());
    token_store::save("abc");
    block_on(store.initialize());

    // The second call is a no-op: already settled, no profile fetch.
    assert!(testing::recorded().is_empty());
    assert_eq!(session.get_untracked().phase, SessionPhase::Unauthenticated);
    token_store::clear();
}

// =============================================================
// login / register / logout
// =============================================================

#[test]
fn login_commits_and_persists_on_success() {
    let (store, session) = store();
    block_on(store.initialize());
    testing::enqueue(200, serde_json::json!({ "token": "tok-1", "user": user_json("sam") }));

    let credentials =
        LoginRequest { username: "sam".to_owned(), password: "secret".to_owned() };
    block_on(store.login(&credentials)).expect("login");

    let state = session.get_untracked();
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(token_store::load(), Some("tok-1".to_owned()));
    token_store::clear();
}

#[test]
fn failed_login_surfaces_exact_message_and_changes_nothing() {
    let (store, session) = store();
    block_on(store.initialize());
    testing::enqueue(400, serde_json::json!({ "message": "invalid credentials" }));

    let credentials =
        LoginRequest { username: "sam".to_owned(), password: "bad".to_owned() };
    let err = block_on(store.login(&credentials)).expect_err("login must fail");

    assert_eq!(err.to_string(), "invalid credentials");
    let state = session.get_untracked();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert_eq!(state.token, None);
    assert_eq!(token_store::load(), None);
}

#[test]
fn register_commits_like_login() {
    let (store, session) = store();
    block_on(store.initialize());
    testing::enqueue(200, serde_json::json!({ "token": "tok-2", "user": user_json("newbie") }));

    let signup = RegisterRequest {
        username: "newbie".to_owned(),
        email: "newbie@example.com".to_owned(),
        password: "secret1".to_owned(),
        learning_profile: LearningProfile::default(),
    };
    block_on(store.register(&signup)).expect("register");

    assert!(session.get_untracked().is_authenticated());
    assert_eq!(token_store::load(), Some("tok-2".to_owned()));
    token_store::clear();
}

#[test]
fn login_then_logout_ends_unauthenticated_with_no_persisted_token() {
    let (store, session) = store();
    block_on(store.initialize());
    testing::enqueue(200, serde_json::json!({ "token": "tok-1", "user": user_json("sam") }));
    block_on(store.login(&LoginRequest {
        username: "sam".to_owned(),
        password: "secret".to_owned(),
    }))
    .expect("login");

    store.logout();

    let state = session.get_untracked();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert_eq!(token_store::load(), None);

    // Logging out again is harmless.
    store.logout();
    assert_eq!(session.get_untracked().phase, SessionPhase::Unauthenticated);
}

// =============================================================
// update_profile
// =============================================================

fn authenticated_store() -> (SessionStore, RwSignal<Session>) {
    let (store, session) = store();
    block_on(store.initialize());
    testing::enqueue(200, serde_json::json!({ "token": "tok-1", "user": user_json("sam") }));
    block_on(store.login(&LoginRequest {
        username: "sam".to_owned(),
        password: "secret".to_owned(),
    }))
    .expect("login");
    (store, session)
}

fn profile_update() -> ProfileUpdate {
    ProfileUpdate {
        username: "sam".to_owned(),
        email: "sam@example.com".to_owned(),
        learning_profile: LearningProfile {
            subjects: vec!["Physics".to_owned()],
            ..LearningProfile::default()
        },
    }
}

#[test]
fn update_profile_failure_leaves_profile_untouched() {
    let (store, session) = authenticated_store();
    let before = session.get_untracked().user.clone();
    testing::enqueue(422, serde_json::json!({ "message": "email already taken" }));

    let err = block_on(store.update_profile(&profile_update())).expect_err("must fail");

    assert_eq!(err.to_string(), "email already taken");
    assert_eq!(session.get_untracked().user, before);
    token_store::clear();
}

#[test]
fn update_profile_success_commits_the_echoed_document() {
    let (store, session) = authenticated_store();
    let echoed = serde_json::json!({
        "_id": "u1",
        "username": "sam",
        "email": "sam@example.com",
        "learningProfile": { "subjects": ["Physics"], "currentLevel": "advanced" }
    });
    testing::enqueue(200, echoed.clone());

    block_on(store.update_profile(&profile_update())).expect("update");

    let committed = session.get_untracked().user.expect("user");
    let expected: User = serde_json::from_value(echoed).expect("echoed user");
    assert_eq!(committed, expected);
    token_store::clear();
}

#[test]
fn update_profile_while_unauthenticated_is_rejected() {
    let (store, _session) = store();
    block_on(store.initialize());

    let err = block_on(store.update_profile(&profile_update())).expect_err("rejected");
    assert_eq!(err, ApiError::Unauthorized);
    assert!(testing::recorded().is_empty());
}

// =============================================================
// Gateway-driven invalidation
// =============================================================

#[test]
fn unauthorized_response_invalidates_the_session_once() {
    let (store, session) = authenticated_store();
    let gateway = ApiGateway::with_base(String::new());
    testing::enqueue(401, serde_json::Value::Null);
    testing::enqueue(401, serde_json::Value::Null);

    // Two in-flight calls both come back 401.
    let first = block_on(gateway.quizzes()).expect_err("first 401");
    let second = block_on(gateway.quizzes()).expect_err("second 401");
    assert_eq!(first, ApiError::Unauthorized);
    assert_eq!(second, ApiError::Unauthorized);
    assert_eq!(token_store::load(), None);

    // The root watcher applies `invalidated` per epoch bump; only the
    // first teardown redirects.
    let mut teardowns = 0;
    for _ in 0..gateway.unauthorized_epoch().get_untracked() {
        let mut torn_down = false;
        session.update(|s| torn_down = s.invalidated());
        if torn_down {
            teardowns += 1;
        }
    }
    assert_eq!(teardowns, 1);
    assert_eq!(session.get_untracked().phase, SessionPhase::Unauthenticated);
    let _ = store;
}
