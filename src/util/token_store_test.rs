#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_none_before_any_save() {
    assert_eq!(load(), None);
}

#[test]
fn save_then_load_round_trips() {
    save("abc");
    assert_eq!(load(), Some("abc".to_owned()));
}

#[test]
fn save_replaces_previous_token() {
    save("first");
    save("second");
    assert_eq!(load(), Some("second".to_owned()));
}

#[test]
fn clear_removes_token_and_is_idempotent() {
    save("abc");
    clear();
    assert_eq!(load(), None);
    clear();
    assert_eq!(load(), None);
}
