use super::*;

#[test]
fn mismatched_passwords_are_rejected_first() {
    assert_eq!(validate_signup("abcdef", "abcdeg"), Some("Passwords do not match"));
    // Mismatch wins even when both are also too short.
    assert_eq!(validate_signup("ab", "cd"), Some("Passwords do not match"));
}

#[test]
fn short_passwords_are_rejected() {
    assert_eq!(
        validate_signup("abc12", "abc12"),
        Some("Password must be at least 6 characters long")
    );
}

#[test]
fn matching_long_enough_password_passes() {
    assert_eq!(validate_signup("abc123", "abc123"), None);
}
