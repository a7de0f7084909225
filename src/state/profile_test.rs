use super::*;
use crate::net::types::Level;

fn user() -> User {
    User {
        id: Some("u1".to_owned()),
        username: "sam".to_owned(),
        email: "sam@example.com".to_owned(),
        created_at: None,
        learning_profile: LearningProfile {
            subjects: vec!["Physics".to_owned()],
            current_level: Level::Intermediate,
            ..LearningProfile::default()
        },
    }
}

#[test]
fn toggle_selection_adds_then_removes() {
    let mut selected = Vec::new();
    toggle_selection(&mut selected, "Physics");
    toggle_selection(&mut selected, "Art");
    assert_eq!(selected, vec!["Physics", "Art"]);

    toggle_selection(&mut selected, "Physics");
    assert_eq!(selected, vec!["Art"]);
}

#[test]
fn from_user_seeds_the_full_buffer() {
    let form = ProfileForm::from_user(&user());
    assert_eq!(form.username, "sam");
    assert_eq!(form.learning_profile.subjects, vec!["Physics"]);
    assert_eq!(form.learning_profile.current_level, Level::Intermediate);
}

#[test]
fn to_update_carries_edits_without_touching_the_source() {
    let source = user();
    let mut form = ProfileForm::from_user(&source);
    form.toggle_subject("Art");
    form.toggle_strength("Analysis");

    let update = form.to_update();
    assert_eq!(update.learning_profile.subjects, vec!["Physics", "Art"]);
    assert_eq!(update.learning_profile.strengths, vec!["Analysis"]);

    // The committed user the buffer was seeded from is unchanged.
    assert_eq!(source.learning_profile.subjects, vec!["Physics"]);
    assert!(source.learning_profile.strengths.is_empty());
}

#[test]
fn reseeding_discards_edits() {
    let source = user();
    let mut form = ProfileForm::from_user(&source);
    form.toggle_subject("Physics");
    assert!(form.learning_profile.subjects.is_empty());

    form = ProfileForm::from_user(&source);
    assert_eq!(form.learning_profile.subjects, vec!["Physics"]);
}
