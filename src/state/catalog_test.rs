use super::*;

#[test]
fn catalogs_have_no_duplicates() {
    for catalog in [
        SUBJECTS.as_slice(),
        LEARNING_GOALS.as_slice(),
        STRENGTHS.as_slice(),
        WEAKNESSES.as_slice(),
    ] {
        let mut seen = std::collections::HashSet::new();
        assert!(catalog.iter().all(|item| seen.insert(item)));
    }
}

#[test]
fn curated_topics_exist_for_core_subjects() {
    assert!(topics_for("Mathematics").contains(&"Algebra"));
    assert!(topics_for("Computer Science").contains(&"Algorithms"));
}

#[test]
fn unknown_subject_gets_no_curated_topics() {
    assert!(topics_for("Art").is_empty());
    assert!(topics_for("Underwater Basketry").is_empty());
}
