use super::*;
use crate::net::types::Difficulty;

fn quiz(completed: bool, score: Option<f64>) -> Quiz {
    Quiz {
        id: "q1".to_owned(),
        title: "Algebra Basics".to_owned(),
        subject: "Mathematics".to_owned(),
        topic: "Algebra".to_owned(),
        difficulty: Difficulty::Easy,
        description: None,
        questions: Vec::new(),
        learning_gaps: Vec::new(),
        completed,
        score,
        created_at: Some("2024-03-01T12:34:56Z".to_owned()),
    }
}

#[test]
fn score_label_shows_percentage_when_completed() {
    assert_eq!(score_label(&quiz(true, Some(87.5))), "Score: 88%");
}

#[test]
fn score_label_reports_not_completed() {
    assert_eq!(score_label(&quiz(false, None)), "Not completed");
    // A stale score without completion still reads as not completed.
    assert_eq!(score_label(&quiz(false, Some(40.0))), "Not completed");
}

#[test]
fn short_date_takes_calendar_day_prefix() {
    assert_eq!(short_date("2024-03-01T12:34:56Z"), "2024-03-01");
    assert_eq!(short_date("2024"), "2024");
}
