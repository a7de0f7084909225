use super::*;
use crate::net::types::{Difficulty, Quiz, QuizQuestion};

fn quiz(questions: usize) -> Quiz {
    Quiz {
        id: "q1".to_owned(),
        title: "Algebra Basics".to_owned(),
        subject: "Mathematics".to_owned(),
        topic: "Algebra".to_owned(),
        difficulty: Difficulty::Medium,
        description: None,
        questions: (0..questions)
            .map(|n| QuizQuestion {
                question: format!("Question {n}"),
                options: vec!["a".to_owned(), "b".to_owned(), "c".to_owned(), "d".to_owned()],
                correct_answer: 0,
                explanation: None,
                topic: None,
                difficulty: None,
            })
            .collect(),
        learning_gaps: Vec::new(),
        completed: false,
        score: None,
        created_at: None,
    }
}

#[test]
fn loaded_resets_answers_and_position() {
    let mut state = QuizTaking::default();
    state.loaded(quiz(3));
    state.select_answer(0, 2);
    state.next();

    state.loaded(quiz(2));
    assert_eq!(state.current, 0);
    assert_eq!(state.answers, vec![None, None]);
    assert_eq!(state.question_count(), 2);
}

#[test]
fn select_answer_ignores_out_of_range_question() {
    let mut state = QuizTaking::default();
    state.loaded(quiz(2));
    state.select_answer(5, 1);
    assert_eq!(state.answered_count(), 0);
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut state = QuizTaking::default();
    state.loaded(quiz(2));

    state.previous();
    assert_eq!(state.current, 0);

    state.next();
    assert_eq!(state.current, 1);
    assert!(state.on_last_question());

    state.next();
    assert_eq!(state.current, 1);
}

#[test]
fn jump_to_only_accepts_valid_indices() {
    let mut state = QuizTaking::default();
    state.loaded(quiz(3));

    state.jump_to(2);
    assert_eq!(state.current, 2);

    state.jump_to(7);
    assert_eq!(state.current, 2);
}

#[test]
fn unanswered_count_tracks_remaining_slots() {
    let mut state = QuizTaking::default();
    state.loaded(quiz(3));
    assert_eq!(state.unanswered_count(), 3);

    state.select_answer(0, 1);
    state.select_answer(2, 0);
    assert_eq!(state.answered_count(), 2);
    assert_eq!(state.unanswered_count(), 1);

    // Re-answering the same question does not double count.
    state.select_answer(0, 3);
    assert_eq!(state.answered_count(), 2);
}

#[test]
fn fallback_result_recovers_counts_from_stored_score() {
    let mut completed = quiz(4);
    completed.completed = true;
    completed.score = Some(75.0);

    let result = fallback_result(&completed);
    assert_eq!(result.score, 75.0);
    assert_eq!(result.total_questions, 4);
    assert_eq!(result.correct_answers, 3);
    assert!(result.results.is_empty());
}

#[test]
fn fallback_result_handles_missing_score() {
    let result = fallback_result(&quiz(3));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.correct_answers, 0);
}

#[test]
fn progress_percent_reflects_position() {
    let mut state = QuizTaking::default();
    assert_eq!(state.progress_percent(), 0);

    state.loaded(quiz(4));
    assert_eq!(state.progress_percent(), 25);
    state.jump_to(3);
    assert_eq!(state.progress_percent(), 100);
}
