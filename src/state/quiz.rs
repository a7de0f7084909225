//! Quiz-taking state: one question visible at a time, answers held
//! locally until a single submit round trip.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use crate::net::types::{Quiz, SubmissionResult};

/// The most recent grading result, handed from the quiz-taking page to
/// the results page across navigation. A direct load of the results URL
/// has no submission in hand and falls back to the stored quiz score.
#[derive(Clone, Debug, PartialEq)]
pub struct LastSubmission {
    pub quiz_id: String,
    pub result: SubmissionResult,
}

/// Synthesize a result view for a completed quiz opened without a fresh
/// submission, from the score stored on the quiz document.
pub fn fallback_result(quiz: &Quiz) -> SubmissionResult {
    let total_questions = quiz.questions.len();
    let score = quiz.score.unwrap_or(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let correct_answers = ((score / 100.0) * total_questions as f64).round() as usize;
    SubmissionResult { score, total_questions, correct_answers, results: Vec::new() }
}

/// State for taking one quiz. Discarded on navigation; nothing here is
/// cached or reconciled beyond the last successful fetch.
#[derive(Clone, Debug, Default)]
pub struct QuizTaking {
    pub quiz: Option<Quiz>,
    pub current: usize,
    /// One slot per question; `None` means unanswered.
    pub answers: Vec<Option<usize>>,
    pub submitting: bool,
}

impl QuizTaking {
    /// Install a freshly fetched quiz and reset navigation and answers.
    pub fn loaded(&mut self, quiz: Quiz) {
        self.answers = vec![None; quiz.questions.len()];
        self.current = 0;
        self.submitting = false;
        self.quiz = Some(quiz);
    }

    pub fn question_count(&self) -> usize {
        self.quiz.as_ref().map_or(0, |q| q.questions.len())
    }

    /// Record the selected option for the question at `index`.
    pub fn select_answer(&mut self, index: usize, option: usize) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = Some(option);
        }
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.question_count() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump directly to a question from the navigation strip.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.question_count() {
            self.current = index;
        }
    }

    pub fn on_last_question(&self) -> bool {
        self.question_count() > 0 && self.current + 1 == self.question_count()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn unanswered_count(&self) -> usize {
        self.answers.len() - self.answered_count()
    }

    /// Progress through the quiz as a whole percentage, based on the
    /// question currently in view.
    pub fn progress_percent(&self) -> u32 {
        let total = self.question_count();
        if total == 0 {
            return 0;
        }
        let current = u32::try_from(self.current + 1).unwrap_or(u32::MAX);
        let total = u32::try_from(total).unwrap_or(u32::MAX);
        (current * 100) / total
    }
}
