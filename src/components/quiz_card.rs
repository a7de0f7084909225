//! Reusable card for quiz list items.
//!
//! DESIGN
//! ======
//! Keeps quiz presentation consistent between the dashboard's recent list
//! and the quiz generator's full list while centralizing the take/results
//! navigation affordances.

#[cfg(test)]
#[path = "quiz_card_test.rs"]
mod quiz_card_test;

use leptos::prelude::*;

use crate::net::types::Quiz;

/// A card summarizing one quiz with the appropriate action link.
#[component]
pub fn QuizCard(quiz: Quiz) -> impl IntoView {
    let take_href = format!("/quiz/{}", quiz.id);
    let results_href = format!("/quiz/{}/results", quiz.id);
    let score = score_label(&quiz);
    let date = quiz.created_at.as_deref().map(short_date).unwrap_or_default().to_owned();
    let completed = quiz.completed;

    view! {
        <div class="quiz-card">
            <h3 class="quiz-card__title">{quiz.title}</h3>
            <p class="quiz-card__meta">{format!("{} - {}", quiz.subject, quiz.topic)}</p>
            <p class="quiz-card__score">{score}</p>
            <p class="quiz-card__date">{date}</p>
            <div class="quiz-card__actions">
                <Show
                    when=move || completed
                    fallback={
                        let take_href = take_href.clone();
                        move || {
                            view! {
                                <a class="btn btn--primary" href=take_href.clone()>
                                    "Take Quiz"
                                </a>
                            }
                        }
                    }
                >
                    <a class="btn" href=results_href.clone()>
                        "View Results"
                    </a>
                </Show>
            </div>
        </div>
    }
}

/// Score line for a quiz card.
fn score_label(quiz: &Quiz) -> String {
    match quiz.score {
        Some(score) if quiz.completed => format!("Score: {score:.0}%"),
        _ => "Not completed".to_owned(),
    }
}

/// Calendar-day prefix of an ISO 8601 timestamp.
fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
