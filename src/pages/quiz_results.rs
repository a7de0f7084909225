//! Quiz results page: score banner, per-question review, and a
//! performance summary.

#[cfg(test)]
#[path = "quiz_results_test.rs"]
mod quiz_results_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::gateway::ApiGateway;
use crate::net::types::{AnswerReview, Quiz, QuizQuestion, SubmissionResult};
use crate::state::quiz::{LastSubmission, fallback_result};

/// CSS band for a score: `success` / `warning` / `error`.
fn score_band(score: f64) -> &'static str {
    if score >= 80.0 {
        "success"
    } else if score >= 60.0 {
        "warning"
    } else {
        "error"
    }
}

/// Encouragement line matching the score.
fn score_message(score: f64) -> &'static str {
    if score >= 90.0 {
        "Outstanding! Excellent work!"
    } else if score >= 80.0 {
        "Great job! Well done!"
    } else if score >= 70.0 {
        "Good work! Keep it up!"
    } else if score >= 60.0 {
        "Not bad! Room for improvement."
    } else {
        "Keep practicing! You can do better."
    }
}

/// Verbal rating used in the performance summary.
fn score_rating(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else if score >= 40.0 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

#[component]
pub fn QuizResultsPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let last_submission = expect_context::<RwSignal<Option<LastSubmission>>>();
    let params = use_params_map();

    let quiz_id = move || params.read().get("id").unwrap_or_default();

    let fetched = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            let id = quiz_id();
            async move { gateway.quiz(&id).await.ok() }
        }
    });

    // A fresh submission handed over from quiz taking wins; a direct load
    // falls back to the score stored on the quiz document.
    let result_for = move |quiz: &Quiz| -> SubmissionResult {
        last_submission
            .get()
            .filter(|submission| submission.quiz_id == quiz.id)
            .map(|submission| submission.result)
            .unwrap_or_else(|| fallback_result(quiz))
    };

    view! {
        <div class="quiz-results-page">
            <Suspense fallback=move || view! { <p>"Loading results..."</p> }>
                {move || {
                    fetched
                        .get()
                        .map(|quiz| match quiz {
                            Some(quiz) => {
                                let result = result_for(&quiz);
                                view! { <ResultsView quiz=quiz result=result/> }.into_any()
                            }
                            None => {
                                view! {
                                    <div class="alert alert--error">
                                        <span>"Quiz not found"</span>
                                        <a class="btn" href="/quizzes">
                                            "Back to Quizzes"
                                        </a>
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ResultsView(quiz: Quiz, result: SubmissionResult) -> impl IntoView {
    let band = score_band(result.score);
    let retake_href = format!("/quiz/{}", quiz.id);
    let has_review = !result.results.is_empty();
    let questions = quiz.questions.clone();
    let reviews = result.results.clone();

    let accuracy = if result.total_questions > 0 {
        (result.correct_answers * 100) / result.total_questions
    } else {
        0
    };

    view! {
        <header class=format!("quiz-results-page__banner quiz-results-page__banner--{band}")>
            <h1>"Quiz Complete!"</h1>
            <h2>{quiz.title.clone()}</h2>
            <p>{format!("{} - {}", quiz.subject, quiz.topic)}</p>
            <p class="quiz-results-page__score">{format!("{:.0}%", result.score)}</p>
            <p>{format!("{} out of {} correct", result.correct_answers, result.total_questions)}</p>
            <p class="quiz-results-page__message">{score_message(result.score)}</p>
        </header>

        <div class="quiz-results-page__actions">
            <a class="btn btn--primary" href=retake_href>
                "Retake Quiz"
            </a>
            <a class="btn" href="/quizzes">
                "Back to Quizzes"
            </a>
            <a class="btn" href="/learning">
                "Ask the Assistant"
            </a>
        </div>

        <div class="quiz-results-page__columns">
            <section class="quiz-results-page__review">
                <h2>"Question Review"</h2>
                <p class="tile__hint">"Review your answers and learn from the explanations"</p>
                <Show
                    when=move || has_review
                    fallback=|| {
                        view! {
                            <p class="tile__hint">
                                "Per-question review is only available right after a submission."
                            </p>
                        }
                    }
                >
                    {
                        let questions = questions.clone();
                        let reviews = reviews.clone();
                        move || question_review(&questions, &reviews)
                    }
                </Show>
            </section>

            <aside class="quiz-results-page__summary">
                <h2>"Performance Summary"</h2>
                <div class="tile">
                    <p class="tile__hint">"Score Rating"</p>
                    <p class="tile__value">{score_rating(result.score)}</p>
                </div>
                <div class="tile">
                    <p class="tile__hint">"Questions Answered"</p>
                    <p class="tile__value">
                        {format!("{} / {}", result.correct_answers, result.total_questions)}
                    </p>
                </div>
                <div class="tile">
                    <p class="tile__hint">"Accuracy Rate"</p>
                    <p class="tile__value">{format!("{accuracy}%")}</p>
                </div>
            </aside>
        </div>
    }
}

/// One collapsible review entry per question, graded against the
/// submission's per-question results.
fn question_review(questions: &[QuizQuestion], reviews: &[AnswerReview]) -> impl IntoView + use<> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let review = reviews.get(index);
            let is_correct = review.is_some_and(|r| r.is_correct);
            let user_answer = review.and_then(|r| r.user_answer);
            let chosen_text = user_answer
                .and_then(|chosen| question.options.get(chosen).cloned())
                .unwrap_or_else(|| "No answer".to_owned());
            let correct_text = question
                .options
                .get(question.correct_answer)
                .cloned()
                .unwrap_or_default();
            view! {
                <details class="review" class:review--correct=is_correct>
                    <summary class="review__summary">
                        <span class="review__mark">{if is_correct { "✔" } else { "✘" }}</span>
                        {format!(
                            "Question {}: {}",
                            index + 1,
                            if is_correct { "Correct" } else { "Incorrect" },
                        )}
                    </summary>
                    <div class="review__body">
                        <p class="review__prompt">{question.question.clone()}</p>
                        <p>
                            <strong>"Your Answer: "</strong>
                            {chosen_text}
                        </p>
                        <Show when=move || !is_correct>
                            <p class="review__correct">
                                <strong>"Correct Answer: "</strong>
                                {correct_text.clone()}
                            </p>
                        </Show>
                        {question
                            .explanation
                            .clone()
                            .map(|explanation| {
                                view! {
                                    <p class="review__explanation">
                                        <strong>"Explanation: "</strong>
                                        {explanation}
                                    </p>
                                }
                            })}
                    </div>
                </details>
            }
        })
        .collect::<Vec<_>>()
}
