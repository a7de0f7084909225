//! Quiz-taking page: one question at a time, local answer slots, a single
//! submit round trip.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::gateway::ApiGateway;
use crate::state::quiz::{LastSubmission, QuizTaking};

#[component]
pub fn QuizTakingPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    let last_submission = expect_context::<RwSignal<Option<LastSubmission>>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let taking = RwSignal::new(QuizTaking::default());
    let load_error = RwSignal::new(String::new());
    let confirm_unanswered = RwSignal::new(None::<usize>);

    let quiz_id = move || params.read().get("id").unwrap_or_default();

    let fetched = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            let id = quiz_id();
            async move { gateway.quiz(&id).await }
        }
    });

    // Install each freshly fetched quiz into the taking state exactly once.
    Effect::new(move || {
        let Some(result) = fetched.get() else {
            return;
        };
        match result {
            Ok(quiz) => taking.update(|state| {
                if state.quiz.as_ref().map(|q| q.id.as_str()) != Some(quiz.id.as_str()) {
                    state.loaded(quiz);
                }
            }),
            Err(e) => load_error.set(e.to_string()),
        }
    });

    let do_submit = {
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        move || {
            let state = taking.get_untracked();
            let Some(quiz) = state.quiz.clone() else {
                return;
            };
            if state.submitting {
                return;
            }
            taking.update(|s| s.submitting = true);

            #[cfg(feature = "hydrate")]
            {
                let gateway = gateway.clone();
                let navigate = navigate.clone();
                let answers = crate::net::types::SubmitQuizRequest { answers: state.answers.clone() };
                leptos::task::spawn_local(async move {
                    match gateway.submit_quiz(&quiz.id, &answers).await {
                        Ok(result) => {
                            last_submission
                                .set(Some(LastSubmission { quiz_id: quiz.id.clone(), result }));
                            navigate(
                                &format!("/quiz/{}/results", quiz.id),
                                leptos_router::NavigateOptions::default(),
                            );
                        }
                        Err(e) => {
                            load_error.set(e.to_string());
                            taking.update(|s| s.submitting = false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&gateway, &navigate, quiz);
            }
        }
    };

    let on_submit_click = {
        let do_submit = do_submit.clone();
        move |_| {
            let unanswered = taking.get_untracked().unanswered_count();
            if unanswered > 0 {
                confirm_unanswered.set(Some(unanswered));
            } else {
                do_submit();
            }
        }
    };

    let on_confirm_submit = {
        let do_submit = do_submit.clone();
        move |_| {
            confirm_unanswered.set(None);
            do_submit();
        }
    };

    view! {
        <div class="quiz-taking-page">
            <Show when=move || !load_error.get().is_empty()>
                <div class="alert alert--error">
                    <span>{move || load_error.get()}</span>
                    <a class="btn" href="/quizzes">
                        "Back to Quizzes"
                    </a>
                </div>
            </Show>

            <Show
                when=move || taking.get().quiz.is_some()
                fallback=move || view! { <p class="quiz-taking-page__loading">"Loading quiz..."</p> }
            >
                <QuizHeader taking=taking/>
                <CurrentQuestion taking=taking/>

                <div class="quiz-taking-page__nav">
                    <button
                        class="btn"
                        on:click=move |_| taking.update(QuizTaking::previous)
                        disabled=move || taking.get().current == 0
                    >
                        "← Previous"
                    </button>

                    <div class="quiz-taking-page__jump">
                        {move || {
                            let state = taking.get();
                            (0..state.question_count())
                                .map(|index| {
                                    let answered = state.answers.get(index).copied().flatten().is_some();
                                    let current = index == state.current;
                                    view! {
                                        <button
                                            class="quiz-taking-page__jump-btn"
                                            class:quiz-taking-page__jump-btn--current=current
                                            class:quiz-taking-page__jump-btn--answered=answered
                                            on:click=move |_| taking.update(|s| s.jump_to(index))
                                        >
                                            {index + 1}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    {
                        let on_submit_click = on_submit_click.clone();
                        view! {
                            <Show
                                when=move || taking.get().on_last_question()
                                fallback=move || {
                                    view! {
                                        <button class="btn btn--primary" on:click=move |_| taking.update(QuizTaking::next)>
                                            "Next →"
                                        </button>
                                    }
                                }
                            >
                                <button
                                    class="btn btn--primary"
                                    on:click=on_submit_click.clone()
                                    disabled=move || taking.get().submitting
                                >
                                    {move || if taking.get().submitting { "Submitting..." } else { "Submit Quiz" }}
                                </button>
                            </Show>
                        }
                    }
                </div>

                <LearningGapsNote taking=taking/>
            </Show>

            {
                let on_confirm_submit = on_confirm_submit.clone();
                view! {
                    <Show when=move || confirm_unanswered.get().is_some()>
                        <div class="dialog-backdrop" on:click=move |_| confirm_unanswered.set(None)>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <h2>"Unanswered Questions"</h2>
                                <p>
                                    {move || {
                                        let count = confirm_unanswered.get().unwrap_or_default();
                                        format!(
                                            "You have {count} unanswered question(s). Are you sure you want to \
                                             submit the quiz? Unanswered questions will be marked as incorrect."
                                        )
                                    }}
                                </p>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=move |_| confirm_unanswered.set(None)>
                                        "Cancel"
                                    </button>
                                    <button class="btn btn--primary" on:click=on_confirm_submit.clone()>
                                        "Submit Anyway"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </Show>
                }
            }
        </div>
    }
}

/// Title, difficulty badge, and progress strip.
#[component]
fn QuizHeader(taking: RwSignal<QuizTaking>) -> impl IntoView {
    view! {
        <header class="quiz-taking-page__header">
            {move || {
                let state = taking.get();
                state
                    .quiz
                    .as_ref()
                    .map(|quiz| {
                        let difficulty = quiz.difficulty.label();
                        view! {
                            <div class="quiz-taking-page__title-row">
                                <h1>{quiz.title.clone()}</h1>
                                <span class=format!("badge badge--{difficulty}")>{difficulty}</span>
                            </div>
                            <p class="quiz-taking-page__meta">
                                {format!("{} - {}", quiz.subject, quiz.topic)}
                            </p>
                            {quiz
                                .description
                                .clone()
                                .map(|description| {
                                    view! { <p class="quiz-taking-page__description">{description}</p> }
                                })}
                            <p class="quiz-taking-page__progress-label">
                                {format!(
                                    "Progress: Question {} of {}, answered {} / {} ({}% complete)",
                                    state.current + 1,
                                    state.question_count(),
                                    state.answered_count(),
                                    state.question_count(),
                                    state.progress_percent(),
                                )}
                            </p>
                            <progress
                                class="quiz-taking-page__progress"
                                max="100"
                                value=state.progress_percent().to_string()
                            ></progress>
                        }
                    })
            }}
        </header>
    }
}

/// The question currently in view with its answer options.
#[component]
fn CurrentQuestion(taking: RwSignal<QuizTaking>) -> impl IntoView {
    view! {
        <div class="quiz-taking-page__question">
            {move || {
                let state = taking.get();
                let index = state.current;
                state
                    .quiz
                    .as_ref()
                    .and_then(|quiz| quiz.questions.get(index))
                    .map(|question| {
                        let selected = state.answers.get(index).copied().flatten();
                        view! {
                            <h2>{format!("Question {}", index + 1)}</h2>
                            <p class="quiz-taking-page__prompt">{question.question.clone()}</p>
                            <div class="quiz-taking-page__options">
                                {question
                                    .options
                                    .iter()
                                    .enumerate()
                                    .map(|(option, text)| {
                                        let letter = option_letter(option);
                                        let chosen = selected == Some(option);
                                        view! {
                                            <label
                                                class="quiz-taking-page__option"
                                                class:quiz-taking-page__option--selected=chosen
                                            >
                                                <input
                                                    type="radio"
                                                    name="answer"
                                                    prop:checked=chosen
                                                    on:change=move |_| {
                                                        taking.update(|s| s.select_answer(index, option));
                                                    }
                                                />
                                                {format!("{letter}. {text}")}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Info strip naming the learning gaps the quiz targets, when any.
#[component]
fn LearningGapsNote(taking: RwSignal<QuizTaking>) -> impl IntoView {
    view! {
        <Show when=move || {
            taking.get().quiz.as_ref().is_some_and(|quiz| !quiz.learning_gaps.is_empty())
        }>
            <div class="alert alert--info">
                <p>"This quiz targets these learning gaps:"</p>
                <div class="chip-row">
                    {move || {
                        taking
                            .get()
                            .quiz
                            .map(|quiz| {
                                quiz.learning_gaps
                                    .iter()
                                    .map(|gap| {
                                        view! {
                                            <span class="chip chip--static">
                                                {format!("{}: {}", gap.topic, gap.gap_description)}
                                            </span>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}

/// `A`, `B`, `C`, ... labels for answer options.
fn option_letter(index: usize) -> char {
    char::from(b'A' + u8::try_from(index % 26).unwrap_or(0))
}
