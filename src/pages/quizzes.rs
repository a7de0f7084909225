//! Quiz generator page: analytics overview, quiz list, and the generate
//! dialog.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::quiz_card::QuizCard;
use crate::net::gateway::ApiGateway;
use crate::net::types::{Difficulty, QuizAnalytics};
use crate::state::catalog::{SUBJECTS, topics_for};

#[component]
pub fn QuizzesPage() -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();

    let quizzes = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move { gateway.quizzes().await.unwrap_or_default() }
        }
    });
    let analytics = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move { gateway.quiz_analytics().await.ok() }
        }
    });

    let show_dialog = RwSignal::new(false);

    view! {
        <div class="quizzes-page">
            <header class="quizzes-page__header">
                <div>
                    <h1>"📝 Quiz Generator"</h1>
                    <p class="quizzes-page__subtitle">
                        "Create quizzes based on your learning gaps and track your progress"
                    </p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_dialog.set(true)>
                    "+ Generate New Quiz"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading analytics..."</p> }>
                {move || {
                    analytics
                        .get()
                        .map(|overview| {
                            overview.map(|overview| view! { <AnalyticsOverview overview=overview/> })
                        })
                }}
            </Suspense>

            <section class="quizzes-page__list">
                <h2>"Your Quizzes"</h2>
                <Suspense fallback=move || view! { <p>"Loading quizzes..."</p> }>
                    {move || {
                        quizzes
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="tile__hint">
                                            "No quizzes yet. Generate your first quiz to get started!"
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="quizzes-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|quiz| view! { <QuizCard quiz=quiz/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <Show when=move || show_dialog.get()>
                <GenerateQuizDialog
                    on_close=Callback::new(move |()| show_dialog.set(false))
                />
            </Show>
        </div>
    }
}

/// Aggregate analytics tiles plus the recent-performance strip.
#[component]
fn AnalyticsOverview(overview: QuizAnalytics) -> impl IntoView {
    let recent = overview.recent_performance.clone();
    let recent_count = recent.len();

    view! {
        <div class="quizzes-page__analytics">
            <div class="tile">
                <p class="tile__value">{overview.total_quizzes}</p>
                <p class="tile__hint">"Total Quizzes"</p>
            </div>
            <div class="tile">
                <p class="tile__value">{format!("{:.0}%", overview.average_score)}</p>
                <p class="tile__hint">"Average Score"</p>
            </div>
            <div class="tile">
                <p class="tile__value">{recent_count}</p>
                <p class="tile__hint">"Recent Quizzes"</p>
            </div>
        </div>
        <Show when=move || { recent_count > 0 }>
            <section class="quizzes-page__performance">
                <h2>"Recent Performance"</h2>
                <div class="quizzes-page__performance-cards">
                    {recent
                        .iter()
                        .map(|point| {
                            view! {
                                <div class="tile">
                                    <h3 class="tile__heading">{point.subject.clone()}</h3>
                                    <p class="tile__hint">{point.topic.clone()}</p>
                                    <p class="tile__value">{format!("{:.0}%", point.score)}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </Show>
    }
}

/// Modal dialog collecting subject, topic, and difficulty, then
/// navigating into the freshly generated quiz.
#[component]
fn GenerateQuizDialog(on_close: Callback<()>) -> impl IntoView {
    let gateway = expect_context::<ApiGateway>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(not(feature = "hydrate"))]
    let _ = use_navigate();

    let subject = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let difficulty = RwSignal::new(Difficulty::Medium);
    let error = RwSignal::new(String::new());
    let generating = RwSignal::new(false);

    let submit = move |_| {
        if generating.get() {
            return;
        }
        let subject_value = subject.get().trim().to_owned();
        let topic_value = topic.get().trim().to_owned();
        if subject_value.is_empty() || topic_value.is_empty() {
            error.set("Select both a subject and a topic.".to_owned());
            return;
        }
        generating.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::GenerateQuizRequest {
                    subject: subject_value,
                    topic: topic_value,
                    difficulty: difficulty.get_untracked(),
                    learning_gaps: Vec::new(),
                };
                match gateway.generate_quiz(&request).await {
                    Ok(generated) => {
                        navigate(
                            &format!("/quiz/{}", generated.quiz_id),
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        error.set(e.to_string());
                        generating.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (subject_value, topic_value, &gateway);
        }
    };

    let topic_options = move || {
        topics_for(&subject.get())
            .iter()
            .map(|t| (*t).to_owned())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Generate New Quiz"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error">
                        <span>{move || error.get()}</span>
                        <button class="alert__dismiss" on:click=move |_| error.set(String::new())>
                            "✕"
                        </button>
                    </div>
                </Show>

                <label class="dialog__label">
                    "Subject"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            subject.set(event_target_value(&ev));
                            topic.set(String::new());
                        }
                        prop:value=move || subject.get()
                    >
                        <option value="">"Select a subject"</option>
                        {SUBJECTS
                            .into_iter()
                            .map(|s| view! { <option value=s>{s}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__label">
                    "Topic"
                    <Show
                        when=move || !topic_options().is_empty()
                        fallback=move || {
                            view! {
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="Enter a topic"
                                    prop:value=move || topic.get()
                                    on:input=move |ev| topic.set(event_target_value(&ev))
                                />
                            }
                        }
                    >
                        <select
                            class="dialog__input"
                            on:change=move |ev| topic.set(event_target_value(&ev))
                            prop:value=move || topic.get()
                        >
                            <option value="">"Select a topic"</option>
                            {move || {
                                topic_options()
                                    .into_iter()
                                    .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </Show>
                </label>

                <label class="dialog__label">
                    "Difficulty"
                    <select
                        class="dialog__input"
                        on:change=move |ev| difficulty.set(Difficulty::from_code(&event_target_value(&ev)))
                        prop:value=move || difficulty.get().label()
                    >
                        <option value="easy">"Easy"</option>
                        <option value="medium">"Medium"</option>
                        <option value="hard">"Hard"</option>
                    </select>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit disabled=move || generating.get()>
                        {move || if generating.get() { "Generating..." } else { "Generate Quiz" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
