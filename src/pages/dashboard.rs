//! Dashboard page: learning-progress tiles, AI recommendations, and
//! recent quizzes.

use leptos::prelude::*;

use crate::components::quiz_card::QuizCard;
use crate::net::gateway::ApiGateway;
use crate::state::session::Session;

/// Personalized dashboard for the signed-in user.
///
/// Recommendations and the quiz list are fetched in parallel and resolve
/// independently; neither blocks the other's section.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let gateway = expect_context::<ApiGateway>();

    let recommendations = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move { gateway.recommendations().await.ok() }
        }
    });
    let quizzes = LocalResource::new({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move { gateway.quizzes().await.unwrap_or_default() }
        }
    });

    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };
    let level = move || {
        session
            .get()
            .user
            .map(|user| user.learning_profile.current_level.label())
            .unwrap_or("Beginner")
    };
    let subjects = move || {
        session
            .get()
            .user
            .map(|user| user.learning_profile.subjects)
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome back, {}! 🎓", username())}</h1>
                <p class="dashboard-page__subtitle">
                    "Your personalized learning dashboard for SDG 4 - Quality Education"
                </p>
            </header>

            <div class="dashboard-page__tiles">
                <div class="tile">
                    <h2 class="tile__heading">"Current Level"</h2>
                    <p class="tile__value">{level}</p>
                    <p class="tile__hint">"Keep learning to advance!"</p>
                </div>
                <div class="tile">
                    <h2 class="tile__heading">"Subjects"</h2>
                    <div class="chip-row">
                        {move || {
                            let list = subjects();
                            if list.is_empty() {
                                view! { <p class="tile__hint">"No subjects selected"</p> }.into_any()
                            } else {
                                list.into_iter()
                                    .take(3)
                                    .map(|subject| view! { <span class="chip chip--static">{subject}</span> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
                <div class="tile">
                    <h2 class="tile__heading">"Quick Actions"</h2>
                    <div class="dashboard-page__actions">
                        <a class="btn" href="/learning">
                            "AI Learning Assistant"
                        </a>
                        <a class="btn" href="/quizzes">
                            "Generate Quiz"
                        </a>
                        <a class="btn" href="/translation">
                            "Translation Tools"
                        </a>
                    </div>
                </div>
            </div>

            <section class="dashboard-page__recommendations">
                <h2>"💡 AI Learning Recommendations"</h2>
                <Suspense fallback=move || view! { <p>"Loading recommendations..."</p> }>
                    {move || {
                        recommendations
                            .get()
                            .map(|recs| match recs {
                                Some(recs) => {
                                    let topics = recs.next_topics;
                                    let methods = recs.study_methods;
                                    let has_topics = !topics.is_empty();
                                    let has_methods = !methods.is_empty();
                                    view! {
                                        <div class="recommendations">
                                            <Show when=move || has_topics>
                                                <h3>"Next Topics to Study:"</h3>
                                                <div class="chip-row">
                                                    {topics
                                                        .iter()
                                                        .map(|topic| {
                                                            view! { <span class="chip chip--static">{topic.clone()}</span> }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            </Show>
                                            <Show when=move || has_methods>
                                                <h3>"Recommended Study Methods:"</h3>
                                                <ul>
                                                    {methods
                                                        .iter()
                                                        .map(|method| view! { <li>{method.clone()}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </Show>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! { <p class="tile__hint">"Recommendations are unavailable right now."</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__recent">
                <h2>"📚 Recent Quizzes"</h2>
                <Suspense fallback=move || view! { <p>"Loading quizzes..."</p> }>
                    {move || {
                        quizzes
                            .get()
                            .map(|recent| {
                                if recent.is_empty() {
                                    view! { <p class="tile__hint">"No quizzes yet. Generate your first one!"</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {recent
                                                .into_iter()
                                                .take(3)
                                                .map(|quiz| view! { <QuizCard quiz=quiz/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
                <div class="dashboard-page__more">
                    <a class="btn" href="/quizzes">
                        "View All Quizzes"
                    </a>
                </div>
            </section>
        </div>
    }
}
