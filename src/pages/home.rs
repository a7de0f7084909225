//! Public landing page with sign-in and register calls to action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Landing page — signed-in visitors go straight to the dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"🎓 EduAgent"</h1>
                <p class="home-page__tagline">
                    "Personalized AI-powered learning for everyone. SDG 4 - Quality Education"
                </p>
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/register">
                        "Get Started"
                    </a>
                    <a class="btn" href="/login">
                        "Sign In"
                    </a>
                </div>
            </section>

            <section class="home-page__features">
                <div class="home-page__feature">
                    <h3>"AI Learning Assistant"</h3>
                    <p>"Get personalized help with any subject through guided chat sessions."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"Adaptive Quizzes"</h3>
                    <p>"Generate quizzes targeting your learning gaps and track your progress."</p>
                </div>
                <div class="home-page__feature">
                    <h3>"Translation Tools"</h3>
                    <p>"Translate educational content for accessibility in four languages."</p>
                </div>
            </section>
        </div>
    }
}
