//! Signup page: credentials plus the initial learning-profile selections.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Language, Level};
use crate::state::catalog::{LEARNING_GOALS, SUBJECTS};
use crate::state::profile::toggle_selection;
use crate::state::session::SessionStore;

/// Client-side checks run before the signup request is sent.
fn validate_signup(password: &str, confirm: &str) -> Option<&'static str> {
    if password != confirm {
        return Some("Passwords do not match");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters long");
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let level = RwSignal::new(Level::Beginner);
    let language = RwSignal::new(Language::En);
    let subjects = RwSignal::new(Vec::<String>::new());
    let goals = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        if let Some(message) = validate_signup(&password.get(), &confirm.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let signup = crate::net::types::RegisterRequest {
                    username: username.get_untracked().trim().to_owned(),
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                    learning_profile: crate::net::types::LearningProfile {
                        subjects: subjects.get_untracked(),
                        current_level: level.get_untracked(),
                        learning_goals: goals.get_untracked(),
                        preferred_language: language.get_untracked(),
                        strengths: Vec::new(),
                        weaknesses: Vec::new(),
                    },
                };
                match store.register(&signup).await {
                    Ok(()) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &navigate);
        }
    };

    let subject_chips = SUBJECTS
        .into_iter()
        .map(|subject| {
            let selected = move || subjects.get().iter().any(|s| s == subject);
            view! {
                <button
                    type="button"
                    class="chip"
                    class:chip--selected=selected
                    on:click=move |_| subjects.update(|list| toggle_selection(list, subject))
                >
                    {subject}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let goal_chips = LEARNING_GOALS
        .into_iter()
        .map(|goal| {
            let selected = move || goals.get().iter().any(|g| g == goal);
            view! {
                <button
                    type="button"
                    class="chip chip--accent"
                    class:chip--selected=selected
                    on:click=move |_| goals.update(|list| toggle_selection(list, goal))
                >
                    {goal}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="auth-page auth-page--wide">
            <div class="auth-card">
                <h1>"Join EduAgent"</h1>
                <p class="auth-card__subtitle">"Create your personalized learning profile"</p>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error">
                        <span>{move || error.get()}</span>
                        <button class="alert__dismiss" on:click=move |_| error.set(String::new())>
                            "✕"
                        </button>
                    </div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "Username"
                            <input
                                class="auth-form__input"
                                type="text"
                                autocomplete="username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Email Address"
                            <input
                                class="auth-form__input"
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <h2 class="auth-form__section">"Learning Profile"</h2>
                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "Current Level"
                            <select
                                class="auth-form__input"
                                on:change=move |ev| level.set(Level::from_code(&event_target_value(&ev)))
                                prop:value=move || level.get().code()
                            >
                                <option value="beginner">"Beginner"</option>
                                <option value="intermediate">"Intermediate"</option>
                                <option value="advanced">"Advanced"</option>
                            </select>
                        </label>
                        <label class="auth-form__label">
                            "Preferred Language"
                            <select
                                class="auth-form__input"
                                on:change=move |ev| language.set(Language::from_code(&event_target_value(&ev)))
                                prop:value=move || language.get().code()
                            >
                                <option value="en">"English"</option>
                                <option value="es">"Spanish"</option>
                                <option value="fr">"French"</option>
                                <option value="de">"German"</option>
                            </select>
                        </label>
                    </div>

                    <p class="auth-form__section">"Subjects of Interest:"</p>
                    <div class="chip-row">{subject_chips}</div>

                    <p class="auth-form__section">"Learning Goals:"</p>
                    <div class="chip-row">{goal_chips}</div>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
