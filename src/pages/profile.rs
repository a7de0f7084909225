//! Profile page: read view plus an edit mode whose buffer commits only on
//! a successful save.

use leptos::prelude::*;

use crate::net::types::{Language, Level};
use crate::state::catalog::{LEARNING_GOALS, STRENGTHS, SUBJECTS, WEAKNESSES};
use crate::state::profile::ProfileForm;
use crate::state::session::{Session, SessionStore};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();

    let edit_mode = RwSignal::new(false);
    let form = RwSignal::new(ProfileForm::default());
    let saving = RwSignal::new(false);
    // `Some((is_success, text))` renders the inline dismissible banner.
    let message = RwSignal::new(None::<(bool, String)>);

    // Reseed the edit buffer whenever the committed user changes: on
    // first load and after every successful save.
    Effect::new(move || {
        if let Some(user) = session.get().user {
            form.set(ProfileForm::from_user(&user));
        }
    });

    let on_save = {
        let store = store.clone();
        move |_| {
            if saving.get() {
                return;
            }
            saving.set(true);
            message.set(None);

            #[cfg(feature = "hydrate")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    let update = form.get_untracked().to_update();
                    match store.update_profile(&update).await {
                        Ok(()) => {
                            message.set(Some((true, "Profile updated successfully!".to_owned())));
                            edit_mode.set(false);
                        }
                        Err(e) => message.set(Some((false, e.to_string()))),
                    }
                    saving.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &store;
            }
        }
    };

    let on_cancel = move |_| {
        if let Some(user) = session.get_untracked().user {
            form.set(ProfileForm::from_user(&user));
        }
        edit_mode.set(false);
        message.set(None);
    };

    let initial = move || {
        session
            .get()
            .user
            .and_then(|user| user.username.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };
    let member_since = move || {
        session
            .get()
            .user
            .and_then(|user| user.created_at)
            .map(|date| date.get(..10).unwrap_or(&date).to_owned())
    };

    let chip_row = move |catalog: &'static [&'static str],
                         selected: fn(&ProfileForm) -> &Vec<String>,
                         toggle: fn(&mut ProfileForm, &str)| {
        catalog
            .iter()
            .map(|item| {
                let item = *item;
                let is_selected = move || selected(&form.get()).iter().any(|s| s == item);
                view! {
                    <button
                        type="button"
                        class="chip"
                        class:chip--selected=is_selected
                        disabled=move || !edit_mode.get()
                        on:click=move |_| {
                            if edit_mode.get_untracked() {
                                form.update(|f| toggle(f, item));
                            }
                        }
                    >
                        {item}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="profile-page">
            <h1>"👤 My Profile"</h1>

            <Show when=move || message.get().is_some()>
                {move || {
                    message
                        .get()
                        .map(|(is_success, text)| {
                            view! {
                                <div
                                    class="alert"
                                    class:alert--success=is_success
                                    class:alert--error=!is_success
                                >
                                    <span>{text}</span>
                                    <button class="alert__dismiss" on:click=move |_| message.set(None)>
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                }}
            </Show>

            <div class="profile-page__columns">
                <aside class="profile-page__summary">
                    <div class="tile profile-page__identity">
                        <div class="profile-page__avatar">{initial}</div>
                        <h2>{move || session.get().user.map(|u| u.username).unwrap_or_default()}</h2>
                        <p class="tile__hint">
                            {move || session.get().user.map(|u| u.email).unwrap_or_default()}
                        </p>
                        {move || {
                            member_since()
                                .map(|date| {
                                    view! { <p class="tile__hint">{format!("Member since {date}")}</p> }
                                })
                        }}
                        <Show when=move || !edit_mode.get()>
                            <button
                                class="btn"
                                on:click=move |_| {
                                    edit_mode.set(true);
                                    message.set(None);
                                }
                            >
                                "Edit Profile"
                            </button>
                        </Show>
                    </div>

                    <div class="tile">
                        <h2 class="tile__heading">"Learning Statistics"</h2>
                        <p class="tile__hint">"Current Level"</p>
                        <p class="tile__value">
                            {move || {
                                session
                                    .get()
                                    .user
                                    .map(|u| u.learning_profile.current_level.label())
                                    .unwrap_or("Beginner")
                            }}
                        </p>
                        <p class="tile__hint">"Subjects"</p>
                        <p class="tile__value">
                            {move || {
                                let count = session
                                    .get()
                                    .user
                                    .map(|u| u.learning_profile.subjects.len())
                                    .unwrap_or_default();
                                format!("{count} subjects")
                            }}
                        </p>
                        <p class="tile__hint">"Learning Goals"</p>
                        <p class="tile__value">
                            {move || {
                                let count = session
                                    .get()
                                    .user
                                    .map(|u| u.learning_profile.learning_goals.len())
                                    .unwrap_or_default();
                                format!("{count} goals")
                            }}
                        </p>
                        <p class="tile__hint">"Preferred Language"</p>
                        <p class="tile__value">
                            {move || {
                                session
                                    .get()
                                    .user
                                    .map(|u| u.learning_profile.preferred_language.label())
                                    .unwrap_or("English")
                            }}
                        </p>
                    </div>
                </aside>

                <section class="profile-page__details">
                    <h2>{move || if edit_mode.get() { "Edit Profile" } else { "Profile Details" }}</h2>

                    <div class="profile-page__fields">
                        <label class="profile-page__label">
                            "Username"
                            <input
                                class="profile-page__input"
                                type="text"
                                disabled=move || !edit_mode.get()
                                prop:value=move || form.get().username
                                on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-page__label">
                            "Email"
                            <input
                                class="profile-page__input"
                                type="email"
                                disabled=move || !edit_mode.get()
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-page__label">
                            "Current Level"
                            <select
                                class="profile-page__input"
                                disabled=move || !edit_mode.get()
                                on:change=move |ev| {
                                    form.update(|f| {
                                        f.learning_profile.current_level =
                                            Level::from_code(&event_target_value(&ev));
                                    });
                                }
                                prop:value=move || form.get().learning_profile.current_level.code()
                            >
                                <option value="beginner">"Beginner"</option>
                                <option value="intermediate">"Intermediate"</option>
                                <option value="advanced">"Advanced"</option>
                            </select>
                        </label>
                        <label class="profile-page__label">
                            "Preferred Language"
                            <select
                                class="profile-page__input"
                                disabled=move || !edit_mode.get()
                                on:change=move |ev| {
                                    form.update(|f| {
                                        f.learning_profile.preferred_language =
                                            Language::from_code(&event_target_value(&ev));
                                    });
                                }
                                prop:value=move || form.get().learning_profile.preferred_language.code()
                            >
                                <option value="en">"English"</option>
                                <option value="es">"Spanish"</option>
                                <option value="fr">"French"</option>
                                <option value="de">"German"</option>
                            </select>
                        </label>
                    </div>

                    <p class="profile-page__section">"Subjects of Interest:"</p>
                    <div class="chip-row">
                        {chip_row(
                            &SUBJECTS,
                            |f| &f.learning_profile.subjects,
                            ProfileForm::toggle_subject,
                        )}
                    </div>

                    <p class="profile-page__section">"Learning Goals:"</p>
                    <div class="chip-row">
                        {chip_row(
                            &LEARNING_GOALS,
                            |f| &f.learning_profile.learning_goals,
                            ProfileForm::toggle_goal,
                        )}
                    </div>

                    <p class="profile-page__section">"Strengths:"</p>
                    <div class="chip-row">
                        {chip_row(
                            &STRENGTHS,
                            |f| &f.learning_profile.strengths,
                            ProfileForm::toggle_strength,
                        )}
                    </div>

                    <p class="profile-page__section">"Areas for Improvement:"</p>
                    <div class="chip-row">
                        {chip_row(
                            &WEAKNESSES,
                            |f| &f.learning_profile.weaknesses,
                            ProfileForm::toggle_weakness,
                        )}
                    </div>

                    <Show when=move || edit_mode.get()>
                        <div class="profile-page__actions">
                            <button class="btn" on:click=on_cancel disabled=move || saving.get()>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                on:click=on_save.clone()
                                disabled=move || saving.get()
                            >
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </Show>
                </section>
            </div>
        </div>
    }
}
