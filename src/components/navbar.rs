//! Top navigation bar for authenticated screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{Session, SessionStore};

const NAV_ITEMS: [(&str, &str); 4] = [
    ("/dashboard", "Dashboard"),
    ("/learning", "AI Learning Assistant"),
    ("/quizzes", "Quiz Generator"),
    ("/translation", "Translation Tools"),
];

/// Brand, section links with active highlight, and the profile/logout
/// actions. Only rendered while a user is signed in.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    let username = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            store.logout();
            navigate("/login", NavigateOptions::default());
        }
    };

    let pathname = location.pathname;
    let links = NAV_ITEMS
        .into_iter()
        .map(|(path, label)| {
            let active = move || pathname.get() == path;
            view! {
                <a class="navbar__link" class:navbar__link--active=active href=path>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/dashboard">
                "🎓 EduAgent"
            </a>
            <div class="navbar__links">{links}</div>
            <div class="navbar__user">
                <a class="navbar__link" href="/profile" title="Profile">
                    {username}
                </a>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
