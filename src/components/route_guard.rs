//! Route guard gating protected views on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in `RequireAuth` so redirect
//! behavior is identical across screens and never re-implemented per view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Render protected children only when the session is authenticated.
///
/// While the initial restore is settling this shows a neutral placeholder;
/// once settled unauthenticated it redirects to `/login`. Pure derived
/// function of session state; it holds no state of its own.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.settled() && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| {
                view! { <div class="route-guard__placeholder">"Loading..."</div> }
            }
        >
            {children()}
        </Show>
    }
}
