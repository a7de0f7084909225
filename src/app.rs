//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs the one `ApiGateway` and `SessionStore`, provides them
//! (plus the shared session signal) via context, kicks off the startup
//! session restore, and wires the gateway's 401 epoch to the single
//! teardown-and-redirect effect. No other code registers invalidation
//! handling.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::RequireAuth;
use crate::net::gateway::ApiGateway;
use crate::pages::{
    assistant::AssistantPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, quiz_results::QuizResultsPage, quiz_taking::QuizTakingPage,
    quizzes::QuizzesPage, register::RegisterPage, translation::TranslationPage,
};
use crate::state::quiz::LastSubmission;
use crate::state::session::{Session, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let gateway = ApiGateway::new();
    let store = SessionStore::new(session, gateway.clone());
    // Grading results handed from quiz taking to the results page.
    let last_submission = RwSignal::new(None::<LastSubmission>);

    provide_context(session);
    provide_context(gateway);
    provide_context(store.clone());
    provide_context(last_submission);

    // Restore the persisted session once at startup.
    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.initialize().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/eduagent.css"/>
        <Title text="EduAgent"/>

        <Router>
            <InvalidationRedirect/>
            <Show when=move || session.get().is_authenticated()>
                <Navbar/>
            </Show>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("learning")
                    view=|| view! { <RequireAuth><AssistantPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("quizzes")
                    view=|| view! { <RequireAuth><QuizzesPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("quiz"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><QuizTakingPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("quiz"), ParamSegment("id"), StaticSegment("results"))
                    view=|| view! { <RequireAuth><QuizResultsPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("translation")
                    view=|| view! { <RequireAuth><TranslationPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}

/// The single consumer of the gateway's unauthorized epoch: tears the
/// session down and redirects to sign-in. `Session::invalidated` makes
/// the teardown idempotent, so several concurrent 401s still produce
/// exactly one redirect. Lives at the root so it outlives whichever view
/// issued the failing request.
#[component]
fn InvalidationRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let gateway = expect_context::<ApiGateway>();
    let navigate = use_navigate();

    Effect::new(move || {
        if gateway.unauthorized_epoch().get() == 0 {
            return;
        }
        let mut torn_down = false;
        session.update(|state| torn_down = state.invalidated());
        if torn_down {
            navigate("/login", NavigateOptions::default());
        }
    });
}
