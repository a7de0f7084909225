//! Auth-session state: the single authoritative holder of who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read `Session` from context; all
//! mutation goes through `SessionStore` operations (never direct field
//! assignment from views). The API gateway's 401 path is the only
//! mutation the store does not perform itself; the root watches the
//! gateway's epoch signal and applies `invalidated` here.
//!
//! DESIGN
//! ======
//! `Session` is a plain struct with pure transitions so the state machine
//! is natively testable; `SessionStore` wraps it in a signal and performs
//! the backend round trips and token persistence around those transitions.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::gateway::ApiGateway;
use crate::net::types::{LoginRequest, ProfileUpdate, RegisterRequest, User};
use crate::util::token_store;

/// Lifecycle phase of the client session.
///
/// `Uninitialized → Loading` at startup, then `Loading` settles into
/// `Authenticated` or `Unauthenticated`; afterwards only login/register
/// and logout/invalidation move between the settled phases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Loading,
    Unauthenticated,
    Authenticated,
}

/// The client's record of whether a user is authenticated and who they are.
///
/// Invariant: `token` is present exactly when `phase` is `Authenticated`,
/// and then `user` is present too.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub phase: SessionPhase,
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// Whether protected views may render.
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// True until the initial restore settles. Route guards show a
    /// placeholder while this holds.
    pub fn loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Uninitialized | SessionPhase::Loading)
    }

    /// Whether the initial restore has settled either way.
    pub fn settled(&self) -> bool {
        matches!(self.phase, SessionPhase::Unauthenticated | SessionPhase::Authenticated)
    }

    /// `Uninitialized → Loading`; no-op once initialization has begun.
    pub fn begin_restore(&mut self) {
        if self.phase == SessionPhase::Uninitialized {
            self.phase = SessionPhase::Loading;
        }
    }

    /// `Loading → Authenticated` with the restored token and fetched profile.
    pub fn restore_succeeded(&mut self, token: String, user: User) {
        self.phase = SessionPhase::Authenticated;
        self.token = Some(token);
        self.user = Some(user);
    }

    /// `Loading → Unauthenticated`. Nothing is committed to memory; the
    /// persisted token is cleared only by logout or the gateway's 401 path.
    pub fn restore_failed(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.token = None;
        self.user = None;
    }

    /// `Unauthenticated → Authenticated` after a successful login/register.
    pub fn login_succeeded(&mut self, token: String, user: User) {
        self.phase = SessionPhase::Authenticated;
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Wholesale profile replacement from a successful update echo.
    pub fn profile_replaced(&mut self, user: User) {
        if self.is_authenticated() {
            self.user = Some(user);
        }
    }

    /// Explicit logout: settle `Unauthenticated` from any phase. Idempotent.
    pub fn signed_out(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.token = None;
        self.user = None;
    }

    /// Forced teardown from the gateway's 401 path. Returns whether an
    /// authenticated session was actually torn down, so the caller
    /// redirects exactly once even when several 401s land together.
    pub fn invalidated(&mut self) -> bool {
        let was_authenticated = self.is_authenticated();
        if was_authenticated {
            self.signed_out();
        }
        was_authenticated
    }
}

/// Clone handle over the shared session signal plus the gateway.
///
/// Constructed once in `App` and shared via context.
#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Session>,
    gateway: ApiGateway,
}

impl SessionStore {
    pub fn new(session: RwSignal<Session>, gateway: ApiGateway) -> Self {
        Self { session, gateway }
    }

    /// The shared session signal, for consumers that only read.
    pub fn session(&self) -> RwSignal<Session> {
        self.session
    }

    /// Restore the persisted session at startup. With no stored token the
    /// session settles `Unauthenticated` without issuing any request; with
    /// one, the outcome of a single profile fetch decides. After this
    /// returns, `loading()` is never observable again.
    pub async fn initialize(&self) {
        if self.session.get_untracked().phase != SessionPhase::Uninitialized {
            return;
        }
        self.session.update(Session::begin_restore);

        let Some(token) = token_store::load() else {
            self.session.update(Session::restore_failed);
            return;
        };
        match self.gateway.fetch_profile().await {
            Ok(user) => self.session.update(|s| s.restore_succeeded(token, user)),
            Err(_) => self.session.update(Session::restore_failed),
        }
    }

    /// Exchange credentials for a session. On failure the prior session
    /// state is untouched and the server's message is returned.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), ApiError> {
        let auth = self.gateway.login(credentials).await?;
        token_store::save(&auth.token);
        self.session.update(|s| s.login_succeeded(auth.token, auth.user));
        Ok(())
    }

    /// Create an account and sign in. Same contract as `login` with the
    /// richer signup payload.
    pub async fn register(&self, signup: &RegisterRequest) -> Result<(), ApiError> {
        let auth = self.gateway.register(signup).await?;
        token_store::save(&auth.token);
        self.session.update(|s| s.login_succeeded(auth.token, auth.user));
        Ok(())
    }

    /// Send the full edited profile. On success the in-memory user becomes
    /// exactly what the backend echoed; on failure it is untouched and the
    /// caller keeps its edit buffer. Rejected while unauthenticated.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        if !self.session.get_untracked().is_authenticated() {
            return Err(ApiError::Unauthorized);
        }
        let user = self.gateway.update_profile(update).await?;
        self.session.update(|s| s.profile_replaced(user));
        Ok(())
    }

    /// Clear the session from memory and durable storage. Idempotent,
    /// never fails.
    pub fn logout(&self) {
        token_store::clear();
        self.session.update(Session::signed_out);
    }
}
