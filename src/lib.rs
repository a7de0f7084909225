//! # eduagent-client
//!
//! Leptos + WASM frontend for the EduAgent educational platform.
//!
//! This crate contains pages, components, application state, the wire
//! schema, and the HTTP gateway to the backend API. Authentication state
//! lives in a single session store; every backend call goes through one
//! gateway that attaches the bearer token and enforces the global
//! 401-invalidation policy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
