//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading session state from Leptos
//! context providers; per-screen orchestration lives in `pages`.

pub mod navbar;
pub mod quiz_card;
pub mod route_guard;
