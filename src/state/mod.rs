//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. `session` is the one shared mutable resource (provided
//! via context); the rest are page-local models wrapped in page-local
//! signals.

pub mod assistant;
pub mod catalog;
pub mod profile;
pub mod quiz;
pub mod session;
pub mod translation;
