//! Networking modules for the backend HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns the outbound client and the 401 invalidation policy,
//! `api` adds one thin wrapper per backend endpoint, `types` defines the
//! wire schema, and `error` the failure taxonomy callers receive.

pub mod api;
pub mod error;
pub mod gateway;
pub mod types;
