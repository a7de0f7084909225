//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, submit handlers,
//! local form signals) and delegates shared chrome to `components` and
//! shared state to context. Every backend call goes through the gateway.

pub mod assistant;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod quiz_results;
pub mod quiz_taking;
pub mod quizzes;
pub mod register;
pub mod translation;
