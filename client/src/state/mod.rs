//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `session_store` hold the persisted sign-in session. The study
//! modules (`library`, `study`, `quiz`, `flashcards`) are plain state machines
//! owned by dashboard signals; none of them touch the browser directly.

pub mod auth;
pub mod flashcards;
pub mod library;
pub mod quiz;
pub mod session_store;
pub mod study;
