//! Networking modules for the study-material REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps failures to `ApiError`; `types`
//! defines the JSON wire schema shared by requests and responses.

pub mod api;
pub mod types;
