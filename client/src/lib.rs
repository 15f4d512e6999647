//! # studydeck-client
//!
//! Leptos + WASM frontend for the StudyDeck study assistant.
//!
//! This crate contains the session core (persistent store, auth manager,
//! route guard), the REST client for the study-material backend, and every
//! screen of the app: sign-in, OAuth callback, password update, dashboard,
//! quiz taking, flashcard viewing, and account settings.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod paths;
pub mod state;
pub mod util;

/// Browser entry point: mounts the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
