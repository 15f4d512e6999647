//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the OAuth callback page share these decisions so the
//! redirect rules live in one place and stay testable without a DOM.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Route-guard progress for a protected subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Stored session not confirmed yet; show a neutral loading indicator.
    Verifying,
    /// Signed in; render the protected children.
    Authorized,
    /// Signed out; replace-navigate to sign-in and render nothing.
    Redirecting,
}

/// Map the auth snapshot to the guard state. Until hydration completes the
/// answer is `Verifying` whatever the authentication flag says.
pub fn guard_state(state: &AuthState) -> GuardState {
    match (state.is_hydrated(), state.is_authenticated()) {
        (false, _) => GuardState::Verifying,
        (true, true) => GuardState::Authorized,
        (true, false) => GuardState::Redirecting,
    }
}

/// Error indicator appended to the sign-in URL when the OAuth exchange fails.
pub const OAUTH_FAILED: &str = "oauth_failed";

/// What the callback page does on a given effect run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// First run with a usable code: exchange it.
    Exchange(String),
    /// First run without a usable code: send the user back to sign-in.
    MissingCode,
    /// The page already settled on an earlier run.
    Settled,
}

/// One-shot latch for the OAuth callback.
///
/// Owned by a single callback component instance. The first run arms it,
/// with or without a code, and every later run is `Settled` however often
/// the hosting effect re-runs.
#[derive(Clone, Debug, Default)]
pub struct ExchangeLatch {
    settled: bool,
}

impl ExchangeLatch {
    pub fn settle(&mut self, code: Option<String>) -> CallbackAction {
        if self.settled {
            return CallbackAction::Settled;
        }
        self.settled = true;
        match code.filter(|c| !c.trim().is_empty()) {
            Some(code) => CallbackAction::Exchange(code),
            None => CallbackAction::MissingCode,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// Where the callback page sends the user once the exchange settles.
pub fn callback_destination(exchange_succeeded: bool) -> String {
    if exchange_succeeded {
        crate::paths::DASHBOARD.to_owned()
    } else {
        crate::paths::login_with_error(OAUTH_FAILED)
    }
}
