//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthManager` is the single writer of "who is signed in". The app builds
//! one in `App`, wraps it in an `RwSignal`, and provides it through context;
//! route guards and user-aware components read snapshots and call `login`,
//! `logout`, or `check_auth` through `update`, which serializes mutations.
//!
//! DESIGN
//! ======
//! Every mutation writes through to the [`SessionStore`] before the in-memory
//! state flips, so anything that navigates after `login` returns already sees
//! the persisted session. Hydration from storage happens once per process.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::paths;
use crate::state::session_store::{BrowserStorage, LoadOutcome, SessionStore, StorageBackend};
use crate::util::navigation::HardRedirect;

/// Snapshot of the authentication state.
///
/// Authentication is derived from the presence of a user, so a state that
/// claims to be signed in without a user cannot be built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    hydrated: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the first `check_auth` (or a `login`) has completed.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }
}

/// Owner of the auth state and the persisted session behind it.
#[derive(Clone, Debug)]
pub struct AuthManager<B> {
    store: SessionStore<B>,
    state: AuthState,
    token: Option<String>,
}

impl<B: StorageBackend> AuthManager<B> {
    /// Logged out and not yet hydrated.
    pub fn new(backend: B) -> Self {
        Self { store: SessionStore::new(backend), state: AuthState::default(), token: None }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn store(&self) -> &SessionStore<B> {
        &self.store
    }

    /// Token to send as `Authorization: Bearer` on authenticated API calls.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Record a session obtained from a successful authentication exchange.
    ///
    /// A failed store write only costs reload survival; the in-memory session
    /// remains valid for the rest of the process.
    pub fn login(&mut self, token: impl Into<String>, user: User) {
        let token = token.into();
        debug_assert!(!token.is_empty(), "login requires a non-empty token");
        if let Err(e) = self.store.save(&token, &user) {
            log::warn!("session not persisted, continuing in memory: {e}");
        }
        log::info!("signed in as {}", user.id);
        self.token = Some(token);
        self.state = AuthState { user: Some(user), hydrated: true };
    }

    /// Forget the session locally. The returned redirect to the app root must
    /// be followed by the caller once it has observed the logged-out state.
    pub fn logout(&mut self) -> HardRedirect {
        self.store.clear();
        self.token = None;
        self.state.user = None;
        HardRedirect::to(paths::ROOT)
    }

    /// Hydrate from storage on first call; later calls do nothing.
    pub fn check_auth(&mut self) {
        if self.state.hydrated {
            return;
        }
        match self.store.load() {
            LoadOutcome::Session(session) => {
                self.token = Some(session.token);
                self.state = AuthState { user: Some(session.user), hydrated: true };
            }
            LoadOutcome::Corrupt | LoadOutcome::Absent => {
                self.store.clear();
                self.token = None;
                self.state = AuthState { user: None, hydrated: true };
            }
        }
    }
}

/// The app-wide auth manager as provided through Leptos context.
pub type SharedAuth = RwSignal<AuthManager<BrowserStorage>>;

/// Create the browser-backed manager and provide it to descendants.
pub fn provide_auth() -> SharedAuth {
    let auth: SharedAuth = RwSignal::new(AuthManager::new(BrowserStorage));
    provide_context(auth);
    auth
}

/// Fetch the manager provided by [`provide_auth`].
pub fn use_auth() -> SharedAuth {
    expect_context::<SharedAuth>()
}

/// Tracked snapshot of the current state.
pub fn auth_snapshot(auth: SharedAuth) -> AuthState {
    auth.with(|manager| manager.state().clone())
}

/// Untracked copy of the bearer token, for use inside event handlers.
pub fn bearer_token_untracked(auth: SharedAuth) -> Option<String> {
    auth.with_untracked(|manager| manager.bearer_token().map(str::to_owned))
}
