//! Persistent session store: the auth token and user record that survive a
//! page reload.
//!
//! DESIGN
//! ======
//! The store speaks to a small `StorageBackend` trait so the browser
//! (`localStorage`) and tests (in-memory map) share one implementation of the
//! save/load/clear rules. `load` reports its result as a typed
//! [`LoadOutcome`]; a corrupt user record is cleared here and never reaches
//! callers as an error.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::User;
use crate::util::storage;
pub use crate::util::storage::StorageError;

/// Storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON-encoded [`User`].
pub const USER_KEY: &str = "user";

/// Minimal string key/value medium the session store persists into.
pub trait StorageBackend {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage::get_item(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage::set_item(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        storage::remove_item(key)
    }
}

/// Process-local map. Clones share the same entries, which lets a test keep a
/// handle on the medium while a manager owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}

/// A token paired with the user it authenticates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Result of reading the persisted session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both keys present and the user record decoded.
    Session(Session),
    /// The user record was present but unreadable; both keys were cleared.
    Corrupt,
    /// No usable session was stored.
    Absent,
}

/// Save/load/clear rules for the two session keys.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Persist `token` and `user`. The user is written first; if the token
    /// write then fails the user key is removed again so neither key is left
    /// describing a session the other does not.
    ///
    /// # Errors
    ///
    /// Returns the first backend or encoding failure.
    pub fn save(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(user).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.set(USER_KEY, &raw_user)?;
        if let Err(err) = self.backend.set(TOKEN_KEY, token) {
            let _ = self.backend.remove(USER_KEY);
            return Err(err);
        }
        Ok(())
    }

    /// Read the stored session. Read failures count as [`LoadOutcome::Absent`].
    pub fn load(&self) -> LoadOutcome {
        let token = self.backend.get(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty());
        let raw_user = self.backend.get(USER_KEY).ok().flatten();
        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return LoadOutcome::Absent;
        };
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => LoadOutcome::Session(Session { token, user }),
            Err(e) => {
                log::warn!("discarding unreadable stored user record: {e}");
                self.clear();
                LoadOutcome::Corrupt
            }
        }
    }

    /// Remove both keys. Safe to call when nothing is stored.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.backend.remove(key) {
                log::debug!("could not remove `{key}` from session storage: {e}");
            }
        }
    }
}
