//! Browser `localStorage` access for string values.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue so the session store can stay
//! backend-agnostic. Non-browser builds (SSR, native tests) report the
//! storage as unavailable instead of pretending to persist anything.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Failure talking to a key/value persistence medium.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write storage key `{key}`")]
    WriteFailed { key: String },
    #[error("failed to encode stored value: {0}")]
    Encode(String),
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Read the raw string stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] when no `localStorage` is reachable.
pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(StorageError::Unavailable)
    }
}

/// Store `value` under `key`.
///
/// # Errors
///
/// Returns an error when storage is unavailable or the write is rejected
/// (for example when the quota is exhausted).
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed { key: key.to_owned() })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable)
    }
}

/// Remove `key`; removing a missing key succeeds.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] when no `localStorage` is reachable.
pub fn remove_item(key: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.remove_item(key).map_err(|_| StorageError::Unavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(StorageError::Unavailable)
    }
}
