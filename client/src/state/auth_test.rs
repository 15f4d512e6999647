use super::*;
use crate::state::session_store::{MemoryStorage, TOKEN_KEY, USER_KEY};

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User { id: "u1".to_owned(), email: "a@b.com".to_owned(), first_name: None, last_name: None }
}

fn fresh_manager(storage: &MemoryStorage) -> AuthManager<MemoryStorage> {
    AuthManager::new(storage.clone())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_manager_is_logged_out_and_not_hydrated() {
    let manager = fresh_manager(&MemoryStorage::default());
    assert!(!manager.state().is_authenticated());
    assert!(!manager.state().is_hydrated());
    assert!(manager.state().user().is_none());
    assert_eq!(manager.bearer_token(), None);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_and_flips_state() {
    let storage = MemoryStorage::default();
    let mut manager = fresh_manager(&storage);
    manager.login("abc123", make_user());

    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc123"));
    assert_eq!(storage.get(USER_KEY).unwrap().as_deref(), Some(r#"{"id":"u1","email":"a@b.com"}"#));
    assert!(manager.state().is_authenticated());
    assert!(manager.state().is_hydrated());
    assert_eq!(manager.state().user(), Some(&make_user()));
    assert_eq!(manager.bearer_token(), Some("abc123"));
}

#[test]
fn login_survives_unavailable_storage() {
    let mut manager = AuthManager::new(BrowserStorage);
    manager.login("abc123", make_user());
    assert!(manager.state().is_authenticated());
    assert_eq!(manager.bearer_token(), Some("abc123"));
}

#[test]
fn login_then_reload_restores_session() {
    let storage = MemoryStorage::default();
    fresh_manager(&storage).login("abc123", make_user());

    let mut reloaded = fresh_manager(&storage);
    reloaded.check_auth();
    assert!(reloaded.state().is_authenticated());
    assert_eq!(reloaded.state().user(), Some(&make_user()));
    assert_eq!(reloaded.bearer_token(), Some("abc123"));
}

#[test]
fn login_after_hydration_overwrites_user() {
    let storage = MemoryStorage::default();
    let mut manager = fresh_manager(&storage);
    manager.check_auth();
    let other = User { id: "u2".to_owned(), email: "c@d.com".to_owned(), first_name: None, last_name: None };
    manager.login("tok2", other.clone());
    assert_eq!(manager.state().user(), Some(&other));
}

// =============================================================
// check_auth
// =============================================================

#[test]
fn check_auth_without_session_hydrates_logged_out() {
    let mut manager = fresh_manager(&MemoryStorage::default());
    manager.check_auth();
    assert!(manager.state().is_hydrated());
    assert!(!manager.state().is_authenticated());
}

#[test]
fn check_auth_is_idempotent() {
    let storage = MemoryStorage::default();
    fresh_manager(&storage).login("abc123", make_user());

    let mut manager = fresh_manager(&storage);
    manager.check_auth();
    let first = manager.state().clone();
    for _ in 0..5 {
        manager.check_auth();
        assert_eq!(manager.state(), &first);
    }
}

#[test]
fn check_auth_does_not_rehydrate_after_storage_changes() {
    let storage = MemoryStorage::default();
    let mut manager = fresh_manager(&storage);
    manager.check_auth();

    storage.set(TOKEN_KEY, "late").unwrap();
    storage.set(USER_KEY, r#"{"id":"u9","email":"z@z.com"}"#).unwrap();
    manager.check_auth();
    assert!(!manager.state().is_authenticated());
}

#[test]
fn check_auth_self_heals_corrupt_user() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "abc123").unwrap();
    storage.set(USER_KEY, "not json at all").unwrap();

    let mut manager = fresh_manager(&storage);
    manager.check_auth();
    assert!(!manager.state().is_authenticated());
    assert!(manager.state().is_hydrated());
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
}

#[test]
fn check_auth_clears_orphaned_token() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "abc123").unwrap();

    let mut manager = fresh_manager(&storage);
    manager.check_auth();
    assert!(!manager.state().is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_persistence_and_keeps_hydration() {
    let storage = MemoryStorage::default();
    let mut manager = fresh_manager(&storage);
    manager.login("abc123", make_user());

    let redirect = manager.logout();
    assert_eq!(redirect.target(), "/");
    assert_eq!(manager.store().load(), LoadOutcome::Absent);
    assert!(!manager.state().is_authenticated());
    assert!(manager.state().user().is_none());
    assert!(manager.state().is_hydrated());
    assert_eq!(manager.bearer_token(), None);
}

#[test]
fn logout_when_logged_out_only_redirects() {
    let mut manager = fresh_manager(&MemoryStorage::default());
    manager.check_auth();
    let before = manager.state().clone();

    let redirect = manager.logout();
    assert_eq!(redirect, HardRedirect::to("/"));
    assert_eq!(manager.state(), &before);
}

#[test]
fn logout_before_hydration_leaves_hydration_pending() {
    let mut manager = fresh_manager(&MemoryStorage::default());
    let _ = manager.logout();
    assert!(!manager.state().is_hydrated());
}
