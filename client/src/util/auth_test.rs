use super::*;
use crate::net::types::User;
use crate::state::auth::AuthManager;
use crate::state::session_store::MemoryStorage;

fn make_user() -> User {
    User { id: "u1".to_owned(), email: "a@b.com".to_owned(), first_name: None, last_name: None }
}

// =============================================================
// guard_state
// =============================================================

#[test]
fn guard_verifies_until_hydrated() {
    let manager = AuthManager::new(MemoryStorage::default());
    assert_eq!(guard_state(manager.state()), GuardState::Verifying);
}

#[test]
fn guard_redirects_when_hydrated_without_session() {
    let mut manager = AuthManager::new(MemoryStorage::default());
    manager.check_auth();
    assert_eq!(guard_state(manager.state()), GuardState::Redirecting);
}

#[test]
fn guard_authorizes_when_hydrated_with_session() {
    let mut manager = AuthManager::new(MemoryStorage::default());
    manager.login("abc123", make_user());
    assert_eq!(guard_state(manager.state()), GuardState::Authorized);
}

#[test]
fn guard_verifies_when_logout_precedes_hydration() {
    let mut manager = AuthManager::new(MemoryStorage::default());
    let _ = manager.logout();
    assert_eq!(guard_state(manager.state()), GuardState::Verifying);
}

#[test]
fn guard_redirects_after_logout() {
    let mut manager = AuthManager::new(MemoryStorage::default());
    manager.login("abc123", make_user());
    let _ = manager.logout();
    assert_eq!(guard_state(manager.state()), GuardState::Redirecting);
}

// =============================================================
// ExchangeLatch
// =============================================================

#[test]
fn latch_allows_exactly_one_exchange_per_instance() {
    let mut latch = ExchangeLatch::default();
    let mut calls = 0;
    for _ in 0..2 {
        if let CallbackAction::Exchange(code) = latch.settle(Some("code-1".to_owned())) {
            assert_eq!(code, "code-1");
            calls += 1;
        }
    }
    assert_eq!(calls, 1);
    assert!(latch.is_settled());
}

#[test]
fn latch_reports_missing_or_blank_code() {
    assert_eq!(ExchangeLatch::default().settle(None), CallbackAction::MissingCode);
    assert_eq!(ExchangeLatch::default().settle(Some("  ".to_owned())), CallbackAction::MissingCode);
}

#[test]
fn latch_refuses_code_arriving_after_missing_code() {
    let mut latch = ExchangeLatch::default();
    assert_eq!(latch.settle(None), CallbackAction::MissingCode);
    assert!(latch.is_settled());
    assert_eq!(latch.settle(Some("late".to_owned())), CallbackAction::Settled);
}

#[test]
fn fresh_latch_is_independent() {
    let mut first = ExchangeLatch::default();
    let _ = first.settle(Some("c".to_owned()));
    let mut second = ExchangeLatch::default();
    assert_eq!(second.settle(Some("c".to_owned())), CallbackAction::Exchange("c".to_owned()));
}

// =============================================================
// callback_destination
// =============================================================

#[test]
fn callback_destination_routes_by_outcome() {
    assert_eq!(callback_destination(true), "/dashboard");
    assert_eq!(callback_destination(false), "/auth/login?error=oauth_failed");
}
