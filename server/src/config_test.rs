use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`lock_env`] so no other test touches the environment.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ADDR_HOST");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = lock_env();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("SITE_ADDR_HOST", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = lock_env();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");

    unsafe { clear_server_env() };
}
