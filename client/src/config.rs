//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the backend
//! base URL is baked in at compile time from `STUDYDECK_API_BASE`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Base URL of the study-material API, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("STUDYDECK_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}

/// Join `path` onto `base`, tolerating a missing or doubled slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL for an API `path` under the configured base.
pub fn endpoint(path: &str) -> String {
    join_url(api_base(), path)
}
