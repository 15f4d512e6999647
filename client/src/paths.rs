//! Route paths shared by redirects, links, and the router.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/auth/login";
pub const AUTH_CALLBACK: &str = "/auth/callback";
pub const RESET_PASSWORD: &str = "/auth/reset-password";
pub const DASHBOARD: &str = "/dashboard";
pub const ACCOUNT: &str = "/dashboard/account";

/// Sign-in route with an error indicator the login page renders inline.
pub fn login_with_error(code: &str) -> String {
    format!("{LOGIN}?error={code}")
}

/// Sign-in route opened in a specific form mode (`signin`, `signup`, `reset`).
pub fn login_with_mode(mode: &str) -> String {
    format!("{LOGIN}?mode={mode}")
}
