//! Password-reset helpers: strength rules, token extraction, and the
//! submit-time validation chain.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

pub const NO_TOKEN_FOUND: &str = "No valid reset token found. Please request a new password reset link.";
pub const INVALID_TOKEN: &str = "Invalid reset token. Please request a new password reset link.";
pub const WEAK_PASSWORD: &str = "Please ensure your password meets all requirements.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.digit && self.special
    }

    /// Checklist rows in display order.
    pub fn requirements(&self) -> [(bool, &'static str); 5] {
        [
            (self.min_length, "At least 8 characters"),
            (self.uppercase, "One uppercase letter"),
            (self.lowercase, "One lowercase letter"),
            (self.digit, "One number"),
            (self.special, "One special character"),
        ]
    }
}

/// Pull `access_token` out of a URL fragment (without the `#`).
pub fn reset_token_from_fragment(fragment: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(fragment).ok()?;
    pairs
        .into_iter()
        .find(|(key, value)| key == "access_token" && !value.is_empty())
        .map(|(_, value)| value)
}

/// Checks run before submitting a new password, first failure wins.
pub fn validate_update(token: Option<&str>, password: &str, confirm: &str) -> Result<(), &'static str> {
    if token.is_none_or(str::is_empty) {
        return Err(INVALID_TOKEN);
    }
    if !PasswordStrength::evaluate(password).is_valid() {
        return Err(WEAK_PASSWORD);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}
