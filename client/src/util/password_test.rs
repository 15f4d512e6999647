use super::*;

// =============================================================
// Strength
// =============================================================

#[test]
fn strong_password_meets_every_rule() {
    let strength = PasswordStrength::evaluate("Secur3!pass");
    assert!(strength.is_valid());
    assert!(strength.requirements().iter().all(|(met, _)| *met));
}

#[test]
fn each_rule_is_checked_independently() {
    assert!(!PasswordStrength::evaluate("S3!a").min_length);
    assert!(!PasswordStrength::evaluate("secur3!pass").uppercase);
    assert!(!PasswordStrength::evaluate("SECUR3!PASS").lowercase);
    assert!(!PasswordStrength::evaluate("Secure!pass").digit);
    assert!(!PasswordStrength::evaluate("Secur3pass").special);
}

#[test]
fn empty_password_meets_nothing() {
    assert_eq!(PasswordStrength::evaluate(""), PasswordStrength::default());
}

// =============================================================
// Token extraction
// =============================================================

#[test]
fn token_read_from_fragment() {
    let fragment = "access_token=abc.def&expires_in=3600&type=recovery";
    assert_eq!(reset_token_from_fragment(fragment).as_deref(), Some("abc.def"));
}

#[test]
fn token_is_percent_decoded() {
    assert_eq!(reset_token_from_fragment("access_token=a%2Bb").as_deref(), Some("a+b"));
}

#[test]
fn missing_or_empty_token_is_none() {
    assert_eq!(reset_token_from_fragment(""), None);
    assert_eq!(reset_token_from_fragment("type=recovery"), None);
    assert_eq!(reset_token_from_fragment("access_token="), None);
}

// =============================================================
// Validation order
// =============================================================

#[test]
fn missing_token_reported_first() {
    assert_eq!(validate_update(None, "weak", "other"), Err(INVALID_TOKEN));
    assert_eq!(validate_update(Some(""), "weak", "other"), Err(INVALID_TOKEN));
}

#[test]
fn weak_password_reported_before_mismatch() {
    assert_eq!(validate_update(Some("t"), "weak", "other"), Err(WEAK_PASSWORD));
}

#[test]
fn mismatch_reported_last() {
    assert_eq!(validate_update(Some("t"), "Secur3!pass", "Secur3!pasS"), Err(PASSWORD_MISMATCH));
    assert_eq!(validate_update(Some("t"), "Secur3!pass", "Secur3!pass"), Ok(()));
}
