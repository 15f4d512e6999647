use super::*;

#[test]
fn default_is_two_minutes() {
    let input = TimeLimitInput::default();
    assert_eq!(input.minutes(), "2");
    assert_eq!(input.resolve(), Ok(120));
    assert_eq!(input.display(), "2 Minutes");
}

#[test]
fn non_digits_are_rejected() {
    let mut input = TimeLimitInput::default();
    assert_eq!(input.set_minutes("5a"), Err(NON_NUMERIC_MINUTES));
    assert_eq!(input.minutes(), "2");
    assert_eq!(input.set_minutes("-1"), Err(NON_NUMERIC_MINUTES));
}

#[test]
fn empty_field_is_allowed_but_unresolvable() {
    let mut input = TimeLimitInput::default();
    assert_eq!(input.set_minutes(""), Ok(()));
    assert_eq!(input.display(), "Enter a time in minutes");
    assert_eq!(input.resolve(), Err(INVALID_MINUTES));
}

#[test]
fn zero_minutes_is_invalid() {
    let mut input = TimeLimitInput::default();
    input.set_minutes("0").unwrap();
    assert_eq!(input.display(), "Invalid Time");
    assert_eq!(input.resolve(), Err(INVALID_MINUTES));
}

#[test]
fn singular_minute_label() {
    let mut input = TimeLimitInput::default();
    input.set_minutes("1").unwrap();
    assert_eq!(input.display(), "1 Minute");
    assert_eq!(input.resolve(), Ok(60));
}

#[test]
fn no_limit_toggle_clears_and_restores() {
    let mut input = TimeLimitInput::default();
    input.set_minutes("15").unwrap();
    input.set_no_limit(true);
    assert_eq!(input.minutes(), "");
    assert_eq!(input.resolve(), Ok(0));
    assert_eq!(input.display(), "No Time Limit");

    input.set_no_limit(false);
    assert_eq!(input.minutes(), "2");
}

#[test]
fn typing_turns_no_limit_off() {
    let mut input = TimeLimitInput::default();
    input.set_no_limit(true);
    input.set_minutes("3").unwrap();
    assert!(!input.no_limit());
    assert_eq!(input.resolve(), Ok(180));
}
