//! Quiz time-limit form: a minutes field plus a "no limit" toggle.

#[cfg(test)]
#[path = "time_limit_test.rs"]
mod time_limit_test;

pub const DEFAULT_MINUTES: &str = "2";
pub const INVALID_MINUTES: &str = "Please enter a positive number of minutes, or select \"No Time Limit\".";
pub const NON_NUMERIC_MINUTES: &str = "Please enter a valid number for minutes.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeLimitInput {
    minutes: String,
    no_limit: bool,
}

impl Default for TimeLimitInput {
    fn default() -> Self {
        Self { minutes: DEFAULT_MINUTES.to_owned(), no_limit: false }
    }
}

impl TimeLimitInput {
    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    pub fn no_limit(&self) -> bool {
        self.no_limit
    }

    /// Accept an edit to the minutes field. Only digits (or an empty field)
    /// are taken; anything else is rejected with a message and leaves the
    /// field unchanged. Typing a value turns "no limit" off.
    pub fn set_minutes(&mut self, value: &str) -> Result<(), &'static str> {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(NON_NUMERIC_MINUTES);
        }
        value.clone_into(&mut self.minutes);
        self.no_limit = false;
        Ok(())
    }

    pub fn set_no_limit(&mut self, checked: bool) {
        self.no_limit = checked;
        if checked {
            self.minutes.clear();
        } else {
            DEFAULT_MINUTES.clone_into(&mut self.minutes);
        }
    }

    fn parsed_minutes(&self) -> Option<u32> {
        self.minutes.parse::<u32>().ok().filter(|m| *m > 0)
    }

    /// Time limit in seconds; `0` means untimed.
    pub fn resolve(&self) -> Result<u32, &'static str> {
        if self.no_limit {
            return Ok(0);
        }
        self.parsed_minutes().map(|m| m.saturating_mul(60)).ok_or(INVALID_MINUTES)
    }

    pub fn display(&self) -> String {
        if self.no_limit {
            return "No Time Limit".to_owned();
        }
        if self.minutes.is_empty() {
            return "Enter a time in minutes".to_owned();
        }
        match self.parsed_minutes() {
            Some(1) => "1 Minute".to_owned(),
            Some(m) => format!("{m} Minutes"),
            None => "Invalid Time".to_owned(),
        }
    }
}
