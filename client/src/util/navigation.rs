//! Full-page navigation and `window.location` reads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Router navigations keep the WASM app alive; a hard redirect reloads the
//! page. Logout and the OAuth provider hand-off need the latter, so the
//! effect is modelled as a value the caller chooses when to perform.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// A pending full-page navigation.
#[must_use = "a hard redirect does nothing until `follow` is called"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HardRedirect {
    target: String,
}

impl HardRedirect {
    pub fn to(target: impl Into<String>) -> Self {
        Self { target: target.into() }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Perform the navigation. No-op outside the browser.
    pub fn follow(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(&self.target).is_err() {
                    log::error!("hard redirect to {} failed", self.target);
                }
            }
        }
    }
}

/// `window.location.origin`, e.g. `https://app.example.com`.
pub fn current_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fragment of the current URL without the leading `#`.
pub fn location_hash() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window().and_then(|w| w.location().hash().ok())?;
        let trimmed = hash.trim_start_matches('#');
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Drop the fragment from the address bar without adding a history entry.
pub fn clear_location_hash() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(path) = window.location().pathname() else {
            return;
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }
}

/// Absolute URL the OAuth provider should send the user back to.
pub fn oauth_redirect_url(origin: Option<&str>) -> String {
    format!("{}{}", origin.unwrap_or_default(), crate::paths::AUTH_CALLBACK)
}
