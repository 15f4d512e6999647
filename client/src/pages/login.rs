//! Sign-in page: email sign-in, registration, password-reset request, and
//! Google OAuth.
//!
//! SYSTEM CONTEXT
//! ==============
//! The mode comes from `?mode=` and can be switched in place. Successful
//! sign-in or registration logs the user in through the auth manager before
//! replace-navigating to the dashboard, so the guard sees the new session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::types::{AuthResponse, LoginRequest, SignupRequest};
use crate::paths;
use crate::state::auth::use_auth;
use crate::util::auth::OAUTH_FAILED;
use crate::util::navigation::{HardRedirect, current_origin, oauth_redirect_url};

pub const MISSING_CREDENTIALS: &str = "Enter your email and password.";
pub const MISSING_SIGNUP_FIELDS: &str = "Fill in your name, email, and password.";
pub const MISSING_EMAIL: &str = "Enter your email address.";
pub const OAUTH_FAILED_MESSAGE: &str = "Google sign-in failed. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
    Reset,
}

impl AuthMode {
    /// Mode named by the `mode` query parameter; unknown values fall back
    /// to sign-in.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("signup") => Self::SignUp,
            Some("reset") => Self::Reset,
            _ => Self::SignIn,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Get Started",
            Self::Reset => "Recovery",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
            Self::Reset => "Send Link",
        }
    }

    /// Target of the mode-switch link under the form.
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp | Self::Reset => Self::SignIn,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "New here? Create an account",
            Self::SignUp | Self::Reset => "Back to Sign In",
        }
    }
}

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// What a valid submission asks the backend to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    SignIn(LoginRequest),
    SignUp(SignupRequest),
    Reset { email: String },
}

/// Required-field validation for `mode`, run before any request.
pub fn validate_form(mode: AuthMode, form: &LoginForm) -> Result<Submission, &'static str> {
    let email = form.email.trim().to_owned();
    match mode {
        AuthMode::Reset => {
            if email.is_empty() {
                return Err(MISSING_EMAIL);
            }
            Ok(Submission::Reset { email })
        }
        AuthMode::SignIn => {
            if email.is_empty() || form.password.is_empty() {
                return Err(MISSING_CREDENTIALS);
            }
            Ok(Submission::SignIn(LoginRequest { email, password: form.password.clone() }))
        }
        AuthMode::SignUp => {
            let first_name = form.first_name.trim().to_owned();
            let last_name = form.last_name.trim().to_owned();
            if first_name.is_empty() || last_name.is_empty() || email.is_empty() || form.password.is_empty() {
                return Err(MISSING_SIGNUP_FIELDS);
            }
            Ok(Submission::SignUp(SignupRequest { email, password: form.password.clone(), first_name, last_name }))
        }
    }
}

/// Sign-in errors that mention the password offer a switch to reset mode.
pub fn offers_password_reset(mode: AuthMode, error: &str) -> bool {
    mode == AuthMode::SignIn && error.to_lowercase().contains("password")
}

pub fn oauth_error_message(error: Option<&str>) -> Option<&'static str> {
    (error == Some(OAUTH_FAILED)).then_some(OAUTH_FAILED_MESSAGE)
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct FormError {
    message: String,
    offer_reset: bool,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();

    let mode = RwSignal::new(AuthMode::default());
    Effect::new(move || {
        let requested = query.with(|q| AuthMode::from_query(q.get("mode").as_deref()));
        mode.set(requested);
    });
    let oauth_error = move || query.with(|q| oauth_error_message(q.get("error").as_deref()));

    let form = RwSignal::new(LoginForm::default());
    let busy = RwSignal::new(false);
    let google_busy = RwSignal::new(false);
    let error = RwSignal::new(None::<FormError>);
    let reset_sent_to = RwSignal::new(None::<String>);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            navigate(paths::DASHBOARD, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        error.set(None);
        reset_sent_to.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current_mode = mode.get_untracked();
        let submission = match form.with_untracked(|f| validate_form(current_mode, f)) {
            Ok(submission) => submission,
            Err(message) => {
                error.set(Some(FormError { message: message.to_owned(), offer_reset: false }));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let result: Result<Option<AuthResponse>, api::ApiError> = match submission {
                Submission::SignIn(request) => api::sign_in(request).await.map(Some),
                Submission::SignUp(request) => api::sign_up(request).await.map(Some),
                Submission::Reset { email } => api::request_password_reset(&email).await.map(|_| {
                    reset_sent_to.set(Some(email));
                    None
                }),
            };
            match result {
                Ok(Some(response)) => {
                    auth.update(|manager| manager.login(response.token.access_token, response.user));
                    signed_in.set(true);
                }
                Ok(None) => busy.set(false),
                Err(e) => {
                    let message = e.to_string();
                    let offer_reset = offers_password_reset(current_mode, &message);
                    error.set(Some(FormError { message, offer_reset }));
                    busy.set(false);
                }
            }
        });
    };

    let on_google = move |_| {
        if google_busy.get_untracked() {
            return;
        }
        google_busy.set(true);
        error.set(None);
        let redirect_url = oauth_redirect_url(current_origin().as_deref());
        leptos::task::spawn_local(async move {
            match api::google_oauth_url(&redirect_url).await {
                Ok(url) => HardRedirect::to(url).follow(),
                Err(e) => {
                    log::error!("google oauth init failed: {e}");
                    error.set(Some(FormError { message: e.to_string(), offer_reset: false }));
                    google_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || reset_sent_to.get().is_none()
                    fallback=move || view! {
                        <h2>"Check your email"</h2>
                        <p class="login-card__subtitle">
                            {move || format!("Recovery link sent to {}", reset_sent_to.get().unwrap_or_default())}
                        </p>
                        <button class="login-link" on:click=move |_| switch_mode(AuthMode::SignIn)>
                            "Return to Sign In"
                        </button>
                    }
                >
                    <h1>{move || mode.get().heading()}</h1>
                    <p class="login-card__subtitle">"StudyDeck"</p>
                    {move || oauth_error().map(|message| view! { <p class="login-message login-message--error">{message}</p> })}
                    <Show when=move || mode.get() != AuthMode::Reset>
                        <button
                            class="login-button login-button--google"
                            type="button"
                            disabled=move || google_busy.get() || busy.get()
                            on:click=on_google
                        >
                            {move || if google_busy.get() { "Redirecting..." } else { "Continue with Google" }}
                        </button>
                        <div class="login-divider"></div>
                    </Show>
                    <form class="login-form" on:submit=on_submit>
                        <Show when=move || mode.get() == AuthMode::SignUp>
                            <input
                                class="login-input"
                                type="text"
                                placeholder="First name"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Last name"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                        </Show>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <Show when=move || mode.get() != AuthMode::Reset>
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </Show>
                        {move || {
                            error
                                .get()
                                .map(|FormError { message, offer_reset }| {
                                    view! {
                                        <p class="login-message login-message--error">{message}</p>
                                        <Show when=move || offer_reset>
                                            <button
                                                class="login-link"
                                                type="button"
                                                on:click=move |_| switch_mode(AuthMode::Reset)
                                            >
                                                "Forgot password?"
                                            </button>
                                        </Show>
                                    }
                                })
                        }}
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || mode.get().submit_label()}
                        </button>
                    </form>
                    <button class="login-link" type="button" on:click=move |_| switch_mode(mode.get_untracked().toggled())>
                        {move || mode.get().toggle_label()}
                    </button>
                </Show>
            </div>
        </div>
    }
}
