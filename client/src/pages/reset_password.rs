//! Password update page reached from the recovery email.
//!
//! The recovery token arrives in the URL fragment. After a successful update
//! the fragment is dropped from the address bar and the user is sent to
//! sign-in shortly after.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::paths;
use crate::util::navigation::{clear_location_hash, location_hash};
use crate::util::password::{NO_TOKEN_FOUND, PasswordStrength, reset_token_from_fragment, validate_update};

#[cfg(feature = "hydrate")]
const SUCCESS_REDIRECT_DELAY_MS: u32 = 2_500;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let token = RwSignal::new(None::<String>);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let succeeded = RwSignal::new(false);
    let go_to_login = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        match location_hash().as_deref().and_then(reset_token_from_fragment) {
            Some(found) => token.set(Some(found)),
            None => error.set(Some(NO_TOKEN_FOUND.to_owned())),
        }
    });

    Effect::new(move || {
        if go_to_login.get() {
            navigate(paths::LOGIN, NavigateOptions::default());
        }
    });

    let strength = Memo::new(move |_| password.with(|p| PasswordStrength::evaluate(p)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let reset_token = token.get_untracked();
        let new_password = password.get_untracked();
        if let Err(message) = validate_update(reset_token.as_deref(), &new_password, &confirm.get_untracked()) {
            error.set(Some(message.to_owned()));
            return;
        }
        let reset_token = reset_token.unwrap_or_default();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::update_password(&reset_token, &new_password).await {
                Ok(_) => {
                    succeeded.set(true);
                    clear_location_hash();
                    #[cfg(feature = "hydrate")]
                    gloo_timers::future::TimeoutFuture::new(SUCCESS_REDIRECT_DELAY_MS).await;
                    go_to_login.set(true);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || !succeeded.get()
                    fallback=|| view! {
                        <h1>"Password Updated!"</h1>
                        <p class="login-card__subtitle">
                            "Your password has been successfully updated. Redirecting you to sign in..."
                        </p>
                    }
                >
                    <h1>"Set a New Password"</h1>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="New password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <ul class="password-requirements">
                            {move || {
                                strength
                                    .get()
                                    .requirements()
                                    .into_iter()
                                    .map(|(met, label)| {
                                        view! {
                                            <li class:password-requirements__met=met>{label}</li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                        {move || error.get().map(|message| view! { <p class="login-message login-message--error">{message}</p> })}
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Updating..." } else { "Update Password" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
