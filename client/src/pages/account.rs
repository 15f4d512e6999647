//! Account page: who is signed in, plus sign-out.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::use_auth;

/// First and last name joined, or the email when neither is set.
pub fn display_name(user: &User) -> String {
    let parts: Vec<&str> = [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() { user.email.clone() } else { parts.join(" ") }
}

/// Upper-cased first character of the display name for the avatar.
pub fn avatar_initial(user: &User) -> String {
    display_name(user).chars().next().map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth();
    let copied = RwSignal::new(false);
    let user = move || auth.with(|m| m.state().user().cloned());

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = auth.with_untracked(|m| m.state().user().map(|u| u.id.clone())) else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let pending = wasm_bindgen_futures::JsFuture::from(window.navigator().clipboard().write_text(&id));
            leptos::task::spawn_local(async move {
                match pending.await {
                    Ok(_) => copied.set(true),
                    Err(e) => log::warn!("clipboard write failed: {e:?}"),
                }
            });
        }
    };

    let on_sign_out = move |_| {
        if let Some(redirect) = auth.try_update(|manager| manager.logout()) {
            redirect.follow();
        }
    };

    view! {
        <section class="account">
            <h1>"Account"</h1>
            {move || {
                user()
                    .map(|user| {
                        view! {
                            <div class="account__card">
                                <div class="account__avatar">{avatar_initial(&user)}</div>
                                <div class="account__details">
                                    <p class="account__name">{display_name(&user)}</p>
                                    <p class="account__email">{user.email.clone()}</p>
                                    <p class="account__id">
                                        "User ID: "
                                        <code>{user.id.clone()}</code>
                                        <button class="btn btn--ghost" on:click=on_copy>
                                            {move || if copied.get() { "Copied" } else { "Copy" }}
                                        </button>
                                    </p>
                                </div>
                            </div>
                        }
                    })
            }}
            <button class="btn btn--danger" on:click=on_sign_out>
                "Sign Out"
            </button>
        </section>
    }
}
