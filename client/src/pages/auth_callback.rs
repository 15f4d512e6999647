//! OAuth callback landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider redirects here with `?code=`. The code is exchanged for a
//! session at most once per page instance, then the user is replace-navigated
//! to the dashboard or back to sign-in with an error flag.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::state::auth::use_auth;
use crate::util::auth::{CallbackAction, ExchangeLatch, callback_destination};
use crate::util::navigation::{current_origin, oauth_redirect_url};

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let latch = StoredValue::new(ExchangeLatch::default());
    let destination = RwSignal::new(None::<String>);

    Effect::new(move || {
        let code = query.with(|q| q.get("code"));
        let code = match latch.try_update_value(|l| l.settle(code)) {
            Some(CallbackAction::Exchange(code)) => code,
            Some(CallbackAction::MissingCode) => {
                log::error!("oauth callback reached without an authorization code");
                destination.set(Some(callback_destination(false)));
                return;
            }
            Some(CallbackAction::Settled) | None => return,
        };
        leptos::task::spawn_local(async move {
            let redirect_url = oauth_redirect_url(current_origin().as_deref());
            let succeeded = match api::exchange_oauth_code(&code, &redirect_url).await {
                Ok(response) => {
                    auth.update(|manager| manager.login(response.token.access_token, response.user));
                    true
                }
                Err(e) => {
                    log::error!("oauth code exchange failed: {e}");
                    false
                }
            };
            destination.set(Some(callback_destination(succeeded)));
        });
    });

    Effect::new(move || {
        if let Some(target) = destination.get() {
            navigate(&target, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <div class="callback-page" aria-busy="true">
            <span class="spinner"></span>
            <p>"Completing sign-in..."</p>
        </div>
    }
}
