//! Route guard wrapping every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting the guard hydrates the auth manager (a no-op after the first
//! time). Until hydration completes a neutral spinner is shown; signed-out
//! users are replace-navigated to sign-in and never see the children.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::paths;
use crate::state::auth::{auth_snapshot, use_auth};
use crate::util::auth::{GuardState, guard_state};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move || {
        if !auth.with_untracked(|manager| manager.state().is_hydrated()) {
            auth.update(|manager| manager.check_auth());
        }
    });

    let guard = Memo::new(move |_| guard_state(&auth_snapshot(auth)));

    Effect::new(move || {
        if guard.get() == GuardState::Redirecting {
            navigate(paths::LOGIN, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || match guard.get() {
        GuardState::Verifying => view! {
            <div class="guard-loading" aria-busy="true">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardState::Authorized => children().into_any(),
        GuardState::Redirecting => ().into_any(),
    }
}
