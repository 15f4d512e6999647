//! Dashboard navigation sidebar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::paths;
use crate::state::auth::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();

    // The store is cleared before the page is replaced.
    let on_sign_out = move |_| {
        if let Some(redirect) = auth.try_update(|manager| manager.logout()) {
            redirect.follow();
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"StudyDeck"</div>
            <nav class="sidebar__nav">
                <A href=paths::DASHBOARD exact=true attr:class="sidebar__link">
                    "Home"
                </A>
                <A href=paths::ACCOUNT attr:class="sidebar__link">
                    "Account"
                </A>
            </nav>
            <button class="sidebar__sign-out" on:click=on_sign_out>
                "Sign Out"
            </button>
        </aside>
    }
}
