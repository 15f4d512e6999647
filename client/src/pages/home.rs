//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::paths;
use crate::state::auth::{auth_snapshot, use_auth};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    Effect::new(move || {
        if !auth.with_untracked(|manager| manager.state().is_hydrated()) {
            auth.update(|manager| manager.check_auth());
        }
    });

    let signed_in = move || auth_snapshot(auth).is_authenticated();

    view! {
        <div class="home-page">
            <nav class="home-nav">
                <span class="home-nav__brand">"StudyDeck"</span>
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <A href=paths::LOGIN attr:class="btn">"Sign In"</A>
                        <A href=paths::login_with_mode("signup") attr:class="btn btn--primary">"Get Started"</A>
                    }
                >
                    <A href=paths::DASHBOARD attr:class="btn btn--primary">"Open Dashboard"</A>
                </Show>
            </nav>
            <main class="home-hero">
                <h1>"Turn your notes into quizzes and flashcards."</h1>
                <p>"Upload a PDF, DOCX, or PPTX and let StudyDeck build study material from it."</p>
                <div class="home-hero__actions">
                    <A
                        href=move || if signed_in() { paths::DASHBOARD.to_owned() } else { paths::LOGIN.to_owned() }
                        attr:class="btn btn--primary"
                    >
                        "Generate a Quiz"
                    </A>
                    <A
                        href=move || if signed_in() { paths::DASHBOARD.to_owned() } else { paths::LOGIN.to_owned() }
                        attr:class="btn"
                    >
                        "Make Flashcards"
                    </A>
                </div>
            </main>
        </div>
    }
}
