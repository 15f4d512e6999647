//! One-card-at-a-time flashcard viewer with Anki export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keyboard navigation listens on the window while the viewer is mounted.
//! The Anki export fetches the packaged deck from the backend and saves it
//! through a temporary object URL.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::{bearer_token_untracked, use_auth};
use crate::state::flashcards::{
    ANKI_DOWNLOADED, ANKI_MISSING_SOURCE, ANKI_PREPARING, Deck, DeckViewer, anki_failure_message, anki_file_name,
};
use crate::util::download::save_bytes;

#[component]
pub fn FlashcardViewer(deck: Deck, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let viewer = RwSignal::new(DeckViewer::new(deck.cards.len()));
    let export_status = RwSignal::new(None::<String>);
    let exporting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if viewer.try_update(|v| v.handle_key(&ev.key())) == Some(true) {
                ev.prevent_default();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let title = deck.title.clone();
    let cards = StoredValue::new(deck.cards.clone());
    let face = move || {
        let (index, show_answer) = viewer.with(|v| (v.index(), v.show_answer()));
        cards.with_value(|cards| {
            cards
                .get(index)
                .map(|card| if show_answer { card.answer.clone() } else { card.question.clone() })
                .unwrap_or_default()
        })
    };

    let on_export = move |_| {
        if exporting.get_untracked() {
            return;
        }
        if deck.file_id.is_empty() || deck.language.is_empty() {
            export_status.set(Some(ANKI_MISSING_SOURCE.to_owned()));
            return;
        }
        exporting.set(true);
        export_status.set(Some(ANKI_PREPARING.to_owned()));
        let token = bearer_token_untracked(auth);
        let file_id = deck.file_id.clone();
        let language = deck.language.clone();
        let file_name = anki_file_name(&deck.title);
        leptos::task::spawn_local(async move {
            let outcome = match api::download_anki_deck(token.as_deref(), &file_id, &language).await {
                Ok(bytes) => save_bytes(&file_name, &bytes).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok(()) => export_status.set(Some(ANKI_DOWNLOADED.to_owned())),
                Err(reason) => {
                    log::warn!("anki export failed: {reason}");
                    export_status.set(Some(anki_failure_message(&reason)));
                }
            }
            exporting.set(false);
        });
    };

    view! {
        <section class="flashcard-viewer">
            <header class="flashcard-viewer__header">
                <button class="btn btn--ghost" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <h2>{title}</h2>
                <button class="btn" disabled=move || exporting.get() on:click=on_export>
                    "Export to Anki"
                </button>
            </header>
            {move || export_status.get().map(|message| view! { <p class="flashcard-viewer__status">{message}</p> })}
            <Show
                when=move || cards.with_value(|c| !c.is_empty())
                fallback=|| view! { <p class="flashcard-viewer__empty">"No flashcards were generated."</p> }
            >
                <button
                    class="flashcard"
                    class:flashcard--flipped=move || viewer.with(DeckViewer::show_answer)
                    on:click=move |_| viewer.update(DeckViewer::flip)
                >
                    {face}
                </button>
                <nav class="flashcard-viewer__nav">
                    <button
                        class="btn"
                        disabled=move || !viewer.with(DeckViewer::can_navigate)
                        on:click=move |_| viewer.update(DeckViewer::prev)
                    >
                        "Previous"
                    </button>
                    <span>{move || viewer.with(DeckViewer::position_label)}</span>
                    <button
                        class="btn"
                        disabled=move || !viewer.with(DeckViewer::can_navigate)
                        on:click=move |_| viewer.update(DeckViewer::next)
                    >
                        "Next"
                    </button>
                </nav>
            </Show>
        </section>
    }
}
