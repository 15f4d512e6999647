//! Flashcard generation form.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::{bearer_token_untracked, use_auth};
use crate::state::flashcards::Deck;
use crate::state::study::{FLASHCARD_LANGUAGES, FlashcardSettings, parse_count};

#[component]
pub fn FlashcardSettingsForm(
    file_id: String,
    file_name: String,
    #[prop(into)] on_generated: Callback<Deck>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let settings = RwSignal::new(FlashcardSettings::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_generate = move |_| {
        if busy.get_untracked() {
            return;
        }
        let request = match settings.with_untracked(|s| s.to_request(Some(&file_id))) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let token = bearer_token_untracked(auth);
        let file_name = file_name.clone();
        leptos::task::spawn_local(async move {
            match api::generate_flashcards(token.as_deref(), &request).await {
                Ok(response) => on_generated.run(Deck::from_response(&response, Some(&file_name))),
                Err(e) => {
                    log::warn!("flashcard generation failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="study-settings">
            <button class="btn btn--ghost" on:click=move |_| on_back.run(())>
                "Back"
            </button>
            <h2>"Generate Flashcards"</h2>
            <label class="settings-field">
                "Language"
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    settings.update(|s| s.language = value);
                }>
                    {FLASHCARD_LANGUAGES
                        .iter()
                        .map(|(code, name)| {
                            view! {
                                <option value=*code selected=move || settings.with(|s| s.language == *code)>
                                    {*name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="settings-field">
                "Number of flashcards"
                <input
                    type="number"
                    min="1"
                    prop:value=move || settings.with(|s| s.count.to_string())
                    on:input=move |ev| {
                        let value = parse_count(&event_target_value(&ev));
                        settings.update(|s| s.count = value);
                    }
                />
            </label>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_generate>
                {move || if busy.get() { "Generating flashcards..." } else { "Generate Flashcards" }}
            </button>
        </section>
    }
}
