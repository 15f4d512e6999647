//! Quiz generation form: language plus per-type question counts.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::{bearer_token_untracked, use_auth};
use crate::state::quiz::Quiz;
use crate::state::study::{QUIZ_LANGUAGES, QuizSettings, parse_count};

fn count_input(
    settings: RwSignal<QuizSettings>,
    label: &'static str,
    get: fn(&QuizSettings) -> u32,
    set: fn(&mut QuizSettings, u32),
) -> impl IntoView {
    view! {
        <label class="settings-field">
            {label}
            <input
                type="number"
                min="0"
                prop:value=move || settings.with(|s| get(s).to_string())
                on:input=move |ev| {
                    let value = parse_count(&event_target_value(&ev));
                    settings.update(|s| set(s, value));
                }
            />
        </label>
    }
}

#[component]
pub fn QuizSettingsForm(
    file_id: String,
    file_name: String,
    #[prop(into)] on_generated: Callback<Quiz>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let settings = RwSignal::new(QuizSettings::default());
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
            match api::generate_quiz(token.as_deref(), &request).await {
                Ok(response) => on_generated.run(Quiz::from_response(&response, Some(&file_name))),
                Err(e) => {
                    log::warn!("quiz generation failed: {e}");
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
            <h2>"Generate a Quiz"</h2>
            <label class="settings-field">
                "Language"
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    settings.update(|s| s.language = value);
                }>
                    {QUIZ_LANGUAGES
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
            {count_input(settings, "Single correct", |s| s.single_correct, |s, v| s.single_correct = v)}
            {count_input(settings, "Multiple correct", |s| s.multiple_correct, |s, v| s.multiple_correct = v)}
            {count_input(settings, "Yes / No", |s| s.yes_no, |s, v| s.yes_no = v)}
            <p class="settings-total">{move || format!("Total questions: {}", settings.with(QuizSettings::total))}</p>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button class="btn btn--primary" disabled=move || busy.get() on:click=on_generate>
                {move || if busy.get() { "Generating your quiz..." } else { "Generate Quiz" }}
            </button>
        </section>
    }
}
