//! Time-limit picker shown between quiz generation and quiz taking.

use leptos::prelude::*;

use crate::util::time_limit::TimeLimitInput;

#[component]
pub fn TimeSelector(
    quiz_title: String,
    file_name: Option<String>,
    #[prop(into)] on_start: Callback<u32>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let input = RwSignal::new(TimeLimitInput::default());
    let error = RwSignal::new(None::<&'static str>);

    let context = match file_name {
        Some(name) => format!("Choose a time limit for \"{quiz_title}\" from {name}."),
        None => format!("Choose a time limit for \"{quiz_title}\"."),
    };

    let on_minutes = move |ev| {
        let value = event_target_value(&ev);
        match input.try_update(|i| i.set_minutes(&value)) {
            Some(Err(message)) => error.set(Some(message)),
            _ => error.set(None),
        }
    };

    let on_no_limit = move |ev| {
        let checked = event_target_checked(&ev);
        input.update(|i| i.set_no_limit(checked));
        error.set(None);
    };

    let on_submit = move |_| match input.with_untracked(TimeLimitInput::resolve) {
        Ok(secs) => on_start.run(secs),
        Err(message) => error.set(Some(message)),
    };

    view! {
        <section class="time-selector">
            <button class="btn btn--ghost" on:click=move |_| on_back.run(())>
                "Back"
            </button>
            <h2>"Set Your Quiz Time"</h2>
            <p class="time-selector__context">{context}</p>
            <label class="time-selector__field">
                "Custom Time (Minutes):"
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="e.g., 5"
                    prop:value=move || input.with(|i| i.minutes().to_owned())
                    disabled=move || input.with(TimeLimitInput::no_limit)
                    on:input=on_minutes
                />
            </label>
            <label class="time-selector__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || input.with(TimeLimitInput::no_limit)
                    on:change=on_no_limit
                />
                "No Time Limit"
            </label>
            <p class="time-selector__summary">
                "Selected: "
                <strong>{move || input.with(TimeLimitInput::display)}</strong>
            </p>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button class="btn btn--primary" on:click=on_submit>
                "Start Quiz"
            </button>
        </section>
    }
}
