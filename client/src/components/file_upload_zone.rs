//! Document upload control for the dashboard library.

use leptos::prelude::*;

use crate::state::auth::use_auth;

pub const UPLOAD_ERROR: &str = "Upload failed. Verify backend connection.";
pub const ACCEPTED_TYPES: &str = ".pdf,.docx,.pptx";

/// Uploads the chosen file and reports `(file_id, file_name)` on success.
#[component]
pub fn FileUploadZone(#[prop(into)] on_uploaded: Callback<(String, String)>) -> impl IntoView {
    let auth = use_auth();
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            error.set(None);
            let token = crate::state::auth::bearer_token_untracked(auth);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_file(token.as_deref(), &file).await {
                    Ok(response) => on_uploaded.run((response.file_id, file.name())),
                    Err(e) => {
                        log::warn!("upload failed: {e}");
                        error.set(Some(UPLOAD_ERROR));
                    }
                }
                uploading.set(false);
                input.set_value("");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, auth, on_uploaded);
        }
    };

    view! {
        <div class="upload-zone">
            <label class="upload-zone__target" class:upload-zone__target--busy=move || uploading.get()>
                <input type="file" accept=ACCEPTED_TYPES class="upload-zone__input" on:change=on_change/>
                <span class="upload-zone__title">"Upload"</span>
                <span class="upload-zone__hint">"PDF, DOCX, PPTX"</span>
            </label>
            <Show when=move || uploading.get()>
                <p class="upload-zone__progress">"Uploading document..."</p>
            </Show>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}
