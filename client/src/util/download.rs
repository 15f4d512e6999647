//! Save an in-memory file through a temporary object URL.

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("downloads are unavailable outside the browser")]
    Unavailable,
    #[error("{0}")]
    Browser(String),
}

/// Offer `bytes` to the user as a download named `file_name`.
pub fn save_bytes(file_name: &str, bytes: &[u8]) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let browser = |e: wasm_bindgen::JsValue| DownloadError::Browser(format!("{e:?}"));

        let window = web_sys::window().ok_or(DownloadError::Unavailable)?;
        let document = window.document().ok_or(DownloadError::Unavailable)?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/octet-stream");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(browser)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

        let anchor = document
            .create_element("a")
            .map_err(browser)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| DownloadError::Browser("anchor element unavailable".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(browser)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, bytes);
        Err(DownloadError::Unavailable)
    }
}
