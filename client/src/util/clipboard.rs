//! Clipboard writes for copying job-site URLs.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// How long a card shows its "Copied" label.
pub const COPIED_LABEL_MS: u64 = 2_000;

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string if there is no browser window or the browser
/// rejects the write.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write failed: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available on server".to_owned())
    }
}
