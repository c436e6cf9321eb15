//! Browser clock and clipboard access.
//!
//! Both degrade to inert fallbacks outside the browser so components can call
//! them unconditionally during SSR.

#[cfg(test)]
#[path = "web_test.rs"]
mod tests;

use records::ClipboardError;

/// Milliseconds since the Unix epoch, from the browser clock.
#[cfg_attr(feature = "hydrate", allow(clippy::cast_possible_truncation, clippy::cast_sign_loss))]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Write `text` through `navigator.clipboard.writeText`, resolving once the
/// browser has accepted or refused it.
///
/// # Errors
///
/// Returns [`ClipboardError`] when there is no window, the promise rejects
/// (permission denied, insecure context), or when called outside the browser.
pub async fn write_clipboard(text: String) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| ClipboardError("no window".to_owned()))?;
        let promise = window.navigator().clipboard().write_text(&text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError(format!("{err:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError("not available on server".to_owned()))
    }
}
