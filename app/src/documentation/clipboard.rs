//! Copy-to-clipboard for the demo credential fields.
//!
//! Every failure ends in a notification; nothing is returned as an error and
//! nothing panics. The [`CopyOutcome`] is only there for callers that care.

use thiserror::Error;

use crate::notify::NotificationSink;

pub const NOTHING_TO_COPY: &str = "Nothing to copy yet. Add the missing value first.";
pub const CLIPBOARD_UNAVAILABLE: &str = "Clipboard is not available in this browser.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Anything that can put text on the system clipboard.
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    NothingToCopy,
    Unavailable,
    Rejected,
}

pub fn copied_message(label: &str) -> String {
    format!("{label} copied to clipboard")
}

/// Copy `value` and report the result through `notifier`.
///
/// `clipboard` is `None` when the environment offers no clipboard at all.
pub async fn copy_credential<C: ClipboardWriter>(
    value: Option<&str>,
    label: &str,
    clipboard: Option<&C>,
    notifier: &impl NotificationSink,
) -> CopyOutcome {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        notifier.notify_failure(NOTHING_TO_COPY);
        return CopyOutcome::NothingToCopy;
    };
    let Some(clipboard) = clipboard else {
        log::warn!("clipboard API unavailable");
        notifier.notify_failure(CLIPBOARD_UNAVAILABLE);
        return CopyOutcome::Unavailable;
    };

    match clipboard.write_text(value).await {
        Ok(()) => {
            notifier.notify_success(&copied_message(label));
            CopyOutcome::Copied
        }
        Err(err) => {
            log::warn!("copying {label} failed: {err}");
            notifier.notify_failure(CLIPBOARD_UNAVAILABLE);
            CopyOutcome::Rejected
        }
    }
}

/// `navigator.clipboard` of the current window.
#[cfg(feature = "hydrate")]
pub struct BrowserClipboard(web_sys::Clipboard);

#[cfg(feature = "hydrate")]
impl BrowserClipboard {
    /// `None` in browsers (or insecure contexts) without the async clipboard API.
    pub fn detect() -> Option<Self> {
        let navigator = leptos::prelude::window().navigator();
        let present = js_sys::Reflect::has(&navigator, &"clipboard".into()).unwrap_or(false);
        present.then(|| Self(navigator.clipboard()))
    }
}

#[cfg(feature = "hydrate")]
impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        wasm_bindgen_futures::JsFuture::from(self.0.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
    }
}
