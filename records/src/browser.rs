//! Sample transcript browser: list, select, copy, hand off.
//!
//! DESIGN
//! ======
//! Times are plain millisecond timestamps supplied by the caller, so the copy
//! confirmation window can be driven by a browser timer, a Tokio timer, or a
//! test without this crate depending on any of them.

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;

use uuid::Uuid;

use crate::error::ClipboardError;
use crate::toast::Toast;
use crate::transcript::{SampleTranscript, order_by_creation};

/// How long the copy confirmation stays visible.
pub const COPY_CONFIRM_MS: u64 = 2000;

/// Host clipboard write capability.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the host refuses the write.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CopyError {
    #[error("no transcript selected")]
    NothingSelected,
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Transient "copied" state that reverts after [`COPY_CONFIRM_MS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    confirmed_at: Option<u64>,
}

impl CopyIndicator {
    /// Show the confirmation starting at `now_ms`. A repeat confirm restarts the window.
    pub fn confirm(&mut self, now_ms: u64) {
        self.confirmed_at = Some(now_ms);
    }

    /// Whether the confirmation is still inside its window at `now_ms`.
    #[must_use]
    pub fn is_confirmed(&self, now_ms: u64) -> bool {
        self.confirmed_at
            .is_some_and(|at| now_ms.saturating_sub(at) < COPY_CONFIRM_MS)
    }

    /// Whether the confirmation is currently displayed (not yet settled).
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.confirmed_at.is_some()
    }

    /// Revert to the default state if the window has elapsed at `now_ms`.
    pub fn settle(&mut self, now_ms: u64) {
        if !self.is_confirmed(now_ms) {
            self.confirmed_at = None;
        }
    }
}

/// Transcript list plus the modal's selection and copy state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscriptBrowser {
    transcripts: Vec<SampleTranscript>,
    selected: Option<Uuid>,
    open: bool,
    copy: CopyIndicator,
}

impl TranscriptBrowser {
    /// Replace the list with a freshly fetched set, in ascending creation order.
    /// A selection that no longer exists is dropped and the modal closed.
    pub fn load(&mut self, transcripts: Vec<SampleTranscript>) {
        self.transcripts = order_by_creation(transcripts);
        if self.selected().is_none() {
            self.selected = None;
            self.open = false;
        }
    }

    #[must_use]
    pub fn transcripts(&self) -> &[SampleTranscript] {
        &self.transcripts
    }

    /// Select a transcript and open the modal. Returns `false` for unknown ids.
    pub fn select(&mut self, id: Uuid) -> bool {
        if !self.transcripts.iter().any(|t| t.id == id) {
            return false;
        }
        self.selected = Some(id);
        self.open = true;
        self.copy = CopyIndicator::default();
        true
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SampleTranscript> {
        let id = self.selected?;
        self.transcripts.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open && self.selected().is_some()
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn copy_indicator(&self) -> CopyIndicator {
        self.copy
    }

    /// Text of the displayed transcript, ready to be written to a clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::NothingSelected`] when no transcript is displayed.
    pub fn copy_text(&self) -> Result<String, CopyError> {
        self.selected()
            .map(|t| t.transcript.clone())
            .ok_or(CopyError::NothingSelected)
    }

    /// Record the outcome of a clipboard write started from [`Self::copy_text`].
    /// Only a successful write arms the confirmation window.
    ///
    /// # Errors
    ///
    /// Returns the clipboard's error unchanged.
    pub fn confirm_copy(
        &mut self,
        written: Result<(), ClipboardError>,
        now_ms: u64,
    ) -> Result<Toast, CopyError> {
        written?;
        self.copy.confirm(now_ms);
        Ok(Toast::success("Copied!", "Transcript copied to clipboard"))
    }

    /// Copy the displayed transcript's text through a synchronous clipboard
    /// and start the confirmation window.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::NothingSelected`] when no transcript is displayed,
    /// or the clipboard's error. The indicator is only armed on success.
    pub fn copy_selected<C>(&mut self, clipboard: &C, now_ms: u64) -> Result<Toast, CopyError>
    where
        C: Clipboard + ?Sized,
    {
        let text = self.copy_text()?;
        let written = clipboard.write_text(&text);
        self.confirm_copy(written, now_ms)
    }

    /// Revert the copy confirmation if its window has elapsed.
    pub fn settle_copy(&mut self, now_ms: u64) {
        self.copy.settle(now_ms);
    }

    /// Hand the displayed transcript's text to `consumer` and close.
    ///
    /// Without a consumer (or without a displayed transcript) nothing happens
    /// and `None` is returned.
    pub fn use_selected<F>(&mut self, consumer: Option<F>) -> Option<Toast>
    where
        F: FnOnce(String),
    {
        let consumer = consumer?;
        let text = self.selected()?.transcript.clone();
        consumer(text);
        self.open = false;
        Some(Toast::success("Transcript Loaded", "You can now upload this transcript for analysis"))
    }
}
