//! Shared lead and transcript records for the GrowthLens dashboard.
//!
//! This crate owns the JSON representation used by `server`, `client`, and
//! `cli`, plus the small amount of logic the dashboard performs locally:
//! lead form validation, the lead editor submit flow, and transcript browser
//! state. It compiles for both native targets and `wasm32`, so nothing in
//! here touches a runtime, a socket, or the DOM directly. Collaborators that
//! do (the HTTP store, the clipboard) come in through traits.

pub mod browser;
pub mod editor;
pub mod error;
pub mod form;
pub mod lead;
pub mod toast;
pub mod transcript;

pub use browser::{Clipboard, CopyError, CopyIndicator, TranscriptBrowser, COPY_CONFIRM_MS};
pub use editor::{LeadEditor, LeadStore, SubmitOutcome};
pub use error::{ClipboardError, RemoteError, RequiredField, ValidationError};
pub use form::{GroupChoice, LeadForm};
pub use lead::{Lead, LeadChanges, LeadGroup, LeadType, LeadUpdate, ParseLeadTypeError};
pub use toast::{Toast, ToastVariant};
pub use transcript::{SampleTranscript, order_by_creation};
