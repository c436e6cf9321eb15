//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs and page chrome. Modal state lives in `records`
//! state machines held by the owning page; components read and update them
//! through signals and report outcomes as toasts.

pub mod edit_lead_modal;
pub mod footer;
pub mod sample_transcript_modal;
pub mod toaster;
