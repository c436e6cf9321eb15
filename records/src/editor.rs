//! Lead editor: seed a form from a lead, validate, submit one partial update.
//!
//! DESIGN
//! ======
//! Submission is split into `begin_submit` and `complete_submit` so a
//! reactive UI can release its state borrow while the request is in flight.
//! Callers that can hold the editor across an await use `submit`, which
//! composes the two against a [`LeadStore`].
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the store. Store failures are reported
//! with a generic message and leave the form open with its values intact;
//! nothing is retried automatically.

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{RemoteError, ValidationError};
use crate::form::LeadForm;
use crate::lead::{Lead, LeadUpdate};
use crate::toast::Toast;

/// Remote mutation used by the editor.
///
/// Futures are `?Send` so browser implementations can sit on top of
/// single-threaded fetch futures.
#[async_trait(?Send)]
pub trait LeadStore {
    /// Apply a partial update and return the stored lead.
    async fn update_lead(&self, update: &LeadUpdate) -> Result<Lead, RemoteError>;
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally, nothing sent.
    Invalid(ValidationError),
    /// Stored; the editor has closed.
    Saved(Lead),
    /// The store failed; the editor is still open.
    Failed(RemoteError),
}

impl SubmitOutcome {
    /// Notification to show for this outcome.
    #[must_use]
    pub fn toast(&self) -> Toast {
        match self {
            Self::Invalid(err) => Toast::from(err),
            Self::Saved(_) => Toast::success("Success", "Lead updated successfully"),
            Self::Failed(_) => Toast::error("Failed to update lead"),
        }
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Editing session for a single lead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadEditor {
    lead_id: Uuid,
    form: LeadForm,
    open: bool,
    pending: bool,
}

impl LeadEditor {
    /// Open an editor seeded from `lead`.
    #[must_use]
    pub fn open(lead: &Lead) -> Self {
        Self { lead_id: lead.id, form: LeadForm::from_lead(lead), open: true, pending: false }
    }

    /// Reseed from a (possibly different) lead, discarding unsaved edits.
    pub fn reseed(&mut self, lead: &Lead) {
        self.lead_id = lead.id;
        self.form = LeadForm::from_lead(lead);
    }

    #[must_use]
    pub fn lead_id(&self) -> Uuid {
        self.lead_id
    }

    #[must_use]
    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True between a successful `begin_submit` and its `complete_submit`.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Close without submitting.
    pub fn close(&mut self) {
        self.open = false;
        self.pending = false;
    }

    /// Validate the form and mark the editor pending.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the editor is left untouched and no
    /// request should be issued.
    pub fn begin_submit(&mut self) -> Result<LeadUpdate, ValidationError> {
        let update = self.form.validate(self.lead_id)?;
        self.pending = true;
        Ok(update)
    }

    /// Record the store's answer to the update returned by `begin_submit`.
    pub fn complete_submit(&mut self, result: Result<Lead, RemoteError>) -> SubmitOutcome {
        self.pending = false;
        match result {
            Ok(lead) => {
                self.open = false;
                SubmitOutcome::Saved(lead)
            }
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    /// Validate, send at most one update through `store`, and record the result.
    pub async fn submit<S>(&mut self, store: &S) -> SubmitOutcome
    where
        S: LeadStore + ?Sized,
    {
        let update = match self.begin_submit() {
            Ok(update) => update,
            Err(err) => return SubmitOutcome::Invalid(err),
        };
        let result = store.update_lead(&update).await;
        self.complete_submit(result)
    }
}
