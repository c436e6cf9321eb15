use std::cell::RefCell;

use super::*;
use crate::form::GroupChoice;
use crate::lead::LeadType;
use crate::toast::ToastVariant;
use time::macros::datetime;

/// Store double that records every update and answers with a canned result.
struct RecordingStore {
    calls: RefCell<Vec<LeadUpdate>>,
    fail: bool,
}

impl RecordingStore {
    fn ok() -> Self {
        Self { calls: RefCell::new(Vec::new()), fail: false }
    }

    fn failing() -> Self {
        Self { calls: RefCell::new(Vec::new()), fail: true }
    }

    fn calls(&self) -> Vec<LeadUpdate> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl LeadStore for RecordingStore {
    async fn update_lead(&self, update: &LeadUpdate) -> Result<Lead, RemoteError> {
        self.calls.borrow_mut().push(update.clone());
        if self.fail {
            return Err(RemoteError::new("update lead failed: 503"));
        }
        let changes = &update.changes;
        Ok(Lead {
            id: update.id,
            name: changes.name.clone(),
            email: changes.email.clone(),
            contact: changes.contact.clone(),
            description: changes.description.clone(),
            lead_type: changes.lead_type,
            group_id: changes.group_id,
            created_at: datetime!(2025-01-01 00:00 UTC),
        })
    }
}

fn lead() -> Lead {
    Lead {
        id: Uuid::new_v4(),
        name: "Dana Ortiz".to_owned(),
        email: "dana@acme.test".to_owned(),
        contact: "555-0199".to_owned(),
        description: Some("Follow up after budget review".to_owned()),
        lead_type: LeadType::Warm,
        group_id: Some(Uuid::new_v4()),
        created_at: datetime!(2025-01-01 00:00 UTC),
    }
}

// =============================================================
// Opening and seeding
// =============================================================

#[test]
fn open_seeds_form_and_is_open() {
    let lead = lead();
    let editor = LeadEditor::open(&lead);
    assert!(editor.is_open());
    assert!(!editor.is_pending());
    assert_eq!(editor.lead_id(), lead.id);
    assert_eq!(editor.form(), &LeadForm::from_lead(&lead));
}

#[test]
fn reseed_replaces_edits_with_new_lead() {
    let mut editor = LeadEditor::open(&lead());
    editor.form_mut().name = "typed but unsaved".to_owned();
    let other = lead();
    editor.reseed(&other);
    assert_eq!(editor.lead_id(), other.id);
    assert_eq!(editor.form().name, "Dana Ortiz");
}

#[test]
fn close_closes_without_submitting() {
    let mut editor = LeadEditor::open(&lead());
    editor.close();
    assert!(!editor.is_open());
}

// =============================================================
// Submit
// =============================================================

#[tokio::test]
async fn blank_required_field_never_calls_store() {
    for blank in ["", "   ", "\t\n"] {
        let store = RecordingStore::ok();
        let mut editor = LeadEditor::open(&lead());
        editor.form_mut().email = blank.to_owned();

        let outcome = editor.submit(&store).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(store.calls().is_empty());
        assert!(editor.is_open());
        assert!(!editor.is_pending());
        let toast = outcome.toast();
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.description, "Name, email, and contact are required fields");
    }
}

#[tokio::test]
async fn valid_submit_calls_store_exactly_once_with_trimmed_values() {
    let store = RecordingStore::ok();
    let original = lead();
    let mut editor = LeadEditor::open(&original);
    editor.form_mut().name = "  Dana Ortiz-Reyes  ".to_owned();
    editor.form_mut().description = "   ".to_owned();
    editor.form_mut().group = GroupChoice::None;
    editor.form_mut().lead_type = LeadType::Hot;

    let outcome = editor.submit(&store).await;

    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    let sent = &calls[0];
    assert_eq!(sent.id, original.id);
    assert_eq!(sent.changes.name, "Dana Ortiz-Reyes");
    assert_eq!(sent.changes.description, None);
    assert_eq!(sent.changes.group_id, None);
    assert_eq!(sent.changes.lead_type, LeadType::Hot);

    let body = serde_json::to_value(&sent.changes).unwrap();
    assert!(body.get("description").is_none());
    assert!(body.get("group_id").is_none());

    assert!(outcome.is_saved());
}

#[tokio::test]
async fn successful_submit_notifies_and_closes() {
    let store = RecordingStore::ok();
    let mut editor = LeadEditor::open(&lead());

    let outcome = editor.submit(&store).await;

    assert!(!editor.is_open());
    assert!(!editor.is_pending());
    assert_eq!(outcome.toast(), Toast::success("Success", "Lead updated successfully"));
}

#[tokio::test]
async fn failed_submit_notifies_and_stays_open_with_values() {
    let store = RecordingStore::failing();
    let mut editor = LeadEditor::open(&lead());
    editor.form_mut().contact = "  ext. 42 ".to_owned();
    let typed = editor.form().clone();

    let outcome = editor.submit(&store).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(outcome.toast(), Toast::error("Failed to update lead"));
    assert!(editor.is_open());
    assert!(!editor.is_pending());
    assert_eq!(editor.form(), &typed);
    assert_eq!(store.calls().len(), 1);
}

#[tokio::test]
async fn failed_submit_can_be_retried() {
    let failing = RecordingStore::failing();
    let mut editor = LeadEditor::open(&lead());
    let _ = editor.submit(&failing).await;

    let ok = RecordingStore::ok();
    let outcome = editor.submit(&ok).await;
    assert!(outcome.is_saved());
    assert_eq!(ok.calls().len(), 1);
}

// =============================================================
// Split submit
// =============================================================

#[test]
fn begin_submit_marks_pending_only_when_valid() {
    let mut editor = LeadEditor::open(&lead());
    editor.form_mut().name.clear();
    assert!(editor.begin_submit().is_err());
    assert!(!editor.is_pending());

    editor.form_mut().name = "Dana".to_owned();
    let update = editor.begin_submit().unwrap();
    assert_eq!(update.changes.name, "Dana");
    assert!(editor.is_pending());
}

#[test]
fn complete_submit_with_error_clears_pending() {
    let mut editor = LeadEditor::open(&lead());
    let _ = editor.begin_submit().unwrap();
    let outcome = editor.complete_submit(Err(RemoteError::new("timeout")));
    assert_eq!(outcome, SubmitOutcome::Failed(RemoteError::new("timeout")));
    assert!(!editor.is_pending());
    assert!(editor.is_open());
}
