use super::*;
use crate::error::RequiredField;
use time::macros::datetime;

fn stored_lead() -> Lead {
    Lead {
        id: Uuid::new_v4(),
        name: "Marcus Hale".to_owned(),
        email: "marcus@northwind.test".to_owned(),
        contact: "555-0142".to_owned(),
        description: Some("Met at the SaaS expo".to_owned()),
        lead_type: LeadType::Hot,
        group_id: Some(Uuid::new_v4()),
        created_at: datetime!(2025-02-10 14:00 UTC),
    }
}

fn filled_form() -> LeadForm {
    LeadForm {
        name: "  Marcus Hale ".to_owned(),
        email: " marcus@northwind.test".to_owned(),
        contact: "555-0142  ".to_owned(),
        description: String::new(),
        lead_type: LeadType::WarmCold,
        group: GroupChoice::None,
    }
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn from_lead_copies_every_field() {
    let lead = stored_lead();
    let form = LeadForm::from_lead(&lead);
    assert_eq!(form.name, lead.name);
    assert_eq!(form.email, lead.email);
    assert_eq!(form.contact, lead.contact);
    assert_eq!(form.description, "Met at the SaaS expo");
    assert_eq!(form.lead_type, LeadType::Hot);
    assert_eq!(form.group, GroupChoice::Group(lead.group_id.unwrap()));
}

#[test]
fn from_lead_seeds_missing_optionals_as_blank() {
    let mut lead = stored_lead();
    lead.description = None;
    lead.group_id = None;
    let form = LeadForm::from_lead(&lead);
    assert_eq!(form.description, "");
    assert_eq!(form.group, GroupChoice::None);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_trims_required_fields() {
    let id = Uuid::new_v4();
    let update = filled_form().validate(id).unwrap();
    assert_eq!(update.id, id);
    assert_eq!(update.changes.name, "Marcus Hale");
    assert_eq!(update.changes.email, "marcus@northwind.test");
    assert_eq!(update.changes.contact, "555-0142");
    assert_eq!(update.changes.lead_type, LeadType::WarmCold);
}

#[test]
fn validate_omits_blank_description() {
    let mut form = filled_form();
    form.description = "  \n\t ".to_owned();
    let update = form.validate(Uuid::nil()).unwrap();
    assert_eq!(update.changes.description, None);
}

#[test]
fn validate_trims_present_description() {
    let mut form = filled_form();
    form.description = "  Wants a demo next week  ".to_owned();
    let update = form.validate(Uuid::nil()).unwrap();
    assert_eq!(update.changes.description.as_deref(), Some("Wants a demo next week"));
}

#[test]
fn validate_omits_group_when_none_selected() {
    let update = filled_form().validate(Uuid::nil()).unwrap();
    assert_eq!(update.changes.group_id, None);
}

#[test]
fn validate_keeps_selected_group() {
    let group = Uuid::new_v4();
    let mut form = filled_form();
    form.group = GroupChoice::Group(group);
    let update = form.validate(Uuid::nil()).unwrap();
    assert_eq!(update.changes.group_id, Some(group));
}

#[test]
fn validate_rejects_whitespace_only_required_fields() {
    for field in [RequiredField::Name, RequiredField::Email, RequiredField::Contact] {
        let mut form = filled_form();
        match field {
            RequiredField::Name => form.name = "   ".to_owned(),
            RequiredField::Email => form.email = "\t".to_owned(),
            RequiredField::Contact => form.contact = String::new(),
        }
        assert_eq!(form.validate(Uuid::nil()), Err(ValidationError::MissingRequired(vec![field])));
    }
}

#[test]
fn validate_reports_all_missing_fields() {
    let form = LeadForm::default();
    let err = form.validate(Uuid::nil()).unwrap_err();
    assert_eq!(err.fields(), &[RequiredField::Name, RequiredField::Email, RequiredField::Contact]);
}

// =============================================================
// GroupChoice
// =============================================================

#[test]
fn group_choice_select_value_round_trips() {
    let id = Uuid::new_v4();
    let choice = GroupChoice::Group(id);
    assert_eq!(GroupChoice::from_select_value(&choice.select_value()), choice);
    assert_eq!(GroupChoice::from_select_value(&GroupChoice::None.select_value()), GroupChoice::None);
}

#[test]
fn group_choice_treats_legacy_sentinel_as_none() {
    assert_eq!(GroupChoice::from_select_value("none"), GroupChoice::None);
    assert_eq!(GroupChoice::from_select_value("not-a-uuid"), GroupChoice::None);
}

#[test]
fn group_choice_from_option() {
    let id = Uuid::new_v4();
    assert_eq!(GroupChoice::from(Some(id)), GroupChoice::Group(id));
    assert_eq!(GroupChoice::from(None), GroupChoice::None);
    assert_eq!(GroupChoice::Group(id).group_id(), Some(id));
}
