use super::*;
use time::macros::datetime;

fn sample_lead() -> Lead {
    Lead {
        id: Uuid::nil(),
        name: "Priya Nair".to_owned(),
        email: "priya@example.com".to_owned(),
        contact: "+1 555 0100".to_owned(),
        description: None,
        lead_type: LeadType::Hot,
        group_id: None,
        created_at: datetime!(2025-01-15 09:30:00 UTC),
    }
}

fn sample_changes() -> LeadChanges {
    LeadChanges {
        name: "Priya Nair".to_owned(),
        email: "priya@example.com".to_owned(),
        contact: "+1 555 0100".to_owned(),
        description: None,
        lead_type: LeadType::Warm,
        group_id: None,
    }
}

// =============================================================
// LeadType
// =============================================================

#[test]
fn lead_type_default_is_warm() {
    assert_eq!(LeadType::default(), LeadType::Warm);
}

#[test]
fn lead_type_all_is_display_order() {
    let labels: Vec<&str> = LeadType::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(labels, ["Hot", "Warm", "Warm-Cold", "Cold"]);
}

#[test]
fn lead_type_parses_wire_spelling() {
    assert_eq!("Warm-Cold".parse::<LeadType>(), Ok(LeadType::WarmCold));
    assert_eq!("Cold".parse::<LeadType>(), Ok(LeadType::Cold));
}

#[test]
fn lead_type_rejects_unknown_and_case_variants() {
    assert_eq!("hot".parse::<LeadType>(), Err(ParseLeadTypeError("hot".to_owned())));
    assert!("WarmCold".parse::<LeadType>().is_err());
    assert!("".parse::<LeadType>().is_err());
}

#[test]
fn lead_type_serializes_hyphenated_variant() {
    assert_eq!(serde_json::to_string(&LeadType::WarmCold).unwrap(), "\"Warm-Cold\"");
    let parsed: LeadType = serde_json::from_str("\"Warm-Cold\"").unwrap();
    assert_eq!(parsed, LeadType::WarmCold);
}

// =============================================================
// Lead
// =============================================================

#[test]
fn lead_deserializes_missing_optionals_as_none() {
    let json = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "name": "Priya Nair",
        "email": "priya@example.com",
        "contact": "+1 555 0100",
        "lead_type": "Hot",
        "created_at": "2025-01-15T09:30:00Z"
    });
    let lead: Lead = serde_json::from_value(json).unwrap();
    assert_eq!(lead, sample_lead());
}

#[test]
fn lead_serializes_created_at_as_rfc3339() {
    let value = serde_json::to_value(sample_lead()).unwrap();
    assert_eq!(value["created_at"], "2025-01-15T09:30:00Z");
    assert_eq!(value["lead_type"], "Hot");
}

// =============================================================
// LeadChanges
// =============================================================

#[test]
fn changes_omit_absent_optionals_from_json() {
    let value = serde_json::to_value(sample_changes()).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("group_id"));
    assert_eq!(object.len(), 4);
}

#[test]
fn changes_include_present_optionals() {
    let group = Uuid::new_v4();
    let mut changes = sample_changes();
    changes.description = Some("Asked for a pricing deck".to_owned());
    changes.group_id = Some(group);
    let value = serde_json::to_value(changes).unwrap();
    assert_eq!(value["description"], "Asked for a pricing deck");
    assert_eq!(value["group_id"], group.to_string());
}

#[test]
fn changes_validate_accepts_filled_fields() {
    assert_eq!(sample_changes().validate(), Ok(()));
}

#[test]
fn changes_validate_lists_blank_fields_in_form_order() {
    let mut changes = sample_changes();
    changes.contact = "   ".to_owned();
    changes.name = String::new();
    assert_eq!(
        changes.validate(),
        Err(ValidationError::MissingRequired(vec![RequiredField::Name, RequiredField::Contact]))
    );
}
