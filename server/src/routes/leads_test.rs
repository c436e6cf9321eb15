use super::*;
use crate::state::test_helpers;
use records::{LeadType, RequiredField, ValidationError};

#[test]
fn lead_error_to_status_maps_not_found() {
    assert_eq!(lead_error_to_status(LeadError::NotFound(Uuid::nil())), StatusCode::NOT_FOUND);
}

#[test]
fn lead_error_to_status_maps_invalid() {
    let err = LeadError::Invalid(ValidationError::MissingRequired(vec![RequiredField::Name]));
    assert_eq!(lead_error_to_status(err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn lead_error_to_status_maps_malformed_row() {
    let err = LeadError::MalformedRow("bad lead_type".to_owned());
    assert_eq!(lead_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn update_lead_with_blank_contact_is_unprocessable() {
    let state = test_helpers::test_app_state();
    let changes = LeadChanges {
        name: "Ana".to_owned(),
        email: "ana@example.test".to_owned(),
        contact: "  ".to_owned(),
        description: None,
        lead_type: LeadType::Cold,
        group_id: None,
    };

    let result = update_lead(State(state), Path(Uuid::new_v4()), Json(changes)).await;

    assert_eq!(result.err(), Some(StatusCode::UNPROCESSABLE_ENTITY));
}
