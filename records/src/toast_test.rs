use super::*;
use crate::error::RequiredField;

#[test]
fn success_toast_uses_default_variant() {
    let toast = Toast::success("Success", "Lead updated successfully");
    assert_eq!(toast.variant, ToastVariant::Default);
    assert!(!toast.is_destructive());
}

#[test]
fn error_toast_is_destructive_and_titled_error() {
    let toast = Toast::error("Failed to update lead");
    assert_eq!(toast.title, "Error");
    assert!(toast.is_destructive());
}

#[test]
fn validation_error_converts_to_destructive_toast() {
    let err = ValidationError::MissingRequired(vec![RequiredField::Name]);
    let toast = Toast::from(&err);
    assert_eq!(toast.description, "Name, email, and contact are required fields");
    assert!(toast.is_destructive());
}

#[test]
fn variant_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&ToastVariant::Destructive).unwrap(), "\"destructive\"");
}
