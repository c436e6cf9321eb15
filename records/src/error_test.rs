use super::*;

#[test]
fn validation_error_message_is_user_facing() {
    let err = ValidationError::MissingRequired(vec![RequiredField::Email]);
    assert_eq!(err.to_string(), "Name, email, and contact are required fields");
}

#[test]
fn validation_error_exposes_fields() {
    let err = ValidationError::MissingRequired(vec![RequiredField::Name, RequiredField::Contact]);
    assert_eq!(err.fields(), &[RequiredField::Name, RequiredField::Contact]);
}

#[test]
fn required_field_display_is_lowercase() {
    assert_eq!(RequiredField::Name.to_string(), "name");
    assert_eq!(RequiredField::Email.to_string(), "email");
    assert_eq!(RequiredField::Contact.to_string(), "contact");
}

#[test]
fn remote_error_formats_message() {
    let err = RemoteError::new("update lead failed: 500");
    assert_eq!(err.to_string(), "remote operation failed: update lead failed: 500");
}

#[test]
fn clipboard_error_formats_reason() {
    let err = ClipboardError("permission denied".to_owned());
    assert_eq!(err.to_string(), "clipboard unavailable: permission denied");
}
