//! Error kinds handled by the dashboard.
//!
//! Only two are interpreted locally: a form that fails validation (reported
//! inline, no request issued) and a remote call that failed (reported with a
//! generic message). Neither is fatal; the caller can always retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use std::fmt;

/// Lead form fields that must be non-empty after trimming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Contact,
}

impl RequiredField {
    /// Lowercase field name as used in forms and JSON bodies.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission was rejected before any network call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields were blank. Fields are listed in form order.
    #[error("Name, email, and contact are required fields")]
    MissingRequired(Vec<RequiredField>),
}

impl ValidationError {
    /// Fields that failed validation.
    #[must_use]
    pub fn fields(&self) -> &[RequiredField] {
        match self {
            Self::MissingRequired(fields) => fields,
        }
    }
}

/// A fetch or mutation against the remote data service failed.
///
/// The cause is carried for logging only; it is never shown to the user or
/// categorized further.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("remote operation failed: {message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The host clipboard refused a write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);
