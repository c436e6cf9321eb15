//! Lead records and the partial-update body used to edit them.

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::{RequiredField, ValidationError};

/// Coarse buying-readiness label for a lead. Also used as the category of a
/// sample transcript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadType {
    Hot,
    #[default]
    Warm,
    #[serde(rename = "Warm-Cold")]
    WarmCold,
    Cold,
}

impl LeadType {
    /// All classifications in display order.
    pub const ALL: [Self; 4] = [Self::Hot, Self::Warm, Self::WarmCold, Self::Cold];

    /// Wire and database spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Warm => "Warm",
            Self::WarmCold => "Warm-Cold",
            Self::Cold => "Cold",
        }
    }
}

impl fmt::Display for LeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four classifications.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown lead type: {0}")]
pub struct ParseLeadTypeError(pub String);

impl FromStr for LeadType {
    type Err = ParseLeadTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseLeadTypeError(s.to_owned()))
    }
}

/// A sales prospect. Mirrors the `leads` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact: String,
    #[serde(default)]
    pub description: Option<String>,
    pub lead_type: LeadType,
    #[serde(default)]
    pub group_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A named bucket leads can be filed under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadGroup {
    pub id: Uuid,
    pub group_name: String,
}

/// Column values for a partial lead update.
///
/// Absent optional fields are left out of the JSON body entirely, so the
/// stored value is kept rather than overwritten with an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadChanges {
    pub name: String,
    pub email: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub lead_type: LeadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
}

impl LeadChanges {
    /// Check that required fields are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequired`] listing every blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        missing_required(&self.name, &self.email, &self.contact)
    }
}

/// A partial update addressed to one lead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadUpdate {
    pub id: Uuid,
    pub changes: LeadChanges,
}

pub(crate) fn missing_required(name: &str, email: &str, contact: &str) -> Result<(), ValidationError> {
    let missing: Vec<RequiredField> = [
        (RequiredField::Name, name),
        (RequiredField::Email, email),
        (RequiredField::Contact, contact),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() { Ok(()) } else { Err(ValidationError::MissingRequired(missing)) }
}
