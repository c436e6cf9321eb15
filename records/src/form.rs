//! Editable lead form values and client-side validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use uuid::Uuid;

use crate::error::ValidationError;
use crate::lead::{Lead, LeadChanges, LeadType, LeadUpdate, missing_required};

/// Group selection in the lead form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupChoice {
    #[default]
    None,
    Group(Uuid),
}

impl GroupChoice {
    /// Read a `<select>` value. The empty string and anything that is not a
    /// UUID mean "no group".
    #[must_use]
    pub fn from_select_value(value: &str) -> Self {
        Uuid::parse_str(value.trim()).map_or(Self::None, Self::Group)
    }

    /// Value to place on the matching `<option>`.
    #[must_use]
    pub fn select_value(self) -> String {
        match self {
            Self::None => String::new(),
            Self::Group(id) => id.to_string(),
        }
    }

    #[must_use]
    pub fn group_id(self) -> Option<Uuid> {
        match self {
            Self::None => None,
            Self::Group(id) => Some(id),
        }
    }
}

impl From<Option<Uuid>> for GroupChoice {
    fn from(id: Option<Uuid>) -> Self {
        id.map_or(Self::None, Self::Group)
    }
}

/// Raw form state, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub description: String,
    pub lead_type: LeadType,
    pub group: GroupChoice,
}

impl LeadForm {
    /// Seed every field from a stored lead.
    #[must_use]
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            contact: lead.contact.clone(),
            description: lead.description.clone().unwrap_or_default(),
            lead_type: lead.lead_type,
            group: lead.group_id.into(),
        }
    }

    /// Validate and normalize into an update for lead `id`.
    ///
    /// Required fields are trimmed. A blank description becomes `None`, and
    /// so does the "no group" choice, so neither is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequired`] if name, email, or contact
    /// is empty after trimming.
    pub fn validate(&self, id: Uuid) -> Result<LeadUpdate, ValidationError> {
        missing_required(&self.name, &self.email, &self.contact)?;

        let description = self.description.trim();
        Ok(LeadUpdate {
            id,
            changes: LeadChanges {
                name: self.name.trim().to_owned(),
                email: self.email.trim().to_owned(),
                contact: self.contact.trim().to_owned(),
                description: (!description.is_empty()).then(|| description.to_owned()),
                lead_type: self.lead_type,
                group_id: self.group.group_id(),
            },
        })
    }
}
