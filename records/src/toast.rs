//! Transient user notifications (title + description + severity).

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    /// Destructive toast titled `"Error"`.
    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self { title: "Error".to_owned(), description: description.into(), variant: ToastVariant::Destructive }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

impl From<&ValidationError> for Toast {
    fn from(err: &ValidationError) -> Self {
        Self::error(err.to_string())
    }
}
