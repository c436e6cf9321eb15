//! CSS class selection for classification badges, dots and toasts.

#[cfg(test)]
#[path = "palette_test.rs"]
mod tests;

use records::{LeadType, ToastVariant};

use crate::util::guide_content::Tone;

/// Badge shown next to a sample transcript's title.
pub fn category_badge_class(category: LeadType) -> &'static str {
    match category {
        LeadType::Hot => "badge badge--red",
        LeadType::Warm => "badge badge--orange",
        LeadType::WarmCold => "badge badge--blue",
        LeadType::Cold => "badge badge--gray",
    }
}

/// Colored dot beside each option of the editor's lead type selector.
///
/// A different scale from [`category_badge_class`]: the editor
/// marks Warm green and Warm-Cold yellow.
pub fn lead_type_dot_class(lead_type: LeadType) -> &'static str {
    match lead_type {
        LeadType::Hot => "dot dot--red",
        LeadType::Warm => "dot dot--green",
        LeadType::WarmCold => "dot dot--yellow",
        LeadType::Cold => "dot dot--blue",
    }
}

pub fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "band band--success",
        Tone::Primary => "band band--primary",
        Tone::Warning => "band band--warning",
        Tone::Destructive => "band band--destructive",
    }
}
