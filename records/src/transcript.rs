//! Pre-authored sample call transcripts.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::lead::LeadType;

/// A read-only demonstration transcript. Mirrors the `sample_transcripts` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTranscript {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub transcript: String,
    pub category: LeadType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl SampleTranscript {
    /// Length of the transcript text in characters.
    #[must_use]
    pub fn character_count(&self) -> usize {
        self.transcript.chars().count()
    }

    /// Footer label such as `"12,480 characters"`.
    #[must_use]
    pub fn character_count_label(&self) -> String {
        format!("{} characters", group_thousands(self.character_count()))
    }
}

/// Sort transcripts by ascending creation time. Ties keep their input order.
#[must_use]
pub fn order_by_creation(mut transcripts: Vec<SampleTranscript>) -> Vec<SampleTranscript> {
    transcripts.sort_by_key(|t| t.created_at);
    transcripts
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
