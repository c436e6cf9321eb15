//! Sample transcript service.
//!
//! Transcripts are seeded by migrations and never written through the API.
//! Reads always come back in ascending creation order.

use records::{LeadType, SampleTranscript};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("malformed transcript row: {0}")]
    MalformedRow(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

type TranscriptRow = (Uuid, String, String, String, String, Vec<String>, OffsetDateTime);

pub(crate) const LIST_SAMPLE_TRANSCRIPTS: &str = "SELECT id, title, description, transcript, category, tags, created_at
     FROM sample_transcripts
     ORDER BY created_at ASC, id ASC";

fn transcript_from_row(row: TranscriptRow) -> Result<SampleTranscript, TranscriptError> {
    let (id, title, description, transcript, category, tags, created_at) = row;
    let category = category
        .parse::<LeadType>()
        .map_err(|e| TranscriptError::MalformedRow(format!("{id}: {e}")))?;
    Ok(SampleTranscript { id, title, description, transcript, category, tags, created_at })
}

/// List every sample transcript, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails, or `MalformedRow` if a stored
/// category is not recognized.
pub async fn list_sample_transcripts(pool: &PgPool) -> Result<Vec<SampleTranscript>, TranscriptError> {
    let rows = sqlx::query_as::<_, TranscriptRow>(LIST_SAMPLE_TRANSCRIPTS)
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(transcript_from_row).collect()
}

#[cfg(test)]
#[path = "transcripts_test.rs"]
mod tests;
