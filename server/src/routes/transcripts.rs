//! Sample transcript routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use records::SampleTranscript;

use crate::services::transcripts::{self, TranscriptError};
use crate::state::AppState;

/// `GET /api/sample-transcripts`: every sample transcript, oldest first.
pub async fn list_sample_transcripts(
    State(state): State<AppState>,
) -> Result<Json<Vec<SampleTranscript>>, StatusCode> {
    let rows = transcripts::list_sample_transcripts(&state.pool)
        .await
        .map_err(transcript_error_to_status)?;
    Ok(Json(rows))
}

pub(crate) fn transcript_error_to_status(err: TranscriptError) -> StatusCode {
    tracing::error!(error = %err, "sample transcript request failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
#[path = "transcripts_test.rs"]
mod tests;
