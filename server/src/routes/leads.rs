//! Lead and lead-group routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{Lead, LeadChanges, LeadGroup};
use uuid::Uuid;

use crate::services::leads::{self, LeadError};
use crate::state::AppState;

/// `GET /api/leads`: list leads, newest first.
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, StatusCode> {
    let rows = leads::list_leads(&state.pool).await.map_err(lead_error_to_status)?;
    Ok(Json(rows))
}

/// `GET /api/leads/{id}`: fetch one lead.
pub async fn get_lead(State(state): State<AppState>, Path(lead_id): Path<Uuid>) -> Result<Json<Lead>, StatusCode> {
    let lead = leads::get_lead(&state.pool, lead_id)
        .await
        .map_err(lead_error_to_status)?;
    Ok(Json(lead))
}

/// `PATCH /api/leads/{id}`: partial update; omitted optionals keep their stored value.
pub async fn update_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<Uuid>,
    Json(changes): Json<LeadChanges>,
) -> Result<Json<Lead>, StatusCode> {
    let lead = leads::update_lead(&state.pool, lead_id, &changes)
        .await
        .map_err(lead_error_to_status)?;
    Ok(Json(lead))
}

/// `GET /api/lead-groups`: groups offered in the lead form.
pub async fn list_lead_groups(State(state): State<AppState>) -> Result<Json<Vec<LeadGroup>>, StatusCode> {
    let groups = leads::list_lead_groups(&state.pool)
        .await
        .map_err(lead_error_to_status)?;
    Ok(Json(groups))
}

pub(crate) fn lead_error_to_status(err: LeadError) -> StatusCode {
    match err {
        LeadError::NotFound(_) => StatusCode::NOT_FOUND,
        LeadError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LeadError::MalformedRow(_) | LeadError::Database(_) => {
            tracing::error!(error = %err, "lead request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
