//! Lead service: list, read, partial update, and group lookup.
//!
//! DESIGN
//! ======
//! Updates only touch the columns present in [`LeadChanges`]. An absent
//! description or group keeps the stored value. Required fields are checked
//! again here so a client that skips validation cannot blank them out.

use records::{Lead, LeadChanges, LeadGroup, LeadType, ValidationError};
use sqlx::{PgPool, Postgres, QueryBuilder};
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("lead not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("malformed lead row: {0}")]
    MalformedRow(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

type LeadRow = (Uuid, String, String, String, Option<String>, String, Option<Uuid>, OffsetDateTime);

const LEAD_COLUMNS: &str = "id, name, email, contact, description, lead_type, group_id, created_at";

fn lead_from_row(row: LeadRow) -> Result<Lead, LeadError> {
    let (id, name, email, contact, description, lead_type, group_id, created_at) = row;
    let lead_type = lead_type
        .parse::<LeadType>()
        .map_err(|e| LeadError::MalformedRow(format!("{id}: {e}")))?;
    Ok(Lead { id, name, email, contact, description, lead_type, group_id, created_at })
}

// =============================================================================
// READS
// =============================================================================

/// List all leads, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails, or `MalformedRow` if a stored
/// classification is not recognized.
pub async fn list_leads(pool: &PgPool) -> Result<Vec<Lead>, LeadError> {
    let rows = sqlx::query_as::<_, LeadRow>(&format!(
        "SELECT {LEAD_COLUMNS} FROM leads ORDER BY created_at DESC, id ASC"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(lead_from_row).collect()
}

/// Fetch one lead by ID.
///
/// # Errors
///
/// Returns `NotFound` if no lead has this ID.
pub async fn get_lead(pool: &PgPool, lead_id: Uuid) -> Result<Lead, LeadError> {
    let row = sqlx::query_as::<_, LeadRow>(&format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1"))
        .bind(lead_id)
        .fetch_optional(pool)
        .await?
        .ok_or(LeadError::NotFound(lead_id))?;

    lead_from_row(row)
}

/// List lead groups ordered by name.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_lead_groups(pool: &PgPool) -> Result<Vec<LeadGroup>, LeadError> {
    let rows = sqlx::query_as::<_, (Uuid, String)>(
        "SELECT id, group_name FROM lead_groups ORDER BY group_name ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, group_name)| LeadGroup { id, group_name })
        .collect())
}

// =============================================================================
// UPDATE
// =============================================================================

/// Build the partial `UPDATE ... RETURNING` statement for `changes`.
pub(crate) fn build_update_query(lead_id: Uuid, changes: &LeadChanges) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE leads SET name = ");
    builder.push_bind(changes.name.clone());
    builder.push(", email = ");
    builder.push_bind(changes.email.clone());
    builder.push(", contact = ");
    builder.push_bind(changes.contact.clone());
    builder.push(", lead_type = ");
    builder.push_bind(changes.lead_type.as_str());
    if let Some(description) = &changes.description {
        builder.push(", description = ");
        builder.push_bind(description.clone());
    }
    if let Some(group_id) = changes.group_id {
        builder.push(", group_id = ");
        builder.push_bind(group_id);
    }
    builder.push(", updated_at = now() WHERE id = ");
    builder.push_bind(lead_id);
    builder.push(" RETURNING ");
    builder.push(LEAD_COLUMNS);
    builder
}

/// Apply a partial update and return the stored lead.
///
/// # Errors
///
/// Returns `Invalid` if a required field is blank (nothing is written),
/// `NotFound` if no lead has this ID, or a database error.
pub async fn update_lead(pool: &PgPool, lead_id: Uuid, changes: &LeadChanges) -> Result<Lead, LeadError> {
    changes.validate()?;

    let row = build_update_query(lead_id, changes)
        .build_query_as::<LeadRow>()
        .fetch_optional(pool)
        .await?
        .ok_or(LeadError::NotFound(lead_id))?;

    tracing::info!(%lead_id, "lead updated");
    lead_from_row(row)
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
