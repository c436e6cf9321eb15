//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fetches return `Result<_, String>` so pages can fold them straight into
//! `QueryState::Failed`. The lead update returns [`RemoteError`] because it
//! feeds the editor's submit flow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use records::{Lead, LeadGroup, LeadUpdate, RemoteError, SampleTranscript};
#[cfg(any(test, feature = "hydrate"))]
use uuid::Uuid;

#[cfg(any(test, feature = "hydrate"))]
const SAMPLE_TRANSCRIPTS_ENDPOINT: &str = "/api/sample-transcripts";
#[cfg(any(test, feature = "hydrate"))]
const LEADS_ENDPOINT: &str = "/api/leads";
#[cfg(any(test, feature = "hydrate"))]
const LEAD_GROUPS_ENDPOINT: &str = "/api/lead-groups";

#[cfg(any(test, feature = "hydrate"))]
fn lead_endpoint(lead_id: Uuid) -> String {
    format!("{LEADS_ENDPOINT}/{lead_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str, what: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch all sample transcripts from `/api/sample-transcripts`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_sample_transcripts() -> Result<Vec<SampleTranscript>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(SAMPLE_TRANSCRIPTS_ENDPOINT, "sample transcripts").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch all leads, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_leads() -> Result<Vec<Lead>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(LEADS_ENDPOINT, "leads").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a single lead.
///
/// # Errors
///
/// Returns an error string if the request fails (including 404).
pub async fn fetch_lead(lead_id: &str) -> Result<Lead, String> {
    #[cfg(feature = "hydrate")]
    {
        let lead_id = lead_id
            .parse::<Uuid>()
            .map_err(|_| format!("invalid lead id: {lead_id}"))?;
        get_json(&lead_endpoint(lead_id), "lead").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lead_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch lead groups for the editor's group selector.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_lead_groups() -> Result<Vec<LeadGroup>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(LEAD_GROUPS_ENDPOINT, "lead groups").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Send a partial update via `PATCH /api/leads/{id}`.
///
/// # Errors
///
/// Returns [`RemoteError`] for transport failures and non-success statuses.
pub async fn update_lead(update: &LeadUpdate) -> Result<Lead, RemoteError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&lead_endpoint(update.id))
            .json(&update.changes)
            .map_err(|e| RemoteError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteError::new(e.to_string()))?;
        if !resp.ok() {
            return Err(RemoteError::new(request_failed_message("update lead", resp.status())));
        }
        resp.json::<Lead>().await.map_err(|e| RemoteError::new(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(RemoteError::new("not available on server"))
    }
}
