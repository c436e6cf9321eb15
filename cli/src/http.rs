//! Thin JSON client over the GrowthLens server API.

use async_trait::async_trait;
use records::{Lead, LeadGroup, LeadStore, LeadUpdate, RemoteError, SampleTranscript};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::CliError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), client: reqwest::Client::new() }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn ping(&self) -> Result<(), CliError> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Status { status: status.as_u16(), message: "health check failed".to_owned() });
        }
        Ok(())
    }

    pub async fn sample_transcripts(&self) -> Result<Vec<SampleTranscript>, CliError> {
        self.get("/api/sample-transcripts").await
    }

    pub async fn leads(&self) -> Result<Vec<Lead>, CliError> {
        self.get("/api/leads").await
    }

    pub async fn lead(&self, lead_id: Uuid) -> Result<Lead, CliError> {
        self.get(&format!("/api/leads/{lead_id}")).await
    }

    pub async fn lead_groups(&self) -> Result<Vec<LeadGroup>, CliError> {
        self.get("/api/lead-groups").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.client.get(self.url(path)).send().await?;
        decode(response).await
    }

    async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, CliError> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), message: text });
    }
    Ok(serde_json::from_str(&text)?)
}

#[async_trait(?Send)]
impl LeadStore for ApiClient {
    async fn update_lead(&self, update: &LeadUpdate) -> Result<Lead, RemoteError> {
        self.patch(&format!("/api/leads/{}", update.id), &update.changes)
            .await
            .map_err(|e| RemoteError::new(e.to_string()))
    }
}
