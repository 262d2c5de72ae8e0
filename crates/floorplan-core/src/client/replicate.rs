//! Replicate prediction client.
//!
//! Submits a job via `POST /v1/predictions` and polls
//! `GET /v1/predictions/{id}` until the job reaches a terminal state.

use super::types::{Prediction, PredictionStatus};
use super::{PredictionClient, PredictionInput};
use crate::config::ApiConfig;
use crate::error::AnalysisError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// HTTP client for the Replicate prediction API.
pub struct ReplicateClient {
    api_token: String,
    base_url: String,
    model_version: String,
    poll_interval: Duration,
    timeout: Duration,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    version: &'a str,
    input: &'a PredictionInput,
}

impl ReplicateClient {
    /// Create a client from the resolved API token and config section.
    pub fn new(config: &ApiConfig, api_token: &str) -> Self {
        Self {
            api_token: api_token.to_string(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            model_version: config.model_version.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            timeout: Duration::from_secs(config.timeout_secs),
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(&self, id: &str) -> Result<Prediction, AnalysisError> {
        let url = format!("{}/v1/predictions/{}", self.base_url, id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| AnalysisError::Await {
                id: id.to_string(),
                message: format!("status request failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AnalysisError::Await {
                id: id.to_string(),
                message: format!("HTTP {status}: {text}"),
            });
        }

        resp.json().await.map_err(|e| AnalysisError::Await {
            id: id.to_string(),
            message: format!("failed to parse status response: {e}"),
        })
    }
}

#[async_trait]
impl PredictionClient for ReplicateClient {
    fn name(&self) -> &str {
        "replicate"
    }

    async fn create(&self, input: PredictionInput) -> Result<Prediction, AnalysisError> {
        let url = format!("{}/v1/predictions", self.base_url);
        let body = CreateRequest {
            version: &self.model_version,
            input: &input,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Submit {
                message: format!("request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AnalysisError::Submit {
                message: format!("HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let prediction: Prediction = resp.json().await.map_err(|e| AnalysisError::Submit {
            message: format!("failed to parse create response: {e}"),
            status_code: None,
        })?;

        tracing::debug!(id = %prediction.id, "prediction created");
        Ok(prediction)
    }

    async fn wait(&self, prediction: Prediction) -> Result<Prediction, AnalysisError> {
        let deadline = Instant::now() + self.timeout;
        let mut current = prediction;

        while !current.status.is_terminal() {
            if Instant::now() >= deadline {
                return Err(AnalysisError::Await {
                    id: current.id,
                    message: format!("timed out after {:?}", self.timeout),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
            current = self.fetch(&current.id).await?;
        }

        match current.status {
            PredictionStatus::Succeeded => Ok(current),
            _ => Err(AnalysisError::RemoteFailed {
                id: current.id,
                message: current
                    .error
                    .unwrap_or_else(|| "no error reported".to_string()),
            }),
        }
    }
}
