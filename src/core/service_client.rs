// src/core/service_client.rs
//! HTTP client for the external recommendation service

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info, trace};

use crate::error::SubmitError;
use crate::types::{RecommendationRequest, RecommendationResponse};

pub const RECOMMENDATIONS_ENDPOINT: &str = "/api/job-recommendations";

/// Anything that can turn a profile request into a recommendation response.
#[async_trait]
pub trait RecommendationTransport: Send + Sync {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, SubmitError>;
}

pub struct RecommendationClient {
    client: reqwest::Client,
    base_url: String,
    endpoint: String,
}

impl RecommendationClient {
    /// Create new client; the timeout belongs to the transport only
    pub fn new(base_url: &str, endpoint: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    pub fn url(&self) -> String {
        if self.endpoint.starts_with('/') {
            format!("{}{}", self.base_url, self.endpoint)
        } else {
            format!("{}/{}", self.base_url, self.endpoint)
        }
    }
}

#[async_trait]
impl RecommendationTransport for RecommendationClient {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, SubmitError> {
        let url = self.url();
        info!("Calling recommendation service: {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Recommendation service error {}: {}", status, error_text);
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_text = response.text().await?;
        debug!("Raw recommendation response: {}", response_text);

        let parsed: RecommendationResponse = serde_json::from_str(&response_text)?;
        info!(
            "Received {} recommendation(s)",
            parsed.recommendations().len()
        );
        Ok(parsed)
    }
}
