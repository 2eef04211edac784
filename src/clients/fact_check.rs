// src/clients/fact_check.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{CollaboratorError, FactCheckSource};
use crate::models::article::FactCheckClaim;

/// Client for a Google Fact Check Tools-style claim search endpoint.
/// Claims are forwarded as opaque JSON.
pub struct FactCheckClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ClaimSearchResponse {
    #[serde(default)]
    claims: Vec<FactCheckClaim>,
}

impl FactCheckClient {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl FactCheckSource for FactCheckClient {
    async fn search(&self, query: &str) -> Result<Vec<FactCheckClaim>, CollaboratorError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("query", query), ("key", &self.api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CollaboratorError::Api(format!(
                "fact-check service returned {}",
                response.status()
            )));
        }

        let body = response.json::<ClaimSearchResponse>().await?;
        Ok(body.claims)
    }
}
