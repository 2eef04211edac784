// src/clients/news_api.rs

use async_trait::async_trait;
use reqwest::Client;

use super::{CollaboratorError, NewsSource};
use crate::models::article::NewsResponse;

/// Client for a NewsAPI-style "everything" endpoint.
///
/// Error responses still arrive as JSON bodies with `status != "ok"`, so the
/// body is decoded unconditionally and the status left for the pipeline to
/// inspect.
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search(
        &self,
        query: &str,
        language: &str,
    ) -> Result<NewsResponse, CollaboratorError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("language", language),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?
            .json::<NewsResponse>()
            .await?;

        Ok(response)
    }
}
