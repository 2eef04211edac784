// src/clients/translate.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CollaboratorError, Translator};

/// Client for a LibreTranslate-style per-string translation endpoint.
pub struct TranslateClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl TranslateClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl Translator for TranslateClient {
    async fn translate(&self, text: &str, target: &str) -> Result<String, CollaboratorError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&TranslateRequest {
                q: text,
                source: "auto",
                target,
                format: "text",
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CollaboratorError::Api(format!(
                "translation service returned {}",
                response.status()
            )));
        }

        let body = response.json::<TranslateResponse>().await?;
        Ok(body.translated_text)
    }
}
