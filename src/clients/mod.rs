// src/clients/mod.rs
//
// Outbound collaborators (news source, translation service, fact-check
// source) sit behind traits so the pipeline can be exercised against fakes
// and so degrade-vs-propagate is decided in one place, not per call site.

pub mod fact_check;
pub mod news_api;
pub mod translate;

use async_trait::async_trait;
use std::fmt;

use crate::models::article::{FactCheckClaim, NewsResponse};

pub use fact_check::FactCheckClient;
pub use news_api::NewsApiClient;
pub use translate::TranslateClient;

/// Failure of an outbound collaborator call.
#[derive(Debug)]
pub enum CollaboratorError {
    /// Network-level failure: connect, timeout, or undecodable body.
    Transport(String),
    /// The collaborator answered but reported an error.
    Api(String),
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Transport(msg) => write!(f, "transport error: {}", msg),
            CollaboratorError::Api(msg) => write!(f, "api error: {}", msg),
        }
    }
}

impl std::error::Error for CollaboratorError {}

impl From<reqwest::Error> for CollaboratorError {
    fn from(err: reqwest::Error) -> Self {
        CollaboratorError::Transport(err.to_string())
    }
}

/// External source of news articles.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Runs a keyword search. Returns the raw response body; API-level
    /// error statuses are the caller's concern.
    async fn search(&self, query: &str, language: &str)
    -> Result<NewsResponse, CollaboratorError>;
}

/// External per-string translation service.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &str) -> Result<String, CollaboratorError>;
}

/// External source of fact-check claims.
#[async_trait]
pub trait FactCheckSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<FactCheckClaim>, CollaboratorError>;
}
