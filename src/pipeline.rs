// src/pipeline.rs

use std::sync::Arc;
use std::time::Duration;

use crate::clients::{
    CollaboratorError, FactCheckClient, FactCheckSource, NewsApiClient, NewsSource,
    TranslateClient, Translator,
};
use crate::config::Config;
use crate::models::article::{Article, FactCheckClaim};
use crate::personalize::DEFAULT_LANGUAGE;

/// Articles are truncated to this many before projection and translation.
pub const ARTICLE_LIMIT: usize = 20;

/// Aggregation output handed to the presentation boundary.
#[derive(Debug)]
pub struct FeedResult {
    pub articles: Vec<Article>,
    pub fact_checks: Vec<FactCheckClaim>,
}

/// The news aggregation pipeline: fetch, optionally translate, fact-check.
///
/// Each stage is independently fault-tolerant. Collaborator failures only
/// remove enrichment data from the response; they never fail the request.
#[derive(Clone)]
pub struct NewsPipeline {
    news: Arc<dyn NewsSource>,
    translator: Arc<dyn Translator>,
    fact_check: Arc<dyn FactCheckSource>,
}

impl NewsPipeline {
    pub fn new(
        news: Arc<dyn NewsSource>,
        translator: Arc<dyn Translator>,
        fact_check: Arc<dyn FactCheckSource>,
    ) -> Self {
        Self {
            news,
            translator,
            fact_check,
        }
    }

    /// Wires the real collaborator clients, sharing one HTTP client with a
    /// per-call timeout. Startup-only; panics if the client cannot be built.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self::new(
            Arc::new(NewsApiClient::new(
                client.clone(),
                config.news_api_url.clone(),
                config.news_api_key.clone(),
            )),
            Arc::new(TranslateClient::new(
                client.clone(),
                config.translate_api_url.clone(),
            )),
            Arc::new(FactCheckClient::new(
                client,
                config.fact_check_api_url.clone(),
                config.fact_check_api_key.clone(),
            )),
        )
    }

    /// Runs the full pipeline for an effective `(query, language)`.
    pub async fn run(&self, query: &str, language: &str) -> FeedResult {
        let articles = self.fetch_articles(query, language).await;

        // Translation only ever sees the already-limited, already-projected
        // list, so translation failures cannot affect field defaulting.
        let articles = if language != DEFAULT_LANGUAGE {
            self.translate_articles(articles, language).await
        } else {
            articles
        };

        let fact_checks = self.fetch_fact_checks(query).await;

        FeedResult {
            articles,
            fact_checks,
        }
    }

    /// Fetches and projects articles. Any transport failure or non-"ok"
    /// API status degrades to an empty list with a log line.
    async fn fetch_articles(&self, query: &str, language: &str) -> Vec<Article> {
        match self.news.search(query, language).await {
            Ok(response) if response.status == "ok" => response
                .articles
                .into_iter()
                .take(ARTICLE_LIMIT)
                .map(Article::project)
                .collect(),
            Ok(response) => {
                tracing::warn!(
                    status = %response.status,
                    message = ?response.message,
                    "news source returned an error status"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("failed to fetch news: {}", e);
                Vec::new()
            }
        }
    }

    /// Translates each article independently, preserving length and order.
    async fn translate_articles(&self, articles: Vec<Article>, target: &str) -> Vec<Article> {
        let mut translated = Vec::with_capacity(articles.len());
        for article in articles {
            translated.push(self.translate_article(article, target).await);
        }
        translated
    }

    /// Translates one article's title and non-empty description. On any
    /// failure the original title and description are kept verbatim;
    /// url and image always pass through untouched.
    async fn translate_article(&self, article: Article, target: &str) -> Article {
        match self.translate_fields(&article, target).await {
            Ok((title, description)) => Article {
                title,
                description,
                ..article
            },
            Err(e) => {
                tracing::warn!(url = %article.url, "failed to translate article: {}", e);
                article
            }
        }
    }

    async fn translate_fields(
        &self,
        article: &Article,
        target: &str,
    ) -> Result<(String, String), CollaboratorError> {
        let title = self.translator.translate(&article.title, target).await?;
        let description = if article.description.is_empty() {
            String::new()
        } else {
            self.translator
                .translate(&article.description, target)
                .await?
        };
        Ok((title, description))
    }

    /// Fetches fact-check claims. Claims are enrichment data, so a failure
    /// here degrades to an empty list rather than failing the request.
    async fn fetch_fact_checks(&self, query: &str) -> Vec<FactCheckClaim> {
        match self.fact_check.search(query).await {
            Ok(claims) => claims,
            Err(e) => {
                tracing::warn!("failed to fetch fact checks: {}", e);
                Vec::new()
            }
        }
    }
}
