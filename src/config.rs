// src/config.rs

use dotenvy::dotenv;
use std::env;

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_FACT_CHECK_API_URL: &str =
    "https://factchecktools.googleapis.com/v1alpha1/claims:search";
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://libretranslate.de/translate";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub news_api_key: String,
    pub fact_check_api_key: String,
    pub news_api_url: String,
    pub fact_check_api_url: String,
    pub translate_api_url: String,
    /// Per-call timeout for outbound collaborator requests, in seconds.
    pub http_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:users.db?mode=rwc".to_string());

        let news_api_key = env::var("NEWS_API_KEY").expect("NEWS_API_KEY must be set");

        let fact_check_api_key =
            env::var("FACT_CHECK_API_KEY").expect("FACT_CHECK_API_KEY must be set");

        let news_api_url =
            env::var("NEWS_API_URL").unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string());

        let fact_check_api_url = env::var("FACT_CHECK_API_URL")
            .unwrap_or_else(|_| DEFAULT_FACT_CHECK_API_URL.to_string());

        let translate_api_url = env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string());

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            news_api_key,
            fact_check_api_key,
            news_api_url,
            fact_check_api_url,
            translate_api_url,
            http_timeout_secs,
            rust_log,
        }
    }
}
