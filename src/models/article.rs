// src/models/article.rs

use serde::{Deserialize, Serialize};

/// Asset served by the frontend when the news source omits an image.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// A projected article as rendered to clients. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
}

impl Article {
    /// Projects a raw news-source article down to the four rendered fields,
    /// defaulting missing title/description to empty strings and missing
    /// images to the placeholder asset.
    pub fn project(raw: RawArticle) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url,
            image: raw
                .url_to_image
                .filter(|img| !img.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

/// Wire shape of the news source response body.
/// A `status` other than "ok" carries the API-level error in `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// One raw article as the news source reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "urlToImage")]
    pub url_to_image: Option<String>,
}

/// Fact-check claims are forwarded verbatim, never interpreted.
pub type FactCheckClaim = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_defaults_missing_fields() {
        let article = Article::project(RawArticle {
            title: None,
            description: None,
            url: "https://example.com/a".to_string(),
            url_to_image: None,
        });
        assert_eq!(article.title, "");
        assert_eq!(article.description, "");
        assert_eq!(article.url, "https://example.com/a");
        assert_eq!(article.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn project_keeps_present_fields() {
        let article = Article::project(RawArticle {
            title: Some("Title".to_string()),
            description: Some("Desc".to_string()),
            url: "https://example.com/b".to_string(),
            url_to_image: Some("https://example.com/b.png".to_string()),
        });
        assert_eq!(article.title, "Title");
        assert_eq!(article.description, "Desc");
        assert_eq!(article.image, "https://example.com/b.png");
    }

    #[test]
    fn project_treats_blank_image_as_missing() {
        let article = Article::project(RawArticle {
            url_to_image: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(article.image, PLACEHOLDER_IMAGE);
    }
}
