// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Delimiter used to persist the category list in a single TEXT column.
pub const CATEGORY_DELIMITER: &str = ",";

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    /// Comma-joined topic categories chosen at signup, in insertion order.
    /// Read back through [`Categories::parse`] which tolerates rows that
    /// were emptied by direct store mutation.
    pub categories: String,

    pub age: i64,

    pub gender: String,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl User {
    /// The stored categories as a cleaned list. May be empty for rows
    /// mutated outside the signup flow.
    pub fn category_list(&self) -> Vec<String> {
        Categories::parse(&self.categories)
    }
}

/// A validated, ordered, non-empty set of topic categories.
///
/// Construction trims whitespace, drops empty tokens and rejects a selection
/// that ends up empty, so "at least one category" holds by type rather than
/// by a post-hoc string split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories(Vec<String>);

impl Categories {
    /// Builds a category set from raw form input.
    /// Returns `None` when no non-empty category survives cleaning.
    pub fn new(raw: Vec<String>) -> Option<Self> {
        let cleaned: Vec<String> = raw
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned))
        }
    }

    /// Lenient parse of a stored comma-joined column value.
    /// Unlike [`Categories::new`], an empty result is legal here.
    pub fn parse(joined: &str) -> Vec<String> {
        joined
            .split(CATEGORY_DELIMITER)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Serialized form for the TEXT column.
    pub fn joined(&self) -> String {
        self.0.join(CATEGORY_DELIMITER)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// DTO for creating a new user (Signup).
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username length must be between 3 and 50 characters."
    ))]
    pub username: String,
    #[validate(length(
        min = 1,
        max = 128,
        message = "Password length must be between 1 and 128 characters."
    ))]
    pub password: String,
    /// Must contain at least one non-empty category; checked by the handler
    /// through [`Categories::new`].
    #[serde(default)]
    pub categories: Vec<String>,
    pub age: i64,
    pub gender: String,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_reject_empty_selection() {
        assert!(Categories::new(vec![]).is_none());
        assert!(Categories::new(vec!["".to_string(), "   ".to_string()]).is_none());
    }

    #[test]
    fn categories_trim_and_preserve_order() {
        let cats = Categories::new(vec![
            " tech ".to_string(),
            "".to_string(),
            "sports".to_string(),
        ])
        .unwrap();
        assert_eq!(cats.as_slice(), ["tech", "sports"]);
        assert_eq!(cats.joined(), "tech,sports");
    }

    #[test]
    fn parse_tolerates_emptied_column() {
        assert!(Categories::parse("").is_empty());
        assert!(Categories::parse(" , ,").is_empty());
        assert_eq!(Categories::parse("tech, sports"), ["tech", "sports"]);
    }
}
