// src/personalize.rs

use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Search query used for anonymous visitors and as the fallback when a
/// logged-in user has no usable categories.
pub const DEFAULT_QUERY: &str = "latest news";
pub const DEFAULT_LANGUAGE: &str = "en";
/// Display marker shown when a user's stored categories are all empty.
pub const NO_CATEGORIES_SENTINEL: &str = "No categories selected";

/// Optional per-request overrides from the search form. These take
/// precedence over derived personalization but never change stored
/// preferences. Blank values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub language: Option<String>,
}

/// Identity info forwarded to the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDisplay {
    pub username: String,
    pub categories: Vec<String>,
}

/// The effective query the aggregation pipeline will run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub query: String,
    pub language: String,
    pub display: Option<UserDisplay>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Derives the effective `(query, language)` for a request.
///
/// Pure function of the identity row and the request parameters:
/// an explicit `q`/`language` wins; otherwise an authenticated user's
/// categories are OR-joined; otherwise the defaults apply. A user whose
/// stored categories parse to nothing keeps the default query and is shown
/// the [`NO_CATEGORIES_SENTINEL`] marker instead.
pub fn resolve(user: Option<&User>, params: &SearchParams) -> QueryPlan {
    let mut query = DEFAULT_QUERY.to_string();
    let mut display = None;

    if let Some(user) = user {
        let categories = user.category_list();
        if categories.is_empty() {
            display = Some(UserDisplay {
                username: user.username.clone(),
                categories: vec![NO_CATEGORIES_SENTINEL.to_string()],
            });
        } else {
            query = categories.join(" OR ");
            display = Some(UserDisplay {
                username: user.username.clone(),
                categories,
            });
        }
    }

    if let Some(q) = non_blank(&params.q) {
        query = q.to_string();
    }

    let language = non_blank(&params.language)
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string();

    QueryPlan {
        query,
        language,
        display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_categories(categories: &str) -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            password: "hash".to_string(),
            categories: categories.to_string(),
            age: 30,
            gender: "f".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn anonymous_gets_defaults_and_no_identity() {
        let plan = resolve(None, &SearchParams::default());
        assert_eq!(plan.query, DEFAULT_QUERY);
        assert_eq!(plan.language, DEFAULT_LANGUAGE);
        assert!(plan.display.is_none());
    }

    #[test]
    fn categories_become_or_disjunction() {
        let user = user_with_categories("tech,sports");
        let plan = resolve(Some(&user), &SearchParams::default());
        assert_eq!(plan.query, "tech OR sports");
        let display = plan.display.unwrap();
        assert_eq!(display.username, "alice");
        assert_eq!(display.categories, ["tech", "sports"]);
    }

    #[test]
    fn empty_categories_fall_back_to_sentinel() {
        let user = user_with_categories(" , ,");
        let plan = resolve(Some(&user), &SearchParams::default());
        assert_eq!(plan.query, DEFAULT_QUERY);
        assert_eq!(
            plan.display.unwrap().categories,
            [NO_CATEGORIES_SENTINEL.to_string()]
        );
    }

    #[test]
    fn explicit_override_beats_personalization() {
        let user = user_with_categories("tech,sports");
        let params = SearchParams {
            q: Some("bitcoin".to_string()),
            language: Some("fr".to_string()),
        };
        let plan = resolve(Some(&user), &params);
        assert_eq!(plan.query, "bitcoin");
        assert_eq!(plan.language, "fr");
        // Identity info is still shown even when the query is overridden.
        assert!(plan.display.is_some());
    }

    #[test]
    fn blank_override_is_ignored() {
        let params = SearchParams {
            q: Some("  ".to_string()),
            language: Some(String::new()),
        };
        let plan = resolve(None, &params);
        assert_eq!(plan.query, DEFAULT_QUERY);
        assert_eq!(plan.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn resolver_is_pure() {
        let user = user_with_categories("tech,sports");
        let a = resolve(Some(&user), &SearchParams::default());
        let b = resolve(Some(&user), &SearchParams::default());
        assert_eq!(a, b);
    }
}
