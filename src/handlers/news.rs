// src/handlers/news.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    error::AppError,
    models::{
        article::{Article, FactCheckClaim},
        user::User,
    },
    personalize::{self, SearchParams, UserDisplay},
    pipeline::NewsPipeline,
    session,
};

/// Feed payload handed to the presentation boundary.
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub articles: Vec<Article>,
    pub fact_checks: Vec<FactCheckClaim>,
    pub selected_language: String,
    pub user: Option<UserDisplay>,
}

/// The personalized home feed, for both logged-in and anonymous callers.
///
/// Resolves identity from the session, derives the effective query from
/// stored categories (or the `q`/`language` overrides of the search form),
/// then runs the aggregation pipeline.
pub async fn home_feed(
    State(pool): State<SqlitePool>,
    State(pipeline): State<NewsPipeline>,
    session: Session,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = match session::current_user_id(&session).await? {
        Some(user_id) => load_user(&pool, user_id).await,
        None => None,
    };

    let plan = personalize::resolve(user.as_ref(), &params);

    let feed = pipeline.run(&plan.query, &plan.language).await;

    Ok(Json(FeedResponse {
        articles: feed.articles,
        fact_checks: feed.fact_checks,
        selected_language: plan.language,
        user: plan.display,
    }))
}

/// Loads the session's user row. Personalization is an enhancement, so a
/// failed or empty lookup degrades to an anonymous feed rather than
/// failing the request.
async fn load_user(pool: &SqlitePool, user_id: i64) -> Option<User> {
    let result = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, categories, age, gender, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to load user {}: {:?}", user_id, e);
            None
        }
    }
}
