// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{Categories, LoginRequest, SignupRequest, User},
    session,
    utils::hash::{hash_password, verify_password},
};

/// One generic message for both unknown-user and wrong-password failures,
/// so login responses cannot be used to enumerate usernames.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it. The insert is
/// all-or-nothing: the UNIQUE constraint on username catches duplicates
/// even when two signups race past the pre-check.
pub async fn signup(
    State(pool): State<SqlitePool>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let categories = Categories::new(payload.categories).ok_or_else(|| {
        AppError::BadRequest("Please select at least one category".to_string())
    })?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
        .bind(&payload.username)
        .fetch_optional(&pool)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    let hashed_password = hash_password(&payload.password)?;

    sqlx::query(
        r#"
        INSERT INTO users (username, password, categories, age, gender)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&payload.username)
    .bind(&hashed_password)
    .bind(categories.joined())
    .bind(payload.age)
    .bind(&payload.gender)
    .execute(&pool)
    .await
    .map_err(|e| {
        if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
            return AppError::Conflict("Username already exists".to_string());
        }
        tracing::error!("Failed to register user: {:?}", e);
        AppError::from(e)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Registration successful! Please login."
        })),
    ))
}

/// Authenticates a user and establishes a logged-in session.
///
/// Unknown usernames and wrong passwords are indistinguishable to the
/// caller; neither changes session state.
pub async fn login(
    State(pool): State<SqlitePool>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, categories, age, gender, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(&payload.username)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Login DB error: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let user = user.ok_or_else(|| AppError::AuthError(INVALID_CREDENTIALS.to_string()))?;

    let is_valid = verify_password(&payload.password, &user.password)?;

    if !is_valid {
        return Err(AppError::AuthError(INVALID_CREDENTIALS.to_string()));
    }

    session::establish(&session, user.id).await?;

    Ok(Json(json!({
        "message": "Login successful!",
        "username": user.username
    })))
}

/// Destroys the session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session::destroy(&session).await?;

    Ok(Json(json!({
        "message": "You have been logged out."
    })))
}
