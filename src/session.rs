// src/session.rs
//
// Cookie-session plumbing. The browser-held session carries exactly two
// keys: a `logged_in` flag and the `user_id` it vouches for. Whenever the
// flag is falsy the whole session is purged, so no stale partial session
// data can survive.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

use crate::error::AppError;

pub const LOGGED_IN_KEY: &str = "logged_in";
pub const USER_ID_KEY: &str = "user_id";

/// Marks the session as authenticated for `user_id`.
pub async fn establish(session: &Session, user_id: i64) -> Result<(), AppError> {
    session.insert(LOGGED_IN_KEY, true).await?;
    session.insert(USER_ID_KEY, user_id).await?;
    Ok(())
}

/// Returns the authenticated user id, or `None` for anonymous requests.
pub async fn current_user_id(session: &Session) -> Result<Option<i64>, AppError> {
    let logged_in = session.get::<bool>(LOGGED_IN_KEY).await?.unwrap_or(false);
    if !logged_in {
        return Ok(None);
    }
    Ok(session.get::<i64>(USER_ID_KEY).await?)
}

/// Destroys the session entirely (logout).
pub async fn destroy(session: &Session) -> Result<(), AppError> {
    session.flush().await?;
    Ok(())
}

/// Axum Middleware: purges ALL session keys at the start of any request
/// that does not carry a truthy `logged_in` flag.
pub async fn purge_stale_session(session: Session, req: Request, next: Next) -> Response {
    let logged_in = session
        .get::<bool>(LOGGED_IN_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or(false);

    if !logged_in {
        session.clear().await;
    }

    next.run(req).await
}
