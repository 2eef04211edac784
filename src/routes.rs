// src/routes.rs

use axum::{Router, http::Method, middleware, routing::get, routing::post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::{
    handlers::{auth, news},
    session,
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the auth and news sub-routers.
/// * Wires cookie sessions (browser-held, cleared at session end) plus the
///   stale-session purge middleware.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (database pool, config, pipeline).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnSessionEnd);

    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout));

    let news_routes = Router::new().route("/", get(news::home_feed));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/news", news_routes)
        // Global Middleware (applied from outside in)
        .layer(middleware::from_fn(session::purge_stale_session))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
