pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod session;
pub mod state;
pub mod upstream;
pub mod utils;

use std::time::Duration;

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::state::AppState;

/// JSON endpoints under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/locks", get(handlers::locks::list_locks))
        .route("/api/locks/find/{mac}", get(handlers::locks::find_lock))
        .route("/api/locks/mac/{mac}", get(handlers::locks::find_lock))
        .route("/api/locks/{mac}/lock", post(handlers::locks::lock))
        .route("/api/locks/{mac}/unlock", post(handlers::locks::unlock))
        .route("/api/lock-events", get(handlers::lock_events::list_lock_events))
        .route("/api/authors", get(handlers::authors::list_authors))
}

/// Full application: API routes, the UI bundle as a single-page app behind
/// the access gate, and the shared request layers.
pub fn create_app(state: AppState) -> Router {
    let dist = state.config.frontend_dist.clone();
    let spa = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(24 * 60 * 60));

    api_routes()
        .fallback_service(spa)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::access_gate,
        ))
        .layer(axum_middleware::from_fn(middleware::log_error_responses))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::request_id))
        .with_state(state)
}
