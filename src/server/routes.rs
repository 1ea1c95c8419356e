//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Both anime routes share the parameter name; the staff handler
        // reads it as a MyAnimeList id.
        .route("/anime/:anime", get(handlers::get_anime))
        .route("/anime/:anime/staff", get(handlers::get_staff))
        .route("/az-list/pages", get(handlers::az_list_pages))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
