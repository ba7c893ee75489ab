//! Router configuration for the web server.

use axum::{response::Redirect, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/organizations") }))
        // Search results and detail pages
        .route("/organizations", get(handlers::index))
        .route("/organizations/:id", get(handlers::show))
        // Status API
        .route("/api/status", get(handlers::api_status))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/map.js", get(handlers::serve_js))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
