//! Service status endpoint.

use axum::{extract::State, response::IntoResponse, Json};

use super::super::AppState;

/// `GET /api/status`
pub async fn api_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "backend": state.backend.kind(),
        "fallback_keywords": state.fallbacks.len(),
        "service_terms_cached": state.service_terms.get().is_some(),
    }))
}
