//! Search results and organization detail handlers.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
};

use super::super::format::FormatParams;
use super::super::template_structs::{render_view, DetailBodyTemplate, ResultsBodyTemplate};
use super::super::{AppError, AppState, ErrorResponse, Format};
use crate::models::SearchQuery;
use crate::services::{load_detail, run_search};

/// `GET /organizations`
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Query(params): Query<FormatParams>,
) -> Result<Response, ErrorResponse> {
    let format = Format::negotiate(&headers, params.format.as_deref());
    let respond = |e: AppError| e.respond(format, "index");

    query
        .validate()
        .map_err(|e| respond(AppError::InvalidParameters(e)))?;

    let page = run_search(
        state.backend.as_ref(),
        &state.fallbacks,
        &state.service_terms,
        &query,
    )
    .await
    .map_err(|e| respond(e.into()))?;

    let title = match query.keyword() {
        Some(keyword) => format!("Search results for {}", keyword),
        None => "Search results".to_string(),
    };
    render_view(format, "index", &title, ResultsBodyTemplate::new(&page)).map_err(respond)
}

/// `GET /organizations/:id`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
    Query(params): Query<FormatParams>,
) -> Result<Response, ErrorResponse> {
    let format = Format::negotiate(&headers, params.format.as_deref());
    let respond = |e: AppError| e.respond(format, "show");

    let page = load_detail(state.backend.as_ref(), &id, &query)
        .await
        .map_err(|e| respond(e.into()))?;

    let body = DetailBodyTemplate::new(&page).map_err(respond)?;
    render_view(format, "show", &page.organization.name, body).map_err(respond)
}
