//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Body templates render on their own for JSON responses and inside
//! [`LayoutTemplate`] for full pages.

use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};

use super::{AppError, Format};
use crate::models::{Organization, TerminologyBox};
use crate::services::{DetailPage, LinkParams, SearchPage};
use crate::utils::json_for_script;

/// Full page shell.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// Error message body.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

/// Helper struct for one search result.
pub struct ResultRow {
    pub id: String,
    pub name: String,
    pub href: String,
    pub description: String,
    pub address: String,
    pub categories: Vec<String>,
}

impl ResultRow {
    fn new(org: &Organization, links: &LinkParams) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            href: links.detail_href(&org.id),
            description: org.description.clone().unwrap_or_default(),
            address: org.address.as_ref().map(|a| a.one_line()).unwrap_or_default(),
            categories: org.category.clone(),
        }
    }
}

/// Search results body.
#[derive(Template)]
#[template(path = "organizations/results_body.html")]
pub struct ResultsBodyTemplate<'a> {
    pub headline: String,
    pub keyword: &'a str,
    pub location: &'a str,
    pub radius: &'a str,
    pub terminology: Option<&'a TerminologyBox>,
    pub rows: Vec<ResultRow>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<'a> ResultsBodyTemplate<'a> {
    pub fn new(page: &'a SearchPage) -> Self {
        let links = &page.link_params;
        let page_href = |n: u32| {
            let params = LinkParams::new(&page.query.with_page(n));
            format!("/organizations{}", params.query_string())
        };

        Self {
            headline: page.summary.headline(),
            keyword: page.query.keyword().unwrap_or_default(),
            location: page.query.location().unwrap_or_default(),
            radius: page.query.radius().unwrap_or_default(),
            terminology: page.terminology.as_ref(),
            rows: page
                .organizations
                .iter()
                .map(|org| ResultRow::new(org, links))
                .collect(),
            prev_href: page.pagination.prev_page().map(page_href),
            next_href: page.pagination.next_page().map(page_href),
            current_page: page.pagination.current,
            total_pages: page.pagination.total_pages(),
        }
    }
}

/// Organization detail body.
#[derive(Template)]
#[template(path = "organizations/detail_body.html")]
pub struct DetailBodyTemplate<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub address: Option<String>,
    pub phones: &'a [String],
    pub website: Option<&'a str>,
    pub keywords: &'a [String],
    pub back_url: &'a str,
    pub map_json: Option<String>,
}

impl<'a> DetailBodyTemplate<'a> {
    pub fn new(page: &'a DetailPage) -> Result<Self, AppError> {
        let org = &page.organization;
        let map_json = match page.map_data {
            Some(ref entries) => Some(json_for_script(
                &serde_json::to_string(entries)
                    .map_err(|e| AppError::Render(askama::Error::Custom(Box::new(e))))?,
            )),
            None => None,
        };

        Ok(Self {
            id: &org.id,
            name: &org.name,
            description: org.description.as_deref(),
            address: org.address.as_ref().map(|a| a.one_line()),
            phones: &org.phones,
            website: org.website.as_deref(),
            keywords: &org.keywords,
            back_url: &page.search_results_url,
            map_json,
        })
    }
}

/// Deliver a rendered body as a full page or as `{content, action}`.
pub fn render_view<T: Template>(
    format: Format,
    action: &str,
    title: &str,
    body: T,
) -> Result<Response, AppError> {
    let content = body.render()?;
    match format {
        Format::Json => Ok(Json(serde_json::json!({
            "content": content,
            "action": action,
        }))
        .into_response()),
        Format::Html => {
            let page = LayoutTemplate {
                title,
                content: &content,
            }
            .render()?;
            Ok(Html(page).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pagination, SearchQuery};
    use crate::services::ResultSummary;

    fn search_page(current: u32, items_total: u64) -> SearchPage {
        let query = SearchQuery {
            keyword: Some("food pantries".to_string()),
            location: Some("Redwood City".to_string()),
            radius: Some(" ".to_string()),
            page: Some(current.to_string()),
        };
        let pagination = Pagination {
            current,
            per_page: 30,
            items_current: 30,
            items_total,
        };
        SearchPage {
            summary: ResultSummary::new(&pagination, &query),
            link_params: LinkParams::new(&query),
            query,
            terminology: None,
            organizations: Vec::new(),
            pagination,
            substituted_keyword: None,
        }
    }

    #[test]
    fn test_page_links_keep_search() {
        let page = search_page(2, 61);
        let body = ResultsBodyTemplate::new(&page);

        assert_eq!(body.total_pages, 3);
        assert_eq!(
            body.prev_href.as_deref(),
            Some("/organizations?keyword=food%20pantries&location=Redwood%20City&page=1")
        );
        assert_eq!(
            body.next_href.as_deref(),
            Some("/organizations?keyword=food%20pantries&location=Redwood%20City&page=3")
        );
    }

    #[test]
    fn test_single_page_has_no_links() {
        let page = search_page(1, 12);
        let body = ResultsBodyTemplate::new(&page);
        assert!(body.prev_href.is_none());
        assert!(body.next_href.is_none());
    }
}
