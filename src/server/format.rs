//! Response format selection.

use axum::http::{header, HeaderMap};
use serde::Deserialize;

/// How a view is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Full page.
    Html,
    /// Body markup wrapped as `{content, action}`.
    Json,
}

/// The `format` query parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatParams {
    pub format: Option<String>,
}

impl Format {
    /// `?format=` wins. Otherwise JSON when the Accept header ranks
    /// `application/json` above `text/html`, by quality and then by order.
    /// Entries with `q=0` are ignored.
    pub fn negotiate(headers: &HeaderMap, requested: Option<&str>) -> Self {
        match requested.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => return Format::Json,
            Some("html") => return Format::Html,
            _ => {}
        }

        let accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        match (
            preference(accept, "application/json"),
            preference(accept, "text/html"),
        ) {
            (Some((json_q, json_pos)), Some((html_q, html_pos)))
                if json_q > html_q || (json_q == html_q && json_pos < html_pos) =>
            {
                Format::Json
            }
            (Some(_), None) => Format::Json,
            _ => Format::Html,
        }
    }
}

/// Quality and position of `media_type` in an Accept header, if it is
/// listed with a non-zero quality.
fn preference(accept: &str, media_type: &str) -> Option<(f32, usize)> {
    accept.split(',').enumerate().find_map(|(position, entry)| {
        let mut parts = entry.split(';');
        let media = parts.next()?.trim();
        if !media.eq_ignore_ascii_case(media_type) {
            return None;
        }
        let quality = parts
            .filter_map(|p| p.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        (quality > 0.0).then_some((quality, position))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_query_param_wins() {
        let headers = accept("application/json");
        assert_eq!(Format::negotiate(&headers, Some("html")), Format::Html);
        assert_eq!(Format::negotiate(&HeaderMap::new(), Some("JSON")), Format::Json);
    }

    #[test]
    fn test_accept_header() {
        assert_eq!(
            Format::negotiate(&accept("application/json, text/javascript, */*; q=0.01"), None),
            Format::Json
        );
        assert_eq!(
            Format::negotiate(
                &accept("text/html,application/xhtml+xml,application/json;q=0.9"),
                None
            ),
            Format::Html
        );
        assert_eq!(Format::negotiate(&HeaderMap::new(), None), Format::Html);
        assert_eq!(Format::negotiate(&accept("*/*"), Some("xml")), Format::Html);
    }

    #[test]
    fn test_accept_quality() {
        assert_eq!(
            Format::negotiate(&accept("application/json;q=0"), None),
            Format::Html
        );
        assert_eq!(
            Format::negotiate(&accept("application/json; q=0, text/html"), None),
            Format::Html
        );
        assert_eq!(
            Format::negotiate(&accept("text/html;q=0.5, application/json"), None),
            Format::Json
        );
    }
}
