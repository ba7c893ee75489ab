//! Display and link metadata for a results page.

use serde::Serialize;

use crate::models::{Pagination, SearchQuery};

/// Counts and the search terms as the user typed them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub count: u64,
    pub total_count: u64,
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub radius: Option<String>,
}

impl ResultSummary {
    pub fn new(pagination: &Pagination, query: &SearchQuery) -> Self {
        Self {
            count: pagination.items_current,
            total_count: pagination.items_total,
            keyword: query.keyword().map(str::to_string),
            location: query.location().map(str::to_string),
            radius: query.radius().map(str::to_string),
        }
    }

    /// e.g. `3 of 42 results matching 'food' within 5 miles of 'Redwood City'`
    pub fn headline(&self) -> String {
        let mut line = if self.total_count == 0 {
            "No results".to_string()
        } else {
            let noun = if self.total_count == 1 { "result" } else { "results" };
            format!("{} of {} {}", self.count, self.total_count, noun)
        };

        if let Some(ref keyword) = self.keyword {
            line.push_str(&format!(" matching '{}'", keyword));
        }
        match (&self.location, &self.radius) {
            (Some(location), Some(radius)) => {
                line.push_str(&format!(" within {} miles of '{}'", radius, location))
            }
            (Some(location), None) => line.push_str(&format!(" near '{}'", location)),
            _ => {}
        }
        line
    }
}

/// Search state carried on result links so the detail page can return to
/// the same results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub page: Option<String>,
    pub radius: Option<String>,
}

impl LinkParams {
    pub fn new(query: &SearchQuery) -> Self {
        Self {
            keyword: query.keyword().map(str::to_string),
            location: query.location().map(str::to_string),
            page: query.page().map(str::to_string),
            radius: query.radius().map(str::to_string),
        }
    }

    /// `?keyword=..&location=..&page=..&radius=..`, blank ones left out.
    /// Empty when nothing is set.
    pub fn query_string(&self) -> String {
        let parts: Vec<String> = [
            ("keyword", &self.keyword),
            ("location", &self.location),
            ("page", &self.page),
            ("radius", &self.radius),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|v| format!("{}={}", name, urlencoding::encode(v)))
        })
        .collect();

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }

    pub fn detail_href(&self, id: &str) -> String {
        format!(
            "/organizations/{}{}",
            urlencoding::encode(id),
            self.query_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> SearchQuery {
        SearchQuery {
            keyword: Some("food".to_string()),
            location: Some("Redwood City".to_string()),
            radius: Some("5".to_string()),
            page: Some("2".to_string()),
        }
    }

    #[test]
    fn test_headline() {
        let pagination = Pagination {
            current: 2,
            per_page: 30,
            items_current: 3,
            items_total: 42,
        };
        let summary = ResultSummary::new(&pagination, &query());
        assert_eq!(
            summary.headline(),
            "3 of 42 results matching 'food' within 5 miles of 'Redwood City'"
        );

        let bare = ResultSummary::new(&Pagination::default(), &SearchQuery::default());
        assert_eq!(bare.headline(), "No results");
    }

    #[test]
    fn test_headline_location_without_radius() {
        let q = SearchQuery {
            location: Some("94063".to_string()),
            ..Default::default()
        };
        let pagination = Pagination {
            items_current: 1,
            items_total: 1,
            ..Default::default()
        };
        assert_eq!(
            ResultSummary::new(&pagination, &q).headline(),
            "1 of 1 result near '94063'"
        );
    }

    #[test]
    fn test_link_params() {
        let params = LinkParams::new(&query());
        assert_eq!(
            params.query_string(),
            "?keyword=food&location=Redwood%20City&page=2&radius=5"
        );
        assert_eq!(
            params.detail_href("abc"),
            "/organizations/abc?keyword=food&location=Redwood%20City&page=2&radius=5"
        );
        assert_eq!(LinkParams::default().query_string(), "");
        assert_eq!(LinkParams::default().detail_href("abc"), "/organizations/abc");
    }
}
