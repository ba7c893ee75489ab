//! Search request and result models.

use serde::{Deserialize, Serialize};

use super::Organization;
use crate::utils::non_blank;

/// Query parameters of a directory search.
///
/// All fields are optional raw strings exactly as received; blank values
/// are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub radius: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl SearchQuery {
    pub fn keyword(&self) -> Option<&str> {
        non_blank(self.keyword.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    pub fn radius(&self) -> Option<&str> {
        non_blank(self.radius.as_deref())
    }

    pub fn page(&self) -> Option<&str> {
        non_blank(self.page.as_deref())
    }

    /// Copy of this query with the keyword replaced.
    pub fn with_keyword(&self, keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..self.clone()
        }
    }

    /// Copy of this query pointing at another results page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page.to_string()),
            ..self.clone()
        }
    }

    /// Non-blank parameters as `(name, value)` pairs, in wire order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("keyword", self.keyword()),
            ("location", self.location()),
            ("radius", self.radius()),
            ("page", self.page()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// Reject a page that is not a positive integer or a radius that is
    /// not a positive number. Blank values pass.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(page) = self.page() {
            match page.trim().parse::<u32>() {
                Ok(n) if n > 0 => {}
                _ => return Err(format!("page must be a positive integer, got '{}'", page)),
            }
        }
        if let Some(radius) = self.radius() {
            match radius.trim().parse::<f64>() {
                Ok(r) if r.is_finite() && r > 0.0 => {}
                _ => return Err(format!("radius must be a positive number, got '{}'", radius)),
            }
        }
        Ok(())
    }
}

/// Paging information reported alongside search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_current")]
    pub current: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Number of items on this page.
    pub items_current: u64,
    /// Number of items across all pages.
    pub items_total: u64,
}

fn default_current() -> u32 {
    1
}

fn default_per_page() -> u32 {
    30
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: default_current(),
            per_page: default_per_page(),
            items_current: 0,
            items_total: 0,
        }
    }
}

impl Pagination {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 1;
        }
        let pages = self.items_total.div_ceil(self.per_page as u64);
        pages.max(1).min(u32::MAX as u64) as u32
    }

    pub fn prev_page(&self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.current < self.total_pages()).then(|| self.current + 1)
    }
}

/// Outcome of one backend search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub content: Vec<Organization>,
    #[serde(default)]
    pub pagination: Pagination,
}
