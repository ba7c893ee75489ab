//! In-memory backend serving a fixed set of organizations.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use super::{BackendError, OrganizationBackend, TerminologyCatalog};
use crate::models::{
    Organization, Pagination, SearchQuery, SearchResult, ServiceTerm, TerminologyBox,
};

const PER_PAGE: u32 = 30;
const NEARBY_LIMIT: usize = 10;

/// Contents of a fixtures file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub service_terms: Vec<ServiceTerm>,
}

impl Fixtures {
    pub fn load(path: &Path) -> Result<Self, BackendError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BackendError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| BackendError::Config(format!("invalid fixtures file: {}", e)))
    }
}

pub struct InMemoryBackend {
    organizations: Vec<Organization>,
    service_terms: Vec<ServiceTerm>,
    terminology: TerminologyCatalog,
}

impl InMemoryBackend {
    pub fn new(fixtures: Fixtures, terminology: TerminologyCatalog) -> Self {
        Self {
            organizations: fixtures.organizations,
            service_terms: fixtures.service_terms,
            terminology,
        }
    }

    fn matches(org: &Organization, query: &SearchQuery) -> bool {
        if let Some(keyword) = query.keyword() {
            let keyword = keyword.trim().to_lowercase();
            let in_name = org.name.to_lowercase().contains(&keyword);
            let in_keywords = org
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(&keyword));
            if !in_name && !in_keywords {
                return false;
            }
        }
        if let Some(location) = query.location() {
            let location = location.trim().to_lowercase();
            let found = org.address.as_ref().is_some_and(|a| {
                a.city.to_lowercase().contains(&location) || a.zip == location
            });
            if !found {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl OrganizationBackend for InMemoryBackend {
    fn kind(&self) -> &str {
        "memory"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, BackendError> {
        let hits: Vec<&Organization> = self
            .organizations
            .iter()
            .filter(|org| Self::matches(org, query))
            .collect();

        let current = query
            .page()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1);
        let start = (current as usize - 1) * PER_PAGE as usize;
        let content: Vec<Organization> = hits
            .iter()
            .skip(start)
            .take(PER_PAGE as usize)
            .map(|org| (*org).clone())
            .collect();

        Ok(SearchResult {
            pagination: Pagination {
                current,
                per_page: PER_PAGE,
                items_current: content.len() as u64,
                items_total: hits.len() as u64,
            },
            content,
        })
    }

    async fn get(&self, id: &str) -> Result<Organization, BackendError> {
        self.organizations
            .iter()
            .find(|org| org.id == id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(id.to_string()))
    }

    /// Other organizations, closest first; those without coordinates last.
    async fn nearby(&self, id: &str) -> Result<Vec<Organization>, BackendError> {
        let origin = self.get(id).await?;
        let mut others: Vec<(Option<f64>, &Organization)> = self
            .organizations
            .iter()
            .filter(|org| org.id != id)
            .map(|org| {
                let distance = match (origin.coordinates, org.coordinates) {
                    (Some(a), Some(b)) => Some(a.distance_miles(&b)),
                    _ => None,
                };
                (distance, org)
            })
            .collect();

        others.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        Ok(others
            .into_iter()
            .take(NEARBY_LIMIT)
            .map(|(_, org)| org.clone())
            .collect())
    }

    async fn terminology(&self, keyword: Option<&str>) -> Option<TerminologyBox> {
        self.terminology.lookup(keyword)
    }

    async fn service_terms(&self) -> Result<Vec<ServiceTerm>, BackendError> {
        Ok(self.service_terms.clone())
    }
}
