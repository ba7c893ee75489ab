//! Backends for pipeline and handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{BackendError, Fixtures, InMemoryBackend, OrganizationBackend, TerminologyCatalog};
use crate::models::{
    Address, Organization, SearchQuery, SearchResult, ServiceTerm, TerminologyBox,
};

fn in_redwood_city(mut org: Organization) -> Organization {
    org.address = Some(Address {
        street: "1 Main St".to_string(),
        city: "Redwood City".to_string(),
        state: "CA".to_string(),
        zip: "94063".to_string(),
    });
    org
}

fn service_terms() -> Vec<ServiceTerm> {
    ["Food", "Housing", "Health"]
        .into_iter()
        .map(|name| ServiceTerm {
            name: name.to_string(),
        })
        .collect()
}

/// Four Redwood City organizations; `crisis-hotline` has no coordinates.
pub fn fixture_backend() -> InMemoryBackend {
    let organizations = vec![
        in_redwood_city(
            Organization::new("samaritan-house", "Samaritan House")
                .with_keywords(["Housing", "Food", "garden club", "Food"])
                .with_coordinates(37.4852, -122.2364),
        ),
        in_redwood_city(
            Organization::new("peninsula-humane", "Peninsula Humane Society")
                .with_keywords(["protective services for animals", "Animals"])
                .with_coordinates(37.4900, -122.2300),
        ),
        in_redwood_city(
            Organization::new("second-harvest", "Second Harvest Food Bank")
                .with_keywords(["Food", "food pantries"])
                .with_coordinates(37.4800, -122.2400),
        ),
        in_redwood_city(
            Organization::new("crisis-hotline", "Crisis Hotline").with_keywords(["Health"]),
        ),
    ];
    let terminology = TerminologyCatalog::bundled().expect("bundled terminology");
    InMemoryBackend::new(
        Fixtures {
            organizations,
            service_terms: service_terms(),
        },
        terminology,
    )
}

/// Wraps another backend and records what was asked of it.
pub struct RecordingBackend {
    inner: InMemoryBackend,
    searches: Mutex<Vec<SearchQuery>>,
    service_term_calls: AtomicUsize,
    nearby_calls: AtomicUsize,
    fail_search: bool,
    fail_nearby: bool,
}

impl RecordingBackend {
    pub fn new(inner: InMemoryBackend) -> Self {
        Self {
            inner,
            searches: Mutex::new(Vec::new()),
            service_term_calls: AtomicUsize::new(0),
            nearby_calls: AtomicUsize::new(0),
            fail_search: false,
            fail_nearby: false,
        }
    }

    /// A backend whose searches always come back empty.
    pub fn empty() -> Self {
        Self::new(InMemoryBackend::new(
            Fixtures {
                organizations: Vec::new(),
                service_terms: service_terms(),
            },
            TerminologyCatalog::default(),
        ))
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn failing_nearby(mut self) -> Self {
        self.fail_nearby = true;
        self
    }

    pub fn searches(&self) -> Vec<SearchQuery> {
        self.searches.lock().unwrap().clone()
    }

    pub fn searched_keywords(&self) -> Vec<Option<String>> {
        self.searches().into_iter().map(|q| q.keyword).collect()
    }

    pub fn service_term_calls(&self) -> usize {
        self.service_term_calls.load(Ordering::SeqCst)
    }

    pub fn nearby_calls(&self) -> usize {
        self.nearby_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrganizationBackend for RecordingBackend {
    fn kind(&self) -> &str {
        "recording"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, BackendError> {
        self.searches.lock().unwrap().push(query.clone());
        if self.fail_search {
            return Err(BackendError::Connection("connection refused".to_string()));
        }
        self.inner.search(query).await
    }

    async fn get(&self, id: &str) -> Result<Organization, BackendError> {
        self.inner.get(id).await
    }

    async fn nearby(&self, id: &str) -> Result<Vec<Organization>, BackendError> {
        self.nearby_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_nearby {
            return Err(BackendError::Status(500));
        }
        self.inner.nearby(id).await
    }

    async fn terminology(&self, keyword: Option<&str>) -> Option<TerminologyBox> {
        self.inner.terminology(keyword).await
    }

    async fn service_terms(&self) -> Result<Vec<ServiceTerm>, BackendError> {
        self.service_term_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.service_terms().await
    }
}
