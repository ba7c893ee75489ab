//! Organization data backends.
//!
//! The directory front end never stores organizations itself; every lookup
//! goes through an [`OrganizationBackend`]. Two implementations exist:
//! - `HttpBackend`: the Ohana-style REST API
//! - `InMemoryBackend`: a fixtures file, for offline use

mod http;
mod memory;
mod terminology;

pub use http::HttpBackend;
pub use memory::{Fixtures, InMemoryBackend};
pub use terminology::TerminologyCatalog;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Settings;
use crate::models::{Organization, SearchQuery, SearchResult, ServiceTerm, TerminologyBox};

/// Errors raised by a backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Backend returned HTTP {0}")]
    Status(u16),

    #[error("Organization not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Backend configuration error: {0}")]
    Config(String),
}

/// Source of organization data.
#[async_trait]
pub trait OrganizationBackend: Send + Sync {
    /// Short name reported by the status endpoint.
    fn kind(&self) -> &str;

    /// Run a search. Empty content is a normal result.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, BackendError>;

    /// Fetch one organization by id.
    async fn get(&self, id: &str) -> Result<Organization, BackendError>;

    /// Organizations near the given one.
    async fn nearby(&self, id: &str) -> Result<Vec<Organization>, BackendError>;

    /// Explanatory box for a keyword, if one exists.
    async fn terminology(&self, keyword: Option<&str>) -> Option<TerminologyBox>;

    /// Top-level service terms used for category tags.
    async fn service_terms(&self) -> Result<Vec<ServiceTerm>, BackendError>;
}

/// Build the backend selected by `settings`: the in-memory backend when a
/// fixtures file is configured, the HTTP API otherwise.
pub fn build_backend(settings: &Settings) -> Result<Arc<dyn OrganizationBackend>, BackendError> {
    let terminology = match settings.terminology {
        Some(ref path) => TerminologyCatalog::load(path)?,
        None => TerminologyCatalog::bundled()?,
    };
    tracing::debug!("Loaded {} terminology entries", terminology.len());

    match settings.fixtures {
        Some(ref path) => {
            let fixtures = Fixtures::load(path)?;
            tracing::info!(
                "Serving {} organizations from {}",
                fixtures.organizations.len(),
                path.display()
            );
            Ok(Arc::new(InMemoryBackend::new(fixtures, terminology)))
        }
        None => {
            let backend = HttpBackend::new(settings, terminology)?;
            tracing::info!("Using directory API at {}", backend.endpoint());
            Ok(Arc::new(backend))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_backend_selects_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.json");
        std::fs::write(&path, r#"{"organizations": []}"#).unwrap();

        let settings = Settings {
            fixtures: Some(path),
            ..Settings::default()
        };
        assert_eq!(build_backend(&settings).unwrap().kind(), "memory");
        assert_eq!(build_backend(&Settings::default()).unwrap().kind(), "http");
    }

    #[test]
    fn test_build_backend_missing_terminology_fails() {
        let settings = Settings {
            terminology: Some("/nonexistent/terminology.toml".into()),
            ..Settings::default()
        };
        assert!(matches!(build_backend(&settings), Err(BackendError::Config(_))));
    }
}
