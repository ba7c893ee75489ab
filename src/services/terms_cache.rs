//! In-memory cache for the top-level service terms.
//!
//! Terms are fetched from the backend on first use. Without a TTL they are
//! kept for the life of the process.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use super::TopLevelTerms;
use crate::backend::{BackendError, OrganizationBackend};

/// A cached value with optional expiration time.
struct CacheEntry<T> {
    value: T,
    expires_at: Option<Instant>,
}

impl<T: Clone> CacheEntry<T> {
    fn new(value: T, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    fn get(&self) -> Option<T> {
        if self.is_expired() {
            None
        } else {
            Some(self.value.clone())
        }
    }
}

pub struct ServiceTermsCache {
    terms: RwLock<Option<CacheEntry<Arc<TopLevelTerms>>>>,
    ttl: Option<Duration>,
}

impl ServiceTermsCache {
    /// Cache that never expires.
    pub fn new() -> Self {
        Self {
            terms: RwLock::new(None),
            ttl: None,
        }
    }

    /// Cache that refetches after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            terms: RwLock::new(None),
            ttl: Some(ttl),
        }
    }

    /// Cached terms, or None if expired/missing.
    pub fn get(&self) -> Option<Arc<TopLevelTerms>> {
        self.terms
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().and_then(|e| e.get()))
    }

    pub fn set(&self, terms: TopLevelTerms) -> Arc<TopLevelTerms> {
        let terms = Arc::new(terms);
        if let Ok(mut guard) = self.terms.write() {
            *guard = Some(CacheEntry::new(terms.clone(), self.ttl));
        }
        terms
    }

    /// Cached terms, loading them from `backend` when needed.
    pub async fn get_or_load(
        &self,
        backend: &dyn OrganizationBackend,
    ) -> Result<Arc<TopLevelTerms>, BackendError> {
        if let Some(terms) = self.get() {
            return Ok(terms);
        }

        let fetched = backend.service_terms().await?;
        tracing::debug!("Loaded {} top-level service terms", fetched.len());
        Ok(self.set(TopLevelTerms::new(fetched.iter().map(|t| t.name.as_str()))))
    }

    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.terms.write() {
            *guard = None;
        }
    }
}

impl Default for ServiceTermsCache {
    fn default() -> Self {
        Self::new()
    }
}
