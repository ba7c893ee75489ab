//! The search pipeline behind the results page.

use serde::Serialize;
use tracing::info;

use super::{FallbackTable, LinkParams, ResultSummary, ServiceTermsCache};
use crate::backend::{BackendError, OrganizationBackend};
use crate::models::{Organization, Pagination, SearchQuery, TerminologyBox};

/// Everything the results view needs.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    /// The query as received, before any keyword substitution.
    pub query: SearchQuery,
    pub terminology: Option<TerminologyBox>,
    pub organizations: Vec<Organization>,
    pub pagination: Pagination,
    pub summary: ResultSummary,
    pub link_params: LinkParams,
    /// Replacement keyword actually searched, when the fallback table was used.
    pub substituted_keyword: Option<String>,
}

/// Run a search.
///
/// When the first search comes back empty and its keyword is in the
/// fallback table, the search is repeated once with the replacement
/// keyword and that second result replaces the first entirely.
pub async fn run_search(
    backend: &dyn OrganizationBackend,
    fallbacks: &FallbackTable,
    terms: &ServiceTermsCache,
    query: &SearchQuery,
) -> Result<SearchPage, BackendError> {
    let terminology = backend.terminology(query.keyword()).await;

    let mut result = backend.search(query).await?;
    let mut substituted_keyword = None;

    if result.content.is_empty() {
        if let Some(replacement) = query.keyword().and_then(|k| fallbacks.lookup(k)) {
            info!(
                "No results for '{}', retrying with '{}'",
                query.keyword().unwrap_or_default(),
                replacement
            );
            result = backend.search(&query.with_keyword(replacement)).await?;
            substituted_keyword = Some(replacement.to_string());
        }
    }

    let mut organizations = result.content;
    if !organizations.is_empty() {
        let top_level = terms.get_or_load(backend).await?;
        for org in organizations.iter_mut() {
            top_level.tag(org);
        }
    }

    Ok(SearchPage {
        summary: ResultSummary::new(&result.pagination, query),
        link_params: LinkParams::new(query),
        query: query.clone(),
        terminology,
        organizations,
        pagination: result.pagination,
        substituted_keyword,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{fixture_backend, RecordingBackend};

    fn keyword(k: &str) -> SearchQuery {
        SearchQuery {
            keyword: Some(k.to_string()),
            location: Some("Redwood City".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fallback_resubmits_once_with_replacement() {
        let backend = RecordingBackend::new(fixture_backend());
        let fallbacks = FallbackTable::bundled().unwrap();
        let terms = ServiceTermsCache::new();

        let page = run_search(&backend, &fallbacks, &terms, &keyword("Animal Welfare"))
            .await
            .unwrap();

        let searched = backend.searched_keywords();
        assert_eq!(
            searched,
            vec![
                Some("Animal Welfare".to_string()),
                Some("protective services for animals".to_string())
            ]
        );
        assert_eq!(page.organizations.len(), 1);
        assert_eq!(page.organizations[0].id, "peninsula-humane");
        assert_eq!(
            page.substituted_keyword.as_deref(),
            Some("protective services for animals")
        );
        // display echoes what the user typed
        assert_eq!(page.summary.keyword.as_deref(), Some("Animal Welfare"));
        assert_eq!(page.link_params.keyword.as_deref(), Some("Animal Welfare"));
        assert_eq!(page.summary.count, 1);
    }

    #[tokio::test]
    async fn test_fallback_keeps_other_params() {
        let backend = RecordingBackend::new(fixture_backend());
        let fallbacks = FallbackTable::bundled().unwrap();
        let terms = ServiceTermsCache::new();
        let mut query = keyword("free meals");
        query.radius = Some("5".to_string());
        query.page = Some("1".to_string());

        run_search(&backend, &fallbacks, &terms, &query).await.unwrap();

        let searches = backend.searches();
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[1].keyword(), Some("food pantries"));
        assert_eq!(searches[1].location(), Some("Redwood City"));
        assert_eq!(searches[1].radius(), Some("5"));
        assert_eq!(searches[1].page(), Some("1"));
    }

    #[tokio::test]
    async fn test_every_fallback_keyword_triggers_one_retry() {
        let fallbacks = FallbackTable::bundled().unwrap();
        for (phrase, replacement) in fallbacks.entries() {
            let backend = RecordingBackend::empty();
            let terms = ServiceTermsCache::new();
            let upper = phrase.to_uppercase();

            let page = run_search(&backend, &fallbacks, &terms, &keyword(&upper))
                .await
                .unwrap();

            assert_eq!(
                backend.searched_keywords(),
                vec![Some(upper.clone()), Some(replacement.to_string())],
                "phrase {phrase}"
            );
            assert!(page.organizations.is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_keyword_not_resubmitted() {
        let fallbacks = FallbackTable::bundled().unwrap();
        for k in ["garden club", "animal", "animal welfare program", ""] {
            let backend = RecordingBackend::empty();
            let terms = ServiceTermsCache::new();
            let page = run_search(&backend, &fallbacks, &terms, &keyword(k))
                .await
                .unwrap();
            assert_eq!(backend.searches().len(), 1, "keyword {k:?}");
            assert!(page.substituted_keyword.is_none());
        }

        let backend = RecordingBackend::empty();
        let terms = ServiceTermsCache::new();
        run_search(&backend, &fallbacks, &terms, &SearchQuery::default())
            .await
            .unwrap();
        assert_eq!(backend.searches().len(), 1);
    }

    #[tokio::test]
    async fn test_non_empty_result_not_resubmitted() {
        let backend = RecordingBackend::new(fixture_backend());
        let fallbacks = FallbackTable::from_pairs([("food pantries", "something else")]);
        let terms = ServiceTermsCache::new();

        let page = run_search(&backend, &fallbacks, &terms, &keyword("food pantries"))
            .await
            .unwrap();

        assert_eq!(backend.searches().len(), 1);
        assert!(!page.organizations.is_empty());
    }

    #[tokio::test]
    async fn test_results_tagged_with_categories() {
        let backend = RecordingBackend::new(fixture_backend());
        let fallbacks = FallbackTable::default();
        let terms = ServiceTermsCache::new();

        let page = run_search(&backend, &fallbacks, &terms, &keyword("garden"))
            .await
            .unwrap();

        let org = &page.organizations[0];
        assert_eq!(org.id, "samaritan-house");
        assert_eq!(org.category, vec!["Food", "Housing"]);
    }

    #[tokio::test]
    async fn test_service_terms_skipped_for_empty_results() {
        let backend = RecordingBackend::empty();
        let terms = ServiceTermsCache::new();
        run_search(&backend, &FallbackTable::default(), &terms, &keyword("nothing"))
            .await
            .unwrap();
        assert_eq!(backend.service_term_calls(), 0);
        assert!(terms.get().is_none());
    }

    #[tokio::test]
    async fn test_terminology_uses_original_keyword() {
        let backend = RecordingBackend::new(fixture_backend());
        let page = run_search(
            &backend,
            &FallbackTable::bundled().unwrap(),
            &ServiceTermsCache::new(),
            &keyword("SFMNP"),
        )
        .await
        .unwrap();

        assert_eq!(page.terminology.map(|t| t.term).as_deref(), Some("sfmnp"));
        assert_eq!(page.substituted_keyword.as_deref(), Some("market"));
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let backend = RecordingBackend::new(fixture_backend()).failing_search();
        let err = run_search(
            &backend,
            &FallbackTable::default(),
            &ServiceTermsCache::new(),
            &keyword("food"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, BackendError::Connection(_)));
    }
}
