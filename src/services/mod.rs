//! Search and detail pipelines.
//!
//! Everything here is independent of the HTTP layer so the CLI and the
//! web handlers share one implementation.

pub mod category;
pub mod detail;
pub mod fallback;
pub mod map_data;
pub mod return_url;
pub mod search;
pub mod summary;
pub mod terms_cache;

pub use category::TopLevelTerms;
pub use detail::{load_detail, DetailPage};
pub use fallback::FallbackTable;
pub use map_data::build_map_data;
pub use return_url::search_results_url;
pub use search::{run_search, SearchPage};
pub use summary::{LinkParams, ResultSummary};
pub use terms_cache::ServiceTermsCache;

#[cfg(test)]
pub(crate) mod test_support;
