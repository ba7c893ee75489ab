//! Data models for the organization directory.

mod organization;
mod search;

pub use organization::{Address, Coordinates, MapEntry, Organization, ServiceTerm, TerminologyBox};
pub use search::{Pagination, SearchQuery, SearchResult};
