//! The pipeline behind the organization detail page.

use serde::Serialize;
use tracing::warn;

use super::{build_map_data, search_results_url};
use crate::backend::{BackendError, OrganizationBackend};
use crate::models::{MapEntry, Organization, SearchQuery};

#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub organization: Organization,
    /// Absent when the organization has no coordinates or nearby lookup failed.
    pub map_data: Option<Vec<MapEntry>>,
    pub search_results_url: String,
}

/// Load one organization, its map data, and the link back to the search
/// the user came from.
///
/// A failed nearby lookup is logged and leaves the map out; it never
/// fails the page.
pub async fn load_detail(
    backend: &dyn OrganizationBackend,
    id: &str,
    search: &SearchQuery,
) -> Result<DetailPage, BackendError> {
    let organization = backend.get(id).await?;

    let map_data = if organization.has_coordinates() {
        match backend.nearby(id).await {
            Ok(nearby) => build_map_data(&organization, &nearby),
            Err(e) => {
                warn!("Nearby lookup failed for {}: {}", id, e);
                None
            }
        }
    } else {
        None
    };

    Ok(DetailPage {
        search_results_url: search_results_url(id, search),
        organization,
        map_data,
    })
}
