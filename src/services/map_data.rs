//! Marker data for the detail page map.

use crate::models::{MapEntry, Organization};

/// Markers for every nearby organization with coordinates, followed by a
/// `{count, total}` summary. `None` when the primary organization has no
/// coordinates, in which case no map is drawn.
pub fn build_map_data(primary: &Organization, nearby: &[Organization]) -> Option<Vec<MapEntry>> {
    if !primary.has_coordinates() {
        return None;
    }
    Some(markers(nearby))
}

/// Marker sequence for `organizations`, always ending with the summary.
pub fn markers(organizations: &[Organization]) -> Vec<MapEntry> {
    let mut entries: Vec<MapEntry> = organizations
        .iter()
        .filter_map(|org| {
            org.coordinates.map(|coordinates| MapEntry::Marker {
                id: org.id.clone(),
                name: org.name.clone(),
                coordinates,
            })
        })
        .collect();

    entries.push(MapEntry::Summary {
        count: entries.len(),
        total: organizations.len(),
    });
    entries
}
