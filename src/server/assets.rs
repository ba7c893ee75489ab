//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("style.css");

/// Reads the `#map-data` payload on detail pages and draws the markers.
pub const MAP_JS: &str = include_str!("map.js");
