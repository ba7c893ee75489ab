//! HTTP request handlers for the web server.

mod organizations;
mod static_files;
mod status;

// Re-export handlers for use by the router
pub use organizations::{index, show};
pub use static_files::{serve_css, serve_js};
pub use status::api_status;
