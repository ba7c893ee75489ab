//! Web server for searching the organization directory.
//!
//! Provides:
//! - Search results (`/organizations`) with keyword fallback and category tags
//! - Organization detail (`/organizations/:id`) with nearby map data
//! - The same views as JSON-wrapped markup for in-page navigation

mod assets;
mod error;
mod format;
mod handlers;
mod routes;
mod template_structs;

pub use error::{AppError, ErrorResponse};
pub use format::Format;
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::backend::{build_backend, OrganizationBackend};
use crate::config::Settings;
use crate::services::{FallbackTable, ServiceTermsCache};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn OrganizationBackend>,
    pub fallbacks: Arc<FallbackTable>,
    pub service_terms: Arc<ServiceTermsCache>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let backend = build_backend(settings)?;
        Ok(Self::with_backend(backend, load_fallbacks(settings)?, settings))
    }

    pub fn with_backend(
        backend: Arc<dyn OrganizationBackend>,
        fallbacks: FallbackTable,
        settings: &Settings,
    ) -> Self {
        let service_terms = match settings.service_terms_ttl {
            Some(ttl) => ServiceTermsCache::with_ttl(ttl),
            None => ServiceTermsCache::new(),
        };
        Self {
            backend,
            fallbacks: Arc::new(fallbacks),
            service_terms: Arc::new(service_terms),
        }
    }
}

/// The configured fallback table, or the bundled one.
pub fn load_fallbacks(settings: &Settings) -> anyhow::Result<FallbackTable> {
    let table = match settings.fallback_keywords {
        Some(ref path) => FallbackTable::load(path)?,
        None => FallbackTable::bundled()?,
    };
    tracing::debug!("Loaded {} fallback keywords", table.len());
    Ok(table)
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
