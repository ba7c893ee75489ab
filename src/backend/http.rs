//! Client for the Ohana-style directory REST API.
//!
//! Endpoints (relative to the configured API endpoint):
//! - `GET /search?keyword=&location=&radius=&page=` -> `{content, pagination}`
//! - `GET /organizations/:id` -> `{content}`
//! - `GET /organizations/:id/nearby` -> `{content}`
//! - `GET /categories` -> `{content: [{name}]}`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::{BackendError, OrganizationBackend, TerminologyCatalog};
use crate::config::Settings;
use crate::models::{Organization, SearchQuery, SearchResult, ServiceTerm, TerminologyBox};

const API_TOKEN_HEADER: &str = "X-Api-Token";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    content: T,
}

/// HTTP backend.
pub struct HttpBackend {
    endpoint: String,
    api_token: Option<String>,
    client: Client,
    terminology: TerminologyCatalog,
}

impl HttpBackend {
    pub fn new(settings: &Settings, terminology: TerminologyCatalog) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| BackendError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: settings.api_endpoint.trim_end_matches('/').to_string(),
            api_token: settings.api_token.clone(),
            client,
            terminology,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get_request(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        let request = self.client.get(url);
        match self.api_token {
            Some(ref token) => request.header(API_TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Send a request and decode the JSON body. A 404 becomes
    /// `NotFound(id)` for requests about one organization, and a plain
    /// `Status(404)` for collection endpoints.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        organization_id: Option<&str>,
    ) -> Result<T, BackendError> {
        let resp = request
            .send()
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = organization_id {
                return Err(BackendError::NotFound(id.to_string()));
            }
        }
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}

#[async_trait]
impl OrganizationBackend for HttpBackend {
    fn kind(&self) -> &str {
        "http"
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResult, BackendError> {
        debug!("Searching {} with {:?}", self.endpoint, query.pairs());
        let request = self.get_request("/search").query(&query.pairs());
        self.fetch(request, None).await
    }

    async fn get(&self, id: &str) -> Result<Organization, BackendError> {
        let path = format!("/organizations/{}", urlencoding::encode(id));
        let envelope: Envelope<Organization> =
            self.fetch(self.get_request(&path), Some(id)).await?;
        Ok(envelope.content)
    }

    async fn nearby(&self, id: &str) -> Result<Vec<Organization>, BackendError> {
        let path = format!("/organizations/{}/nearby", urlencoding::encode(id));
        let envelope: Envelope<Vec<Organization>> =
            self.fetch(self.get_request(&path), Some(id)).await?;
        Ok(envelope.content)
    }

    async fn terminology(&self, keyword: Option<&str>) -> Option<TerminologyBox> {
        self.terminology.lookup(keyword)
    }

    async fn service_terms(&self) -> Result<Vec<ServiceTerm>, BackendError> {
        let envelope: Envelope<Vec<ServiceTerm>> =
            self.fetch(self.get_request("/categories"), None).await?;
        Ok(envelope.content)
    }
}
