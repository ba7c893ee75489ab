//! Error kinds surfaced by the web handlers and their HTTP mapping.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::template_structs::{ErrorTemplate, LayoutTemplate};
use super::Format;
use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The directory service is unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BackendUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::OrganizationNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::BackendUnavailable(_) => "Service Unavailable",
            AppError::OrganizationNotFound(_) => "Not Found",
            AppError::InvalidParameters(_) => "Bad Request",
            AppError::Render(_) => "Error",
        }
    }

    /// Attach the response format and action of the failing request.
    pub fn respond(self, format: Format, action: &'static str) -> ErrorResponse {
        ErrorResponse {
            error: self,
            format,
            action,
        }
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound(id) => AppError::OrganizationNotFound(id),
            other => AppError::BackendUnavailable(other.to_string()),
        }
    }
}

/// An [`AppError`] ready to be sent in the format the client asked for.
#[derive(Debug)]
pub struct ErrorResponse {
    pub error: AppError,
    pub format: Format,
    pub action: &'static str,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        if status.is_server_error() {
            tracing::error!("{} failed: {}", self.action, self.error);
        } else {
            tracing::debug!("{} rejected: {}", self.action, self.error);
        }

        let message = self.error.to_string();
        match self.format {
            Format::Json => (
                status,
                Json(serde_json::json!({ "error": message, "action": self.action })),
            )
                .into_response(),
            Format::Html => {
                let title = self.error.title();
                let page = ErrorTemplate {
                    title,
                    message: &message,
                }
                .render()
                .and_then(|content| {
                    LayoutTemplate {
                        title,
                        content: &content,
                    }
                    .render()
                });
                match page {
                    Ok(html) => (status, Html(html)).into_response(),
                    Err(_) => (status, message).into_response(),
                }
            }
        }
    }
}
