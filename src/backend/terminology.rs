//! Terminology boxes keyed by search keyword.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::BackendError;
use crate::models::TerminologyBox;
use crate::utils::non_blank;

const BUNDLED_TERMINOLOGY: &str = include_str!("../../data/terminology.toml");

#[derive(Debug, Deserialize)]
struct TerminologyFile {
    #[serde(default)]
    terms: HashMap<String, TermEntry>,
}

#[derive(Debug, Deserialize)]
struct TermEntry {
    title: String,
    body: String,
}

/// Read-only catalog of terminology boxes.
#[derive(Debug, Clone, Default)]
pub struct TerminologyCatalog {
    terms: HashMap<String, TerminologyBox>,
}

impl TerminologyCatalog {
    /// Catalog shipped with the application.
    pub fn bundled() -> Result<Self, BackendError> {
        Self::from_toml(BUNDLED_TERMINOLOGY)
    }

    pub fn from_toml(contents: &str) -> Result<Self, BackendError> {
        let file: TerminologyFile = toml::from_str(contents)
            .map_err(|e| BackendError::Config(format!("invalid terminology file: {}", e)))?;

        let terms = file
            .terms
            .into_iter()
            .map(|(key, entry)| {
                let term = key.trim().to_lowercase();
                let boxed = TerminologyBox {
                    term: term.clone(),
                    title: entry.title,
                    body: entry.body,
                };
                (term, boxed)
            })
            .collect();

        Ok(Self { terms })
    }

    pub fn load(path: &Path) -> Result<Self, BackendError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BackendError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn lookup(&self, keyword: Option<&str>) -> Option<TerminologyBox> {
        let keyword = non_blank(keyword)?;
        self.terms.get(&keyword.trim().to_lowercase()).cloned()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
