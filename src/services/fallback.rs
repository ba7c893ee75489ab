//! Keyword substitutions for searches that return nothing.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::backend::BackendError;

const BUNDLED_FALLBACKS: &str = include_str!("../../data/fallback_keywords.toml");

#[derive(Debug, Deserialize)]
struct FallbackFile {
    #[serde(default)]
    fallbacks: HashMap<String, String>,
}

/// Immutable map from a lowercased search phrase to its replacement.
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    entries: HashMap<String, String>,
}

impl FallbackTable {
    /// Table shipped with the application.
    pub fn bundled() -> Result<Self, BackendError> {
        Self::from_toml(BUNDLED_FALLBACKS)
    }

    pub fn from_toml(contents: &str) -> Result<Self, BackendError> {
        let file: FallbackFile = toml::from_str(contents)
            .map_err(|e| BackendError::Config(format!("invalid fallback table: {}", e)))?;
        Ok(Self::from_pairs(file.fallbacks))
    }

    pub fn load(path: &Path) -> Result<Self, BackendError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BackendError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { entries }
    }

    /// Replacement for `keyword`, matched exactly after lowercasing.
    pub fn lookup(&self, keyword: &str) -> Option<&str> {
        self.entries.get(&keyword.to_lowercase()).map(String::as_str)
    }

    /// Entries sorted by phrase.
    pub fn entries(&self) -> BTreeMap<&str, &str> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
