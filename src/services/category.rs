//! Category tags derived from an organization's keywords.

use std::collections::HashSet;

use crate::models::Organization;

/// Lowercased set of top-level service term names.
#[derive(Debug, Clone, Default)]
pub struct TopLevelTerms {
    names: HashSet<String>,
}

impl TopLevelTerms {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Keywords that name a top-level term (case-insensitive), with
    /// duplicates removed, sorted ascending. Original spelling is kept.
    pub fn categories(&self, keywords: &[String]) -> Vec<String> {
        let mut category: Vec<String> = keywords
            .iter()
            .filter(|k| self.names.contains(&k.to_lowercase()))
            .cloned()
            .collect();
        category.sort();
        category.dedup();
        category
    }

    pub fn tag(&self, org: &mut Organization) {
        org.category = self.categories(&org.keywords);
    }
}
