//! Organization records as returned by the directory API.

use serde::{Deserialize, Serialize};

use crate::utils::is_blank;

/// Geographic position of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Great-circle distance in miles.
    pub fn distance_miles(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_MILES: f64 = 3958.8;

        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_MILES * a.sqrt().asin()
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
}

impl Address {
    /// Single-line form, skipping empty parts.
    pub fn one_line(&self) -> String {
        let state_zip = [self.state.as_str(), self.zip.as_str()]
            .iter()
            .filter(|s| !is_blank(Some(**s)))
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        [self.street.as_str(), self.city.as_str(), state_zip.as_str()]
            .iter()
            .filter(|s| !is_blank(Some(**s)))
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A directory organization.
///
/// `category` is never read from upstream; it is filled in by the
/// category tagger after a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, skip_deserializing)]
    pub category: Vec<String>,
}

impl Organization {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            keywords: Vec::new(),
            coordinates: None,
            address: None,
            phones: Vec::new(),
            website: None,
            category: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lng });
        self
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// A top-level service term (e.g. "Food", "Housing").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTerm {
    pub name: String,
}

/// Explanatory box shown above results for a recognized keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminologyBox {
    /// Lowercased keyword the box is keyed by.
    #[serde(default)]
    pub term: String,
    pub title: String,
    pub body: String,
}

/// One element of the map data sequence handed to the map script.
///
/// Markers come first; the sequence always ends with exactly one summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MapEntry {
    Marker {
        id: String,
        name: String,
        coordinates: Coordinates,
    },
    Summary {
        count: usize,
        total: usize,
    },
}
