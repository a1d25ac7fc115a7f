//! Free-text place query with optional search hints

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A free-text endpoint description plus the hints used to resolve it
///
/// Queries are built once and only read afterwards; every geocoding stage
/// derives its own request from the same query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceQuery {
    /// Raw endpoint text as it appeared in the input row
    text: String,
    /// ISO 3166-1 country code used to restrict results (e.g. "IN")
    #[serde(skip_serializing_if = "Option::is_none")]
    country_bias: Option<String>,
    /// City or region name appended to or paired with the text
    #[serde(skip_serializing_if = "Option::is_none")]
    city_hint: Option<String>,
    /// Point used to bias results and pick the nearest candidate
    #[serde(skip_serializing_if = "Option::is_none")]
    focus_point: Option<Coordinate>,
}

impl PlaceQuery {
    /// Create a query for the given text without hints
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            country_bias: None,
            city_hint: None,
            focus_point: None,
        }
    }

    /// Restrict results to a country; blank codes are ignored
    #[must_use]
    pub fn with_country_bias(mut self, country: impl Into<String>) -> Self {
        self.country_bias = non_blank(country.into());
        self
    }

    /// Attach a city hint; blank hints are ignored
    #[must_use]
    pub fn with_city_hint(mut self, hint: impl Into<String>) -> Self {
        self.city_hint = non_blank(hint.into());
        self
    }

    /// Attach a focus point
    #[must_use]
    pub const fn with_focus_point(mut self, focus: Coordinate) -> Self {
        self.focus_point = Some(focus);
        self
    }

    /// The raw query text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Country restriction, if any
    #[must_use]
    pub fn country_bias(&self) -> Option<&str> {
        self.country_bias.as_deref()
    }

    /// City hint, if any
    #[must_use]
    pub fn city_hint(&self) -> Option<&str> {
        self.city_hint.as_deref()
    }

    /// Focus point, if any
    #[must_use]
    pub const fn focus_point(&self) -> Option<Coordinate> {
        self.focus_point
    }

    /// Whether the query text is empty after trimming
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
