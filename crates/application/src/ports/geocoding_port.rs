//! Geocoding service port
//!
//! Defines the interface for turning free-text place descriptions into
//! candidate coordinates. Adapters in the infrastructure layer implement
//! this port using a Pelias-style geocoding API.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Layers requested by the direct search stages
pub const SEARCH_LAYERS: &str = "venue,address,street,locality";

/// One geocoding backend call
///
/// Every cascade stage is described by its own value; nothing is shared or
/// mutated between stages.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeRequest {
    /// Fuzzy free-text search
    Search {
        /// Text to search for
        text: String,
        /// Restrict results to these layers (comma separated)
        layers: Option<String>,
        /// ISO country code used as a boundary
        country: Option<String>,
        /// Bias results toward this point
        focus: Option<Coordinate>,
        /// Maximum number of candidates
        size: u8,
    },
    /// Structured search with separate address and locality fields
    Structured {
        /// Street address or place name
        address: String,
        /// City or locality
        locality: String,
        /// ISO country code used as a boundary
        country: Option<String>,
        /// Maximum number of candidates
        size: u8,
    },
    /// Prefix/autocomplete search
    Autocomplete {
        /// Partial text
        text: String,
        /// ISO country code used as a boundary
        country: Option<String>,
        /// Bias results toward this point
        focus: Option<Coordinate>,
        /// Maximum number of candidates
        size: u8,
    },
}

impl GeocodeRequest {
    /// Endpoint-agnostic name of the request kind, for logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Structured { .. } => "structured",
            Self::Autocomplete { .. } => "autocomplete",
        }
    }

    /// Maximum number of candidates requested
    #[must_use]
    pub const fn size(&self) -> u8 {
        match self {
            Self::Search { size, .. }
            | Self::Structured { size, .. }
            | Self::Autocomplete { size, .. } => *size,
        }
    }
}

/// A candidate location returned by the geocoding backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    /// Position of the candidate
    pub coordinate: Coordinate,
    /// Human-readable label, if provided
    pub label: Option<String>,
    /// Backend layer (venue, address, street, locality, ...)
    pub layer: Option<String>,
    /// Raw feature properties
    #[serde(default)]
    pub properties: serde_json::Value,
}

impl GeocodeCandidate {
    /// Create a candidate with no metadata
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            label: None,
            layer: None,
            properties: serde_json::Value::Null,
        }
    }

    /// Attach a label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Execute one geocoding request and return its candidates in backend order
    ///
    /// An empty vector means the backend answered but found nothing.
    async fn fetch_candidates(
        &self,
        request: &GeocodeRequest,
    ) -> Result<Vec<GeocodeCandidate>, ApplicationError>;
}
