//! Geocode resolver
//!
//! Resolves a free-text place description to a single coordinate by walking
//! an ordered cascade of geocoding requests. A stage runs only when every
//! earlier stage produced no usable candidate.

use std::{fmt, sync::Arc};

use domain::text::simplify_query;
use domain::value_objects::{Coordinate, PlaceQuery, haversine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodeCandidate, GeocodeRequest, GeocodingPort, SEARCH_LAYERS},
};

/// Default number of candidates requested per stage
pub const DEFAULT_CANDIDATE_BATCH_SIZE: u8 = 5;

/// Settings for the geocode cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocoderSettings {
    /// Candidates requested per stage
    pub candidate_batch_size: u8,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            candidate_batch_size: DEFAULT_CANDIDATE_BATCH_SIZE,
        }
    }
}

/// Cascade stages, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeStrategy {
    /// Fuzzy search with the raw text
    DirectSearch,
    /// Fuzzy search with the city hint appended
    SearchWithCityHint,
    /// Structured search with the city hint as locality
    StructuredSearch,
    /// Autocomplete with the raw text
    Autocomplete,
    /// Fuzzy search with stop phrases removed
    SimplifiedSearch,
}

impl CascadeStrategy {
    /// Short name for logs and CLI output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DirectSearch => "direct_search",
            Self::SearchWithCityHint => "search_with_city_hint",
            Self::StructuredSearch => "structured_search",
            Self::Autocomplete => "autocomplete",
            Self::SimplifiedSearch => "simplified_search",
        }
    }
}

impl fmt::Display for CascadeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single cascade stage
#[derive(Debug)]
pub enum StageOutcome {
    /// The backend returned at least one candidate
    Candidates(Vec<GeocodeCandidate>),
    /// The backend answered with nothing
    Empty,
    /// The backend call failed
    Failed(ApplicationError),
}

impl From<Result<Vec<GeocodeCandidate>, ApplicationError>> for StageOutcome {
    fn from(result: Result<Vec<GeocodeCandidate>, ApplicationError>) -> Self {
        match result {
            Ok(candidates) if candidates.is_empty() => Self::Empty,
            Ok(candidates) => Self::Candidates(candidates),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Final result of resolving a place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeocodeOutcome {
    /// A coordinate was chosen
    Found {
        /// The chosen position
        coordinate: Coordinate,
        /// The stage that produced it
        strategy: CascadeStrategy,
    },
    /// No stage produced a usable candidate
    NotFound,
}

impl GeocodeOutcome {
    /// The resolved coordinate, if any
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Found { coordinate, .. } => Some(*coordinate),
            Self::NotFound => None,
        }
    }
}

/// Pick the candidate to use from one stage
///
/// With a focus point the nearest candidate wins (the earliest on ties);
/// otherwise the backend's first candidate.
#[must_use]
pub fn choose_candidate(
    candidates: &[GeocodeCandidate],
    focus: Option<Coordinate>,
) -> Option<&GeocodeCandidate> {
    let Some(focus) = focus else {
        return candidates.first();
    };

    candidates.iter().fold(None, |best, candidate| {
        let distance = haversine(&focus, &candidate.coordinate);
        match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((candidate, distance)),
        }
    })
    .map(|(candidate, _)| candidate)
}

/// Collapse whitespace and lower-case, for comparing query variants
fn comparable(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Service resolving place descriptions through the geocoding port
pub struct GeocodeResolver {
    geocoding_port: Arc<dyn GeocodingPort>,
    settings: GeocoderSettings,
}

impl fmt::Debug for GeocodeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodeResolver")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl GeocodeResolver {
    /// Create a new resolver
    pub fn new(geocoding_port: Arc<dyn GeocodingPort>, settings: GeocoderSettings) -> Self {
        Self {
            geocoding_port,
            settings,
        }
    }

    /// The requests the cascade would issue for a query, in order
    ///
    /// Stages that do not apply (no city hint, nothing left to simplify)
    /// are omitted.
    #[must_use]
    pub fn plan(&self, query: &PlaceQuery) -> Vec<(CascadeStrategy, GeocodeRequest)> {
        let text = query.text().trim();
        if text.is_empty() {
            return Vec::new();
        }

        let size = self.settings.candidate_batch_size;
        let country = query.country_bias().map(str::to_string);
        let focus = query.focus_point();
        let search = |text: String| GeocodeRequest::Search {
            text,
            layers: Some(SEARCH_LAYERS.to_string()),
            country: country.clone(),
            focus,
            size,
        };

        let mut stages = vec![(CascadeStrategy::DirectSearch, search(text.to_string()))];

        if let Some(hint) = query.city_hint() {
            stages.push((
                CascadeStrategy::SearchWithCityHint,
                search(format!("{text}, {hint}")),
            ));
            stages.push((
                CascadeStrategy::StructuredSearch,
                GeocodeRequest::Structured {
                    address: text.to_string(),
                    locality: hint.to_string(),
                    country: country.clone(),
                    size,
                },
            ));
        }

        stages.push((
            CascadeStrategy::Autocomplete,
            GeocodeRequest::Autocomplete {
                text: text.to_string(),
                country: country.clone(),
                focus,
                size,
            },
        ));

        let simplified = simplify_query(text);
        if !simplified.is_empty() && simplified != comparable(text) {
            stages.push((CascadeStrategy::SimplifiedSearch, search(simplified)));
        }

        stages
    }

    /// Resolve a place to one coordinate
    ///
    /// Backend failures are logged and treated like an empty stage; this
    /// never returns an error.
    #[instrument(skip(self, query), fields(text = %query.text()))]
    pub async fn resolve(&self, query: &PlaceQuery) -> GeocodeOutcome {
        let stages = self.plan(query);
        if stages.is_empty() {
            debug!("Blank place text, skipping geocoding");
            return GeocodeOutcome::NotFound;
        }

        for (strategy, request) in &stages {
            match self.run_stage(*strategy, request).await {
                StageOutcome::Candidates(candidates) => {
                    if let Some(chosen) = choose_candidate(&candidates, query.focus_point()) {
                        info!(
                            strategy = %strategy,
                            coordinate = %chosen.coordinate,
                            label = chosen.label.as_deref().unwrap_or(""),
                            "Place resolved"
                        );
                        return GeocodeOutcome::Found {
                            coordinate: chosen.coordinate,
                            strategy: *strategy,
                        };
                    }
                },
                StageOutcome::Empty => {
                    debug!(strategy = %strategy, "Stage returned no candidates");
                },
                StageOutcome::Failed(e) => {
                    warn!(strategy = %strategy, error = %e, "Geocoding stage failed");
                },
            }
        }

        info!(stages = stages.len(), "Place not found");
        GeocodeOutcome::NotFound
    }

    /// Execute one stage against the port
    pub async fn run_stage(
        &self,
        strategy: CascadeStrategy,
        request: &GeocodeRequest,
    ) -> StageOutcome {
        debug!(
            strategy = %strategy,
            kind = request.kind(),
            size = request.size(),
            "Running geocoding stage"
        );
        self.geocoding_port.fetch_candidates(request).await.into()
    }
}
