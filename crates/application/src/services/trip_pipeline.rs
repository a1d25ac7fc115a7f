//! Trip pipeline
//!
//! Per-row orchestration: resolve both endpoints, route between them,
//! convert the distances to emissions and assemble one result per row.

use std::{fmt, sync::Arc};

use domain::entities::{EmissionEstimate, TripResult, TripRow};
use domain::text::{DEFAULT_KNOWN_CITIES, detect_city_hint, normalize_place_name, parse_coordinate};
use domain::value_objects::{Coordinate, PlaceQuery, TravelProfile};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    ports::EmissionPort,
    services::{GeocodeResolver, RouteResolver},
};

/// Per-row settings for the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Country code used to bias every geocoding request
    pub country_bias: Option<String>,
    /// Hint used when no known city appears in a row
    pub city_hint: Option<String>,
    /// City keywords detected in row text
    pub known_cities: Vec<String>,
    /// Point used to bias and disambiguate geocoding
    pub focus_point: Option<Coordinate>,
    /// Routing profile for every row
    pub profile: TravelProfile,
    /// Rows processed concurrently (at least 1)
    pub concurrency: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            country_bias: Some("IN".to_string()),
            city_hint: None,
            known_cities: DEFAULT_KNOWN_CITIES.iter().map(ToString::to_string).collect(),
            focus_point: None,
            profile: TravelProfile::default(),
            concurrency: 1,
        }
    }
}

/// Service turning input rows into trip results
pub struct TripPipeline {
    geocoder: GeocodeResolver,
    router: RouteResolver,
    emission_port: Arc<dyn EmissionPort>,
    settings: PipelineSettings,
}

impl fmt::Debug for TripPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripPipeline")
            .field("geocoder", &self.geocoder)
            .field("router", &self.router)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl TripPipeline {
    /// Create a new pipeline
    pub fn new(
        geocoder: GeocodeResolver,
        router: RouteResolver,
        emission_port: Arc<dyn EmissionPort>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            geocoder,
            router,
            emission_port,
            settings,
        }
    }

    /// The geocode resolver used for endpoints
    pub const fn geocoder(&self) -> &GeocodeResolver {
        &self.geocoder
    }

    /// The route resolver used between endpoints
    pub const fn router(&self) -> &RouteResolver {
        &self.router
    }

    /// The pipeline settings
    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Build the geocoding query for an endpoint name
    pub fn place_query(&self, text: &str, city_hint: Option<&str>) -> PlaceQuery {
        let mut query = PlaceQuery::new(normalize_place_name(text));
        if let Some(country) = &self.settings.country_bias {
            query = query.with_country_bias(country.as_str());
        }
        if let Some(hint) = city_hint {
            query = query.with_city_hint(hint);
        }
        if let Some(focus) = self.settings.focus_point {
            query = query.with_focus_point(focus);
        }
        query
    }

    /// Resolve one endpoint: an inline coordinate, or a geocoded place
    ///
    /// Inline pairs outside the valid ranges resolve to nothing.
    pub async fn locate(&self, text: &str, city_hint: Option<&str>) -> Option<Coordinate> {
        if let Some(pair) = parse_coordinate(text) {
            return match pair.to_coordinate() {
                Ok(coordinate) => {
                    debug!(%coordinate, "Endpoint given as inline coordinate");
                    Some(coordinate)
                },
                Err(e) => {
                    warn!(text, error = %e, "Inline coordinate out of range");
                    None
                },
            };
        }

        self.geocoder
            .resolve(&self.place_query(text, city_hint))
            .await
            .coordinate()
    }

    /// Process a single row; every row yields exactly one result
    #[instrument(skip(self, row), fields(origin = %row.origin, destination = %row.destination))]
    pub async fn resolve_trip(&self, row: &TripRow) -> TripResult {
        let profile = self.settings.profile;
        let city_hint = detect_city_hint(
            &row.origin,
            &row.destination,
            &self.settings.known_cities,
            self.settings.city_hint.as_deref(),
        );
        debug!(city_hint = city_hint.as_deref().unwrap_or(""), "City hint for row");

        let origin = self.locate(&row.origin, city_hint.as_deref()).await;
        let destination = self.locate(&row.destination, city_hint.as_deref()).await;

        let (Some(origin), Some(destination)) = (origin, destination) else {
            info!(
                origin_found = origin.is_some(),
                destination_found = destination.is_some(),
                "Geocoding failed"
            );
            return TripResult::geocoding_failed(row.clone(), origin, destination, profile);
        };

        let resolution = self.router.route(origin, destination, profile).await;
        if resolution.is_failure() {
            let reason = resolution.failure_reason();
            info!(%reason, "Routing failed");
            return TripResult::routing_failed(row.clone(), origin, destination, profile, reason);
        }

        let summary = resolution.summary;
        let emissions_for = |km: Option<f64>| {
            km.and_then(|km| {
                self.emission_port
                    .emissions(km, &row.vehicle_type, &row.fuel_type)
            })
        };
        let emissions = EmissionEstimate {
            short_kg: emissions_for(summary.short_distance_km),
            long_kg: emissions_for(summary.long_distance_km),
        };

        info!(
            short_km = ?summary.short_distance_km,
            long_km = ?summary.long_distance_km,
            path = ?resolution.path,
            "Trip resolved"
        );
        TripResult::completed(row.clone(), origin, destination, profile, summary, emissions)
    }

    /// Process rows with bounded concurrency, keeping input order
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn resolve_batch(&self, rows: &[TripRow]) -> Vec<TripResult> {
        let width = self.settings.concurrency.max(1);
        info!(concurrency = width, "Processing batch");

        stream::iter(rows)
            .map(|row| self.resolve_trip(row))
            .buffered(width)
            .collect()
            .await
    }
}
