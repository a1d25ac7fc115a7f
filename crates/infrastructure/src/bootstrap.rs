//! Wiring of adapters and services from configuration

use std::sync::Arc;

use application::error::ApplicationError;
use application::services::{GeocodeResolver, RouteResolver, TripPipeline};
use secrecy::SecretString;
use tracing::info;

use crate::adapters::{OrsDirectionsAdapter, OrsGeocodingAdapter};
use crate::config::AppConfig;

/// Build the trip pipeline, resolving the API key from configuration
///
/// # Errors
///
/// Returns a configuration error when the settings are invalid or the
/// API key is missing, or when an HTTP client cannot be created.
pub fn build_pipeline(config: &AppConfig) -> Result<TripPipeline, ApplicationError> {
    let api_key = config.require_api_key()?;
    build_pipeline_with_key(config, &api_key)
}

/// Build the trip pipeline with an explicit API key
///
/// # Errors
///
/// Returns an error when the settings are invalid or an HTTP client
/// cannot be created.
pub fn build_pipeline_with_key(
    config: &AppConfig,
    api_key: &SecretString,
) -> Result<TripPipeline, ApplicationError> {
    config.validate()?;

    let ors_config = config.ors.to_ors_config(api_key);
    ors_config
        .validate()
        .map_err(ApplicationError::Configuration)?;
    let retry_config = config.retry.to_retry_config();

    let geocoding = OrsGeocodingAdapter::from_config(&ors_config, retry_config.clone())?;
    let directions = OrsDirectionsAdapter::from_config(&ors_config, retry_config)?;

    let geocoder = GeocodeResolver::new(
        Arc::new(geocoding),
        config.geocoding.to_geocoder_settings(),
    );
    let router = RouteResolver::new(
        Arc::new(directions),
        config.routing.to_routing_settings(),
    );
    let emissions = Arc::new(config.emissions.to_model());

    info!(
        base_url = %ors_config.base(),
        profile = %config.routing.profile,
        concurrency = config.pipeline.concurrency,
        "Trip pipeline ready"
    );

    Ok(TripPipeline::new(
        geocoder,
        router,
        emissions,
        config.pipeline_settings(),
    ))
}
