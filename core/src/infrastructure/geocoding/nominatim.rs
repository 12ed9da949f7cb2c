use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::{GeocoderConfig, entities::app_errors::CoreError},
    geocoding::{entities::GeocodeResult, ports::GeocoderPort, value_objects::GeocodeMode},
};

/// Geocoder backed by the OpenStreetMap Nominatim search API.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    request_delay: Duration,
}

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build geocoder HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_delay: config.request_delay,
        })
    }

    pub fn search_url(&self, query: &str, mode: GeocodeMode) -> String {
        match mode {
            GeocodeMode::FreeText => format!(
                "{}/search?format=json&q={}&countrycodes=us",
                self.base_url,
                urlencoding::encode(query)
            ),
            GeocodeMode::PostalCode => format!(
                "{}/search?format=json&postalcode={}&country=US",
                self.base_url,
                urlencoding::encode(query)
            ),
        }
    }
}

fn place_to_result(place: NominatimPlace) -> Result<GeocodeResult, CoreError> {
    let latitude = place.lat.parse::<f64>().map_err(|e| {
        CoreError::ExternalServiceError(format!("Invalid latitude {:?}: {}", place.lat, e))
    })?;
    let longitude = place.lon.parse::<f64>().map_err(|e| {
        CoreError::ExternalServiceError(format!("Invalid longitude {:?}: {}", place.lon, e))
    })?;

    Ok(GeocodeResult {
        display_name: place.display_name,
        latitude,
        longitude,
    })
}

impl GeocoderPort for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        query: String,
        mode: GeocodeMode,
    ) -> Result<Option<GeocodeResult>, CoreError> {
        // Nominatim's usage policy allows at most one request per second.
        tokio::time::sleep(self.request_delay).await;

        let url = self.search_url(&query, mode);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Geocoding request failed: {}", e);
            CoreError::ExternalServiceError(format!("Geocoding request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Geocoder returned status {} for {}", response.status(), query);
            return Ok(None);
        }

        let places: Vec<NominatimPlace> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse geocoder response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse geocoder response: {}", e))
        })?;

        match places.into_iter().next() {
            Some(place) => place_to_result(place).map(Some),
            None => {
                tracing::info!("No results found for {} {}", mode, query);
                Ok(None)
            }
        }
    }
}
