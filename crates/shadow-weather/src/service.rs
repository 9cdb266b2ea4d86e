//! One-shot execution of dashboard actions against a weather source.

use crate::location::Geolocator;
use crate::provider::WeatherSource;
use crate::types::{LocationError, WeatherError, WeatherRecord};

/// Network work the dashboard asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Search by the query exactly as the user typed it (trimmed)
    FetchByCity(String),
    /// Locate the device, then fetch weather for its coordinates
    FetchCurrentLocation,
}

/// Result of running an [`Action`]
#[derive(Debug)]
pub enum Outcome {
    CityFetched {
        query: String,
        result: Result<WeatherRecord, WeatherError>,
    },
    CurrentFetched(Result<WeatherRecord, WeatherError>),
    /// Geolocation itself failed; no weather request was made
    LocationFailed(LocationError),
}

pub async fn run_action(
    action: Action,
    source: &dyn WeatherSource,
    locator: &dyn Geolocator,
) -> Outcome {
    match action {
        Action::FetchByCity(query) => {
            let result = source.current_by_city(&query).await;
            if let Err(e) = &result {
                tracing::warn!("Weather fetch for {:?} failed: {}", query, e);
            }
            Outcome::CityFetched { query, result }
        }
        Action::FetchCurrentLocation => {
            let coordinates = match locator.current_location().await {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!("Geolocation failed: {}", e);
                    return Outcome::LocationFailed(e);
                }
            };
            tracing::info!(
                "Got location: {}, {}",
                coordinates.latitude,
                coordinates.longitude
            );
            let result = source.current_by_coordinates(coordinates).await;
            if let Err(e) = &result {
                tracing::error!("Error fetching current location weather: {}", e);
            }
            Outcome::CurrentFetched(result)
        }
    }
}
