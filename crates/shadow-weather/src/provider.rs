//! OpenWeather current-weather client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;

use crate::types::{ApiErrorBody, Coordinates, CurrentWeatherResponse, WeatherError, WeatherRecord};

const USER_AGENT: &str = concat!("shadow-weather/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce current weather for a city or a coordinate pair.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current_by_city(&self, city: &str) -> Result<WeatherRecord, WeatherError>;

    async fn current_by_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherRecord, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    /// Build a provider. A missing key is sent as empty, which the API
    /// rejects with 401; that surfaces as an ordinary fetch failure.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        if api_key.is_none() {
            tracing::warn!("No OpenWeather API key configured; requests will be rejected");
        }

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.unwrap_or_default(),
        })
    }

    fn city_url(&self, city: &str) -> String {
        format!(
            "{}/weather?q={}&APPID={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key),
        )
    }

    fn coordinates_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/weather?lat={}&lon={}&APPID={}&units=metric",
            self.base_url,
            coordinates.latitude,
            coordinates.longitude,
            urlencoding::encode(&self.api_key),
        )
    }

    async fn fetch(&self, url: &str) -> Result<WeatherRecord, WeatherError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            tracing::debug!("Weather API returned status {}: {}", status, message);
            return Err(WeatherError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        WeatherRecord::from_response(body)
    }
}

#[async_trait]
impl WeatherSource for WeatherProvider {
    #[instrument(skip(self), level = "info")]
    async fn current_by_city(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        let record = self.fetch(&self.city_url(city)).await?;
        tracing::info!("Fetched weather for {}", record.name);
        Ok(record)
    }

    #[instrument(skip(self), level = "info")]
    async fn current_by_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherRecord, WeatherError> {
        let record = self.fetch(&self.coordinates_url(coordinates)).await?;
        tracing::info!("Fetched weather for current location: {}", record.name);
        Ok(record)
    }
}
