use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::heat_index::heat_index;
use crate::icon::WeatherIcon;

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One fetched current-weather result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Place name as reported by the API
    pub name: String,
    pub country: Option<String>,
    pub coordinates: Option<Coordinates>,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    pub description: String,
    pub icon: WeatherIcon,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Apparent temperature in °C
    pub fn heat_index(&self) -> f64 {
        heat_index(self.temperature, f64::from(self.humidity))
    }

    /// Wind speed converted to km/h
    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed * 3.6
    }

    pub(crate) fn from_response(resp: CurrentWeatherResponse) -> Result<Self, WeatherError> {
        let condition = resp
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("response has no weather conditions".into()))?;

        let humidity = resp.main.humidity.round().clamp(0.0, 100.0) as u8;
        let icon = WeatherIcon::from_description(&condition.description);

        Ok(Self {
            name: resp.name,
            country: resp.sys.and_then(|s| s.country),
            coordinates: resp.coord.map(|c| Coordinates::new(c.lat, c.lon)),
            temperature: resp.main.temp,
            humidity,
            wind_speed: resp.wind.map(|w| w.speed).unwrap_or(0.0),
            description: condition.description,
            icon,
            fetched_at: Utc::now(),
        })
    }
}

// OpenWeather `/weather` response, only the fields we read.

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherResponse {
    #[serde(default)]
    pub name: String,
    pub coord: Option<ApiCoord>,
    pub main: ApiMain,
    pub wind: Option<ApiWind>,
    #[serde(default)]
    pub weather: Vec<ApiCondition>,
    pub sys: Option<ApiSys>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSys {
    pub country: Option<String>,
}

/// Error body OpenWeather sends with non-2xx statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Geolocation is not supported on this device: {0}")]
    Unsupported(String),
    #[error("Location request timed out")]
    Timeout,
    #[error("Location lookup failed: {0}")]
    Unavailable(String),
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}
