//! Device location sources.
//!
//! A terminal has no browser geolocation prompt, so "current location" comes
//! from fixed coordinates in config, an IP lookup, or nothing at all (the
//! user turned location off, which behaves like a denied permission).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::types::{Coordinates, LocationError};

#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// Always answers with the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl Geolocator for FixedLocation {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// Location access switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationDisabled;

#[async_trait]
impl Geolocator for LocationDisabled {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
}

/// Approximate location from the public IP address (ip-api.com format).
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: Client,
    url: String,
}

impl IpGeolocator {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                LocationError::Timeout
            } else {
                LocationError::Unavailable(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(LocationError::Unavailable(format!(
                "lookup returned status {}",
                response.status()
            )));
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        if body.status != "success" {
            let message = body.message.unwrap_or_else(|| "lookup failed".into());
            // Private and reserved ranges can never be located
            if message.contains("range") {
                return Err(LocationError::Unsupported(message));
            }
            return Err(LocationError::Unavailable(message));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => {
                tracing::info!(
                    "IP geolocation: {:.2}, {:.2} ({})",
                    lat,
                    lon,
                    body.city.as_deref().unwrap_or("unknown city")
                );
                Ok(Coordinates::new(lat, lon))
            }
            _ => Err(LocationError::Unavailable("lookup returned no coordinates".into())),
        }
    }
}
