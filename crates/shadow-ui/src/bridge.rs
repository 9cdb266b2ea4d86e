use std::sync::{Arc, OnceLock};
use std::time::Duration;

use shadow_core::Config;
use shadow_weather::{
    Coordinates, FixedLocation, Geolocator, IpGeolocator, LocationDisabled, WeatherProvider,
    WeatherSource,
};

// Static tokio runtime that lives for the duration of the application
static RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Initialize the tokio runtime (call once at application startup)
pub fn get_or_init_runtime() -> std::io::Result<tokio::runtime::Handle> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime.handle().clone());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("shadow-tokio")
        .build()?;

    // Another thread may have won the race; either runtime is fine to use
    let _ = RUNTIME.set(runtime);

    RUNTIME
        .get()
        .map(|r| r.handle().clone())
        .ok_or_else(|| std::io::Error::other("runtime not initialized"))
}

/// Handle to the runtime if it has been started
pub fn get_runtime() -> Option<tokio::runtime::Handle> {
    RUNTIME.get().map(|r| r.handle().clone())
}

/// Network collaborators shared by every weather request
pub struct WeatherServices {
    pub source: Arc<dyn WeatherSource>,
    pub locator: Arc<dyn Geolocator>,
}

impl WeatherServices {
    pub fn new(source: Arc<dyn WeatherSource>, locator: Arc<dyn Geolocator>) -> Self {
        Self { source, locator }
    }

    /// Build the OpenWeather provider and the configured location source
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.weather.timeout_secs);
        let provider = WeatherProvider::new(
            &config.weather.base_url,
            config.weather.effective_api_key(),
            timeout,
        )?;

        let locator: Arc<dyn Geolocator> = if !config.location.enabled {
            tracing::info!("Location access disabled in config");
            Arc::new(LocationDisabled)
        } else if let Some((lat, lon)) = config.location.fixed_coordinates() {
            tracing::info!("Using fixed location {:.4}, {:.4}", lat, lon);
            Arc::new(FixedLocation(Coordinates::new(lat, lon)))
        } else {
            Arc::new(IpGeolocator::new(&config.location.ip_lookup_url, timeout)?)
        };

        Ok(Self::new(Arc::new(provider), locator))
    }
}
