pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{Config, LocationConfig, UiConfig, ValidationResult, WeatherConfig, API_KEY_ENV};
pub use error::{
    AppError, ConfigError, LocationError, NetworkError, ReqwestErrorExt, WeatherError,
};

use anyhow::Result;

/// Initialize logging. Output goes to stderr so it stays out of the dashboard.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Shadow Weather core initialized");
    Ok(())
}
