use std::path::Path;

use crate::{Config, ConfigError};

/// Application lifecycle: owns the loaded configuration.
pub struct App {
    config: Config,
}

impl App {
    /// Load configuration from `config_path`, or the default location when
    /// `None`, let `overrides` adjust it, then validate the result.
    pub fn new(
        config_path: Option<&Path>,
        overrides: impl FnOnce(&mut Config),
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(p) => Config::load_from(p),
            None => Config::load(),
        }
        .map_err(|e| ConfigError::ParseError(format!("{:#}", e)))?;

        overrides(&mut config);
        Self::with_config(config)
    }

    /// Wrap an already-built configuration, validating it first.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }
        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        tracing::info!("Using config directory {}", config.config_dir.display());
        Ok(Self { config })
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shutdown(&mut self) {
        tracing::info!("Shutting down Shadow Weather");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_config_rejects_invalid() {
        let mut config = Config::default();
        config.weather.base_url = "nope".into();
        let err = App::with_config(config).err().unwrap();
        assert!(matches!(err, ConfigError::Invalid(ref s) if s.contains("weather.base_url")));
    }

    #[test]
    fn test_new_with_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "weather = 3 =").unwrap();
        let err = App::new(Some(&path), |_| {}).err().unwrap();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_new_creates_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let app = App::new(Some(&path), |_| {}).unwrap();
        assert!(!app.config().ui.dark_mode);
        assert!(path.exists());
    }

    #[test]
    fn test_overrides_apply_before_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let app = App::new(Some(&path), |c| c.ui.dark_mode = true).unwrap();
        assert!(app.config().ui.dark_mode);

        let err = App::new(Some(&path), |c| c.location.latitude = Some(120.0))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::Invalid(ref s) if s.contains("location.latitude")));
    }
}
