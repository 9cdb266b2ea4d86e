use crate::services::weather_service::WeatherServiceError;
use shadow_core::{AppError, LocationError, NetworkError, ReqwestErrorExt, WeatherError};

impl From<WeatherServiceError> for AppError {
    fn from(e: WeatherServiceError) -> Self {
        match e {
            WeatherServiceError::Fetch(err) => match err {
                shadow_weather::WeatherError::Network(e) => AppError::Network(e.into_network_error()),
                shadow_weather::WeatherError::Status { status: 401, .. } => {
                    AppError::Weather(WeatherError::InvalidApiKey)
                }
                shadow_weather::WeatherError::Status { status: 404, message } => {
                    AppError::Weather(WeatherError::LocationNotFound(message))
                }
                shadow_weather::WeatherError::Status { status, .. } if status >= 500 => {
                    AppError::Weather(WeatherError::ServiceUnavailable)
                }
                shadow_weather::WeatherError::Status { status, message } => {
                    AppError::Weather(WeatherError::ApiError(format!("{}: {}", status, message)))
                }
                shadow_weather::WeatherError::Parse(s) => {
                    AppError::Network(NetworkError::InvalidResponse(s))
                }
            },
            WeatherServiceError::Location(err) => match err {
                shadow_weather::LocationError::PermissionDenied => {
                    AppError::Location(LocationError::PermissionDenied)
                }
                other => AppError::Location(LocationError::Unavailable(other.to_string())),
            },
            WeatherServiceError::NotInitialized => {
                AppError::Service("Weather service not initialized".into())
            }
        }
    }
}
