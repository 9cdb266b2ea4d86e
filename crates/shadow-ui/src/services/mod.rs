pub mod weather_service;

pub use weather_service::{
    request_action as request_weather_action, WeatherServiceError, WeatherServiceMessage,
};
