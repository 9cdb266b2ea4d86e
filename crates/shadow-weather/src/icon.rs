//! Description-to-icon lookup.
//!
//! OpenWeather returns a free-text `weather[0].description`; the dashboard
//! shows one of seven fixed icons for it. Anything outside the table gets
//! the windy icon.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Storm,
    Rain,
    Snow,
    Fog,
    #[default]
    Windy,
}

impl WeatherIcon {
    /// Pick the icon for an API description. Case and surrounding whitespace
    /// are ignored.
    pub fn from_description(description: &str) -> Self {
        let normalized = description.trim().to_lowercase();
        match normalized.as_str() {
            "clear sky" | "few clouds" | "scattered clouds" => Self::Sun,
            "broken clouds" => Self::Cloud,
            "overcast clouds" => Self::Storm,
            "light rain" | "moderate rain" | "heavy rain" => Self::Rain,
            "light snow" | "moderate snow" | "heavy snow" => Self::Snow,
            "mist" | "fog" => Self::Fog,
            _ => Self::Windy,
        }
    }

    /// Single-glyph rendering for terminals
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Cloud => "☁",
            Self::Storm => "⛈",
            Self::Rain => "☂",
            Self::Snow => "❄",
            Self::Fog => "≡",
            Self::Windy => "~",
        }
    }
}
