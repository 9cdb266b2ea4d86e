//! Weather data for Shadow Weather
//!
//! Current conditions from the OpenWeather API, device location sources,
//! the heat index regression and the description-to-icon table.

pub mod heat_index;
pub mod icon;
pub mod location;
pub mod notice;
pub mod provider;
pub mod service;
pub mod types;

pub use heat_index::heat_index;
pub use icon::WeatherIcon;
pub use location::{FixedLocation, Geolocator, IpGeolocator, LocationDisabled};
pub use notice::{Notice, NoticeStatus};
pub use provider::{WeatherProvider, WeatherSource};
pub use service::{run_action, Action, Outcome};
pub use types::*;
