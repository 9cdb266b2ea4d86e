pub mod app;
pub mod bridge;
pub mod commands;
pub mod error_mapping;
pub mod models;
pub mod render;
pub mod services;
pub mod theme;

pub use app::{run, AppOptions};
pub use bridge::WeatherServices;
pub use render::Layout;
pub use theme::Theme;
