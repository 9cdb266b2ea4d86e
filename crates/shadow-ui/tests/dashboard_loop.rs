use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use shadow_core::Config;
use shadow_ui::{run, AppOptions, WeatherServices};
use shadow_weather::{
    Coordinates, Geolocator, LocationDisabled, LocationError, WeatherError, WeatherIcon,
    WeatherRecord, WeatherSource,
};

struct StubSource {
    coordinate_calls: AtomicUsize,
}

fn record(name: &str) -> WeatherRecord {
    WeatherRecord {
        name: name.to_string(),
        country: None,
        coordinates: None,
        temperature: 18.0,
        humidity: 40,
        wind_speed: 1.0,
        description: "mist".into(),
        icon: WeatherIcon::Fog,
        fetched_at: Utc::now(),
    }
}

#[async_trait]
impl WeatherSource for StubSource {
    async fn current_by_city(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        if city == "Atlantis" {
            return Err(WeatherError::Status {
                status: 404,
                message: "city not found".into(),
            });
        }
        Ok(record(city))
    }

    async fn current_by_coordinates(
        &self,
        _coordinates: Coordinates,
    ) -> Result<WeatherRecord, WeatherError> {
        self.coordinate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(record("Hometown"))
    }
}

struct Here;

#[async_trait]
impl Geolocator for Here {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        Ok(Coordinates::new(47.6, -122.3))
    }
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn run_session(
    script: &str,
    options: AppOptions,
    locator: Arc<dyn Geolocator>,
) -> (String, Arc<StubSource>) {
    run_session_with(&Config::default(), script, options, locator)
}

fn run_session_with(
    config: &Config,
    script: &str,
    options: AppOptions,
    locator: Arc<dyn Geolocator>,
) -> (String, Arc<StubSource>) {
    let source = Arc::new(StubSource {
        coordinate_calls: AtomicUsize::new(0),
    });
    let services = Arc::new(WeatherServices::new(source.clone(), locator));
    let mut output = Vec::new();
    run(
        config,
        services,
        options,
        Cursor::new(script.as_bytes().to_vec()),
        &mut output,
    )
    .unwrap();
    (strip_ansi(&String::from_utf8(output).unwrap()), source)
}

#[test]
fn search_dedupe_and_clear_fallback() {
    let script = "Paris\nParis\nlist\nclear 1\nclear 1\nlist\nquit\n";
    let (out, source) = run_session(script, AppOptions::default(), Arc::new(Here));

    assert!(out.contains("Welcome To Shadow Weather App"));
    assert!(out.contains("Hometown"));
    assert!(out.contains("Successfully fetched Weather data"));
    assert!(out.contains("Weather data for Paris is already fetched."));
    assert!(out.contains("1. Hometown\n2. Paris\n"));
    // Clearing both cards brings the current location back
    assert!(out.contains("1. Hometown\n> "));
    assert_eq!(source.coordinate_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn initial_cities_survive_location_fetch() {
    let options = AppOptions {
        initial_cities: vec!["Oslo".into(), "Rome".into(), "Oslo".into()],
        ..AppOptions::default()
    };
    let (out, _) = run_session("list\n", options, Arc::new(Here));
    assert!(out.contains("1. Hometown\n2. Oslo\n3. Rome\n"));
}

#[test]
fn failures_and_denied_location_raise_warnings() {
    let options = AppOptions {
        locate_on_start: true,
        ..AppOptions::default()
    };
    let (out, source) = run_session("Atlantis\nquit\n", options, Arc::new(LocationDisabled));

    assert!(out.contains("Please enable the location to make this application fully functional"));
    assert!(out.contains("Failed to fetch Weather data (Location not found. Check and try again.)"));
    assert!(out.contains("Loading weather..."));
    assert_eq!(source.coordinate_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn theme_toggle_and_invalid_input() {
    let options = AppOptions {
        locate_on_start: false,
        ..AppOptions::default()
    };
    let (out, _) = run_session("theme\nclear zero\nhelp\n", options, Arc::new(Here));
    assert!(out.contains("Theme: Light"));
    assert!(out.contains("Theme: Dark"));
    assert!(out.contains("not a card number: zero"));
    assert!(out.contains("clear <n>"));
}

#[test]
fn notices_survive_redraws_within_their_duration() {
    let options = AppOptions {
        locate_on_start: false,
        ..AppOptions::default()
    };
    let (out, _) = run_session("Paris\ntheme\nquit\n", options, Arc::new(Here));

    let after_theme = out
        .split("Theme: Dark")
        .nth(1)
        .unwrap();
    assert!(after_theme.contains("Successfully fetched Weather data"));
    assert_eq!(out.matches("Successfully fetched Weather data").count(), 2);
}

#[test]
fn zero_second_notices_are_drawn_once() {
    let mut config = Config::default();
    config.ui.notice_seconds = 0;
    let options = AppOptions {
        locate_on_start: false,
        ..AppOptions::default()
    };
    let (out, _) = run_session_with(&config, "Paris\ntheme\nquit\n", options, Arc::new(Here));

    assert_eq!(out.matches("Successfully fetched Weather data").count(), 1);
    assert!(out.contains("Theme: Dark"));
}
