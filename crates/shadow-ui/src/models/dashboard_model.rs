//! Dashboard state: the list of weather cards, theme and pending notices.
//!
//! Pure bookkeeping. Methods that need network work return an [`Action`]
//! for the caller to dispatch, and results come back through [`apply`].
//!
//! [`apply`]: DashboardModel::apply

use std::time::Duration;

use shadow_core::AppError;
use shadow_weather::{Action, LocationError, Notice, Outcome, WeatherRecord};

use crate::services::WeatherServiceError;
use crate::theme::Theme;

pub const FETCH_SUCCESS: &str = "Successfully fetched Weather data";
pub const FETCH_FAILED: &str = "Failed to fetch Weather data";
pub const LOCATION_DENIED: &str =
    "Please enable the location to make this application fully functional and refresh the page again.";

/// A card on the dashboard and the location string it was requested with
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub location: String,
    pub record: WeatherRecord,
}

#[derive(Debug)]
pub struct DashboardModel {
    entries: Vec<Entry>,
    theme: Theme,
    notices: Vec<Notice>,
    notice_duration: Duration,
}

impl DashboardModel {
    pub fn new(theme: Theme, notice_duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            theme,
            notices: Vec::new(),
            notice_duration,
        }
    }

    /// First action when the dashboard opens
    pub fn mount(&self) -> Action {
        Action::FetchCurrentLocation
    }

    /// Handle the search box. Blank input does nothing; a location that is
    /// already on the dashboard is rejected with a warning.
    pub fn submit_search(&mut self, input: &str) -> Option<Action> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }

        if self.contains_location(query) {
            tracing::info!("Ignoring duplicate search for {:?}", query);
            self.push_duplicate_notice(query);
            return None;
        }

        Some(Action::FetchByCity(query.to_string()))
    }

    /// Fold the result of a dispatched action into the dashboard
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::CityFetched {
                query,
                result: Ok(record),
            } => {
                // Two overlapping searches for the same place: first one wins
                if self.contains_location(&query) {
                    self.push_duplicate_notice(&query);
                    return;
                }
                self.entries.push(Entry {
                    location: query,
                    record,
                });
                self.push(Notice::success(FETCH_SUCCESS));
            }
            Outcome::CityFetched { result: Err(e), .. } => {
                self.push_failure(WeatherServiceError::Fetch(e));
            }
            Outcome::CurrentFetched(Ok(record)) => {
                self.entries = vec![Entry {
                    location: record.name.clone(),
                    record,
                }];
            }
            Outcome::CurrentFetched(Err(e)) => {
                self.push_failure(WeatherServiceError::Fetch(e));
            }
            Outcome::LocationFailed(LocationError::Unsupported(reason)) => {
                tracing::error!("Geolocation is not supported: {}", reason);
            }
            Outcome::LocationFailed(e) => {
                let detail = AppError::from(WeatherServiceError::Location(e)).user_message();
                self.push(Notice::warning(LOCATION_DENIED).with_detail(detail));
            }
        }
    }

    /// An action that never ran still needs a notice
    pub fn apply_unavailable(&mut self, action: Action, error: WeatherServiceError) {
        tracing::error!("Could not run {:?}: {}", action, error);
        self.push_failure(error);
    }

    /// Remove the card at `index`. Emptying the dashboard asks for the
    /// current location again.
    pub fn clear(&mut self, index: usize) -> Option<Action> {
        if index >= self.entries.len() {
            tracing::debug!("Clear ignored, no card at index {}", index);
            return None;
        }

        let removed = self.entries.remove(index);
        tracing::info!("Cleared {}", removed.location);

        if self.entries.is_empty() {
            Some(Action::FetchCurrentLocation)
        } else {
            None
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.location.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain notices raised since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn contains_location(&self, location: &str) -> bool {
        self.locations().any(|l| l == location)
    }

    fn push(&mut self, notice: Notice) {
        self.notices.push(notice.with_duration(self.notice_duration));
    }

    fn push_duplicate_notice(&mut self, location: &str) {
        self.push(Notice::warning(format!(
            "Weather data for {} is already fetched.",
            location
        )));
    }

    fn push_failure(&mut self, error: WeatherServiceError) {
        let detail = AppError::from(error).user_message();
        self.push(Notice::warning(FETCH_FAILED).with_detail(detail));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shadow_weather::{NoticeStatus, WeatherError, WeatherIcon};

    fn record(name: &str) -> WeatherRecord {
        WeatherRecord {
            name: name.to_string(),
            country: None,
            coordinates: None,
            temperature: 21.0,
            humidity: 55,
            wind_speed: 2.0,
            description: "few clouds".into(),
            icon: WeatherIcon::Sun,
            fetched_at: Utc::now(),
        }
    }

    fn model() -> DashboardModel {
        DashboardModel::new(Theme::Light, Duration::from_secs(5))
    }

    fn fetched(model: &mut DashboardModel, query: &str) {
        let action = model.submit_search(query).unwrap();
        assert_eq!(action, Action::FetchByCity(query.trim().to_string()));
        model.apply(Outcome::CityFetched {
            query: query.trim().to_string(),
            result: Ok(record(query.trim())),
        });
    }

    #[test]
    fn mount_fetches_current_location() {
        assert_eq!(model().mount(), Action::FetchCurrentLocation);
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut m = model();
        assert_eq!(m.submit_search("   "), None);
        assert!(m.take_notices().is_empty());
    }

    #[test]
    fn successful_search_appends_in_fetch_order() {
        let mut m = model();
        fetched(&mut m, "Paris");
        fetched(&mut m, "Oslo");

        let locations: Vec<_> = m.locations().collect();
        assert_eq!(locations, vec!["Paris", "Oslo"]);

        let notices = m.take_notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.title == FETCH_SUCCESS));
        assert!(notices.iter().all(|n| n.status == NoticeStatus::Success));
    }

    #[test]
    fn duplicate_search_is_rejected() {
        let mut m = model();
        fetched(&mut m, "Paris");
        m.take_notices();

        assert_eq!(m.submit_search("Paris"), None);
        assert_eq!(m.submit_search("  Paris "), None);

        let notices = m.take_notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "Weather data for Paris is already fetched.");
        assert_eq!(notices[0].status, NoticeStatus::Warning);
        assert_eq!(m.entries().len(), 1);
    }

    #[test]
    fn search_allowed_again_after_clear() {
        let mut m = model();
        fetched(&mut m, "Paris");
        fetched(&mut m, "Oslo");
        assert_eq!(m.clear(0), None);
        assert_eq!(
            m.submit_search("Paris"),
            Some(Action::FetchByCity("Paris".into()))
        );
    }

    #[test]
    fn overlapping_duplicate_results_keep_one_card() {
        let mut m = model();
        let first = m.submit_search("Rome").unwrap();
        let second = m.submit_search("Rome").unwrap();
        assert_eq!(first, second);

        for _ in 0..2 {
            m.apply(Outcome::CityFetched {
                query: "Rome".into(),
                result: Ok(record("Rome")),
            });
        }

        assert_eq!(m.entries().len(), 1);
        let titles: Vec<_> = m.take_notices().into_iter().map(|n| n.title).collect();
        assert_eq!(
            titles,
            vec![
                FETCH_SUCCESS.to_string(),
                "Weather data for Rome is already fetched.".to_string()
            ]
        );
    }

    #[test]
    fn failed_search_adds_warning_and_no_card() {
        let mut m = model();
        m.apply(Outcome::CityFetched {
            query: "Atlantis".into(),
            result: Err(WeatherError::Status {
                status: 404,
                message: "city not found".into(),
            }),
        });

        assert!(m.is_empty());
        let notices = m.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, FETCH_FAILED);
        assert_eq!(
            notices[0].detail.as_deref(),
            Some("Location not found. Check and try again.")
        );
    }

    #[test]
    fn current_location_replaces_all_cards() {
        let mut m = model();
        fetched(&mut m, "Paris");
        fetched(&mut m, "Oslo");
        m.take_notices();

        m.apply(Outcome::CurrentFetched(Ok(record("Seattle"))));

        let locations: Vec<_> = m.locations().collect();
        assert_eq!(locations, vec!["Seattle"]);
        assert!(m.take_notices().is_empty());
    }

    #[test]
    fn current_location_name_blocks_duplicate_search() {
        let mut m = model();
        m.apply(Outcome::CurrentFetched(Ok(record("Seattle"))));
        assert_eq!(m.submit_search("Seattle"), None);
    }

    #[test]
    fn clearing_last_card_falls_back_to_current_location() {
        let mut m = model();
        fetched(&mut m, "Paris");
        fetched(&mut m, "Oslo");

        assert_eq!(m.clear(1), None);
        assert_eq!(m.clear(0), Some(Action::FetchCurrentLocation));
        assert!(m.is_empty());
    }

    #[test]
    fn clear_out_of_range_is_noop() {
        let mut m = model();
        fetched(&mut m, "Paris");
        assert_eq!(m.clear(5), None);
        assert_eq!(m.entries().len(), 1);

        let mut empty = model();
        assert_eq!(empty.clear(0), None);
    }

    #[test]
    fn denied_location_warns() {
        let mut m = model();
        m.apply(Outcome::LocationFailed(LocationError::PermissionDenied));
        let notices = m.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, LOCATION_DENIED);
        assert_eq!(notices[0].detail.as_deref(), Some("Location access is disabled."));
    }

    #[test]
    fn unsupported_location_is_only_logged() {
        let mut m = model();
        m.apply(Outcome::LocationFailed(LocationError::Unsupported(
            "private range".into(),
        )));
        assert!(m.take_notices().is_empty());
    }

    #[test]
    fn current_location_failure_warns() {
        let mut m = model();
        m.apply(Outcome::CurrentFetched(Err(WeatherError::Parse("eof".into()))));
        let notices = m.take_notices();
        assert_eq!(notices[0].title, FETCH_FAILED);
    }

    #[test]
    fn unavailable_action_warns() {
        let mut m = model();
        m.apply_unavailable(
            Action::FetchByCity("Paris".into()),
            WeatherServiceError::NotInitialized,
        );
        assert_eq!(m.take_notices()[0].title, FETCH_FAILED);
    }

    #[test]
    fn notices_carry_configured_duration() {
        let mut m = DashboardModel::new(Theme::Dark, Duration::from_secs(9));
        assert_eq!(m.submit_search("x"), Some(Action::FetchByCity("x".into())));
        m.apply(Outcome::CityFetched {
            query: "x".into(),
            result: Ok(record("x")),
        });
        assert_eq!(m.take_notices()[0].duration, Duration::from_secs(9));
    }

    #[test]
    fn theme_toggles() {
        let mut m = model();
        assert_eq!(m.theme(), Theme::Light);
        m.toggle_theme();
        assert_eq!(m.theme(), Theme::Dark);
        m.toggle_theme();
        assert_eq!(m.theme(), Theme::Light);
    }
}
