//! Weather backend: async weather fetching.
//! All network work runs off the UI thread; results sent via mpsc.

use std::sync::Arc;

use shadow_weather::{run_action, Action, LocationError, Outcome, WeatherError};

use crate::bridge::{self, WeatherServices};

/// Error type for weather operations as seen by the UI
#[derive(Debug)]
pub enum WeatherServiceError {
    Fetch(WeatherError),
    Location(LocationError),
    NotInitialized,
}

impl std::fmt::Display for WeatherServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherServiceError::Fetch(e) => write!(f, "Weather error: {}", e),
            WeatherServiceError::Location(e) => write!(f, "Location error: {}", e),
            WeatherServiceError::NotInitialized => write!(f, "Weather service not initialized"),
        }
    }
}

impl std::error::Error for WeatherServiceError {}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// An action ran to completion (successfully or not)
    ActionDone(Outcome),
    /// The action could not be started
    Unavailable {
        action: Action,
        error: WeatherServiceError,
    },
}

/// Run `action` on the shared runtime.
/// Sends exactly one message on the channel when complete.
pub fn request_action(
    tx: &std::sync::mpsc::Sender<WeatherServiceMessage>,
    services: Arc<WeatherServices>,
    action: Action,
) {
    let tx = tx.clone();
    let runtime = match bridge::get_runtime() {
        Some(r) => r,
        None => {
            let _ = tx.send(WeatherServiceMessage::Unavailable {
                action,
                error: WeatherServiceError::NotInitialized,
            });
            return;
        }
    };

    tracing::debug!("Dispatching {:?}", action);
    runtime.spawn(async move {
        let outcome = run_action(action, services.source.as_ref(), services.locator.as_ref()).await;
        let _ = tx.send(WeatherServiceMessage::ActionDone(outcome));
    });
}
