//! Interactive event loop.
//!
//! Reads commands line by line, dispatches weather actions onto the shared
//! runtime and waits for every result before drawing the next screen.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use shadow_core::Config;
use shadow_weather::{Action, Notice};

use crate::bridge::{self, WeatherServices};
use crate::commands::{self, Command};
use crate::models::DashboardModel;
use crate::render::{self, Layout};
use crate::services::{request_weather_action, WeatherServiceMessage};
use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Cities searched right after the first location fetch
    pub initial_cities: Vec<String>,
    pub locate_on_start: bool,
    pub layout: Layout,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_cities: Vec::new(),
            locate_on_start: true,
            layout: Layout::Wide,
        }
    }
}

/// Notices on screen. A notice is drawn when it is raised and on every
/// redraw after that until its duration has elapsed.
#[derive(Debug, Default)]
struct NoticeBoard {
    active: Vec<(Instant, Notice)>,
}

impl NoticeBoard {
    fn refresh(&mut self, fresh: Vec<Notice>, now: Instant) -> Vec<Notice> {
        self.active
            .retain(|(since, notice)| now.duration_since(*since) < notice.duration);

        let mut shown: Vec<Notice> = self.active.iter().map(|(_, n)| n.clone()).collect();
        shown.extend(fresh.iter().cloned());
        self.active.extend(fresh.into_iter().map(|n| (now, n)));
        shown
    }
}

struct Session {
    model: DashboardModel,
    services: Arc<WeatherServices>,
    tx: Sender<WeatherServiceMessage>,
    rx: Receiver<WeatherServiceMessage>,
    pending: usize,
    /// Upper bound on waiting for a single result
    wait: Duration,
    notices: NoticeBoard,
    layout: Layout,
}

impl Session {
    fn dispatch(&mut self, action: Action) {
        self.pending += 1;
        request_weather_action(&self.tx, self.services.clone(), action);
    }

    fn wait_all(&mut self) {
        while self.pending > 0 {
            match self.rx.recv_timeout(self.wait) {
                Ok(message) => {
                    self.pending -= 1;
                    self.handle(message);
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!("Gave up waiting on {} weather request(s)", self.pending);
                    self.pending = 0;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.pending = 0;
                }
            }
        }

        // Late arrivals from abandoned requests
        while let Ok(message) = self.rx.try_recv() {
            self.handle(message);
        }
    }

    fn handle(&mut self, message: WeatherServiceMessage) {
        match message {
            WeatherServiceMessage::ActionDone(outcome) => self.model.apply(outcome),
            WeatherServiceMessage::Unavailable { action, error } => {
                self.model.apply_unavailable(action, error)
            }
        }
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let fresh = self.model.take_notices();
        let notices = self.notices.refresh(fresh, Instant::now());
        let now = Local::now().naive_local();
        write!(
            out,
            "{}",
            render::dashboard(&self.model, &notices, self.layout, now)
        )?;
        Ok(())
    }
}

/// Run the dashboard until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    services: Arc<WeatherServices>,
    options: AppOptions,
    mut input: R,
    mut output: W,
) -> Result<()> {
    bridge::get_or_init_runtime().context("Failed to start async runtime")?;

    let (tx, rx) = mpsc::channel();
    let mut session = Session {
        model: DashboardModel::new(
            Theme::from_dark_mode(config.ui.dark_mode),
            Duration::from_secs(config.ui.notice_seconds),
        ),
        services,
        tx,
        rx,
        pending: 0,
        wait: Duration::from_secs(config.weather.timeout_secs.saturating_mul(2).max(1)),
        notices: NoticeBoard::default(),
        layout: options.layout,
    };

    // Location first so its replace doesn't wipe the initial cities
    if options.locate_on_start {
        let action = session.model.mount();
        session.dispatch(action);
        session.wait_all();
    }
    // One at a time so cards keep the order they were given in
    for city in &options.initial_cities {
        if let Some(action) = session.model.submit_search(city) {
            session.dispatch(action);
            session.wait_all();
        }
    }
    session.draw(&mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let action = match commands::parse(&line) {
            Command::Quit => break,
            Command::Empty => continue,
            Command::Help => {
                write!(output, "{}", render::help())?;
                continue;
            }
            Command::List => {
                write!(output, "{}", render::listing(&session.model))?;
                continue;
            }
            Command::Invalid(reason) => {
                writeln!(output, "{}", reason)?;
                continue;
            }
            Command::Search(city) => session.model.submit_search(&city),
            Command::Clear(index) => session.model.clear(index),
            Command::Locate => Some(Action::FetchCurrentLocation),
            Command::ToggleTheme => {
                session.model.toggle_theme();
                None
            }
        };

        if let Some(action) = action {
            session.dispatch(action);
        }
        session.wait_all();
        session.draw(&mut output)?;
    }

    output.flush()?;
    Ok(())
}
