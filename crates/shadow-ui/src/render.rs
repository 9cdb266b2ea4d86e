//! Text rendering of the dashboard.
//!
//! Every function returns a `String` so the event loop decides where it goes.

use chrono::{Datelike, NaiveDateTime, Timelike};
use shadow_weather::{Notice, NoticeStatus};

use crate::models::{DashboardModel, Entry};
use crate::theme::{Palette, BOLD, RESET};

pub const TITLE: &str = "Welcome To Shadow Weather App";

/// Terminals narrower than this get the compact layout
pub const COMPACT_BELOW: usize = 60;

const WIDE_CARD: usize = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Wide,
    Compact { width: usize },
}

impl Layout {
    pub fn from_width(columns: usize) -> Self {
        if columns < COMPACT_BELOW {
            Layout::Compact { width: columns }
        } else {
            Layout::Wide
        }
    }

    /// Layout for the current terminal, read from `COLUMNS`
    pub fn from_env() -> Self {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|c| c.trim().parse::<usize>().ok())
            .map(Self::from_width)
            .unwrap_or(Layout::Wide)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Layout::Wide => "Enter City name...",
            Layout::Compact { .. } => "Enter city...",
        }
    }

    fn card_width(self) -> usize {
        match self {
            Layout::Wide => WIDE_CARD,
            Layout::Compact { width } => width.clamp(24, WIDE_CARD),
        }
    }
}

/// "1st", "2nd", "11th", "23rd"
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// "October 17th 2026"
pub fn format_date(at: NaiveDateTime) -> String {
    format!(
        "{} {} {}",
        at.format("%B"),
        ordinal(at.day()),
        at.year()
    )
}

/// "3:05 pm"
pub fn format_time(at: NaiveDateTime) -> String {
    let (pm, hour) = at.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        at.minute(),
        if pm { "pm" } else { "am" }
    )
}

pub fn header(model: &DashboardModel, layout: Layout) -> String {
    let palette = model.theme().palette();
    let mut out = String::new();
    out.push_str(&palette.page());
    out.push_str(BOLD);
    out.push_str(TITLE);
    out.push_str(RESET);
    out.push('\n');
    out.push_str(&palette.page());
    out.push_str(&format!(
        "Theme: {}  |  Search: {}",
        model.theme().label(),
        layout.placeholder()
    ));
    out.push_str(RESET);
    out.push('\n');
    out
}

/// A single weather card. `position` is the 1-based number shown in the
/// clear hint; `now` is the local clock at draw time.
pub fn card(
    entry: &Entry,
    position: usize,
    palette: &Palette,
    layout: Layout,
    now: NaiveDateTime,
) -> String {
    let record = &entry.record;
    let width = layout.card_width();

    let card_lines = [
        format!("{} {} °C", record.icon.glyph(), record.temperature),
        record.name.clone(),
        format!("Weather: {}", record.description),
        format!("{}  {}", format_date(now), format_time(now)),
    ];
    let tile_lines = [
        format!("Wind Speed   {:.2} km/h", record.wind_speed_kmh()),
        format!("Humidity     {} %", record.humidity),
        format!("Heat Index   {:.2}", record.heat_index()),
    ];

    let mut out = String::new();
    let hint = format!("[clear {}]", position);
    out.push_str(&line(&palette.card(), &right_align(&hint, width), width));
    for text in &card_lines {
        out.push_str(&line(&palette.card(), text, width));
    }
    for text in &tile_lines {
        out.push_str(&line(&palette.tile(), text, width));
    }
    out
}

pub fn notices(notices: &[Notice], palette: &Palette) -> String {
    let mut out = String::new();
    for notice in notices {
        let (colour, mark) = match notice.status {
            NoticeStatus::Success => (palette.success, "✔"),
            NoticeStatus::Warning => (palette.warning, "!"),
        };
        out.push_str(&colour.fg());
        out.push_str(&format!("{} {}", mark, notice.title));
        if let Some(detail) = &notice.detail {
            out.push_str(&format!(" ({})", detail));
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}

/// Full screen: header, active notices, then cards or a loading line
pub fn dashboard(
    model: &DashboardModel,
    active: &[Notice],
    layout: Layout,
    now: NaiveDateTime,
) -> String {
    let palette = model.theme().palette();
    let mut out = header(model, layout);
    out.push('\n');
    out.push_str(&notices(active, &palette));

    if model.is_empty() {
        out.push_str(&palette.page());
        out.push_str("Loading weather...");
        out.push_str(RESET);
        out.push('\n');
        return out;
    }

    for (i, entry) in model.entries().iter().enumerate() {
        out.push('\n');
        out.push_str(&card(entry, i + 1, &palette, layout, now));
    }
    out
}

pub fn help() -> &'static str {
    "Commands:\n  \
     <city> | search <city>   add a weather card\n  \
     clear <n>                remove card n\n  \
     theme                    switch light/dark\n  \
     locate                   refresh current location\n  \
     list                     list cards\n  \
     help                     show this help\n  \
     quit                     exit\n"
}

pub fn listing(model: &DashboardModel) -> String {
    if model.is_empty() {
        return "No weather cards.\n".to_string();
    }
    model
        .locations()
        .enumerate()
        .map(|(i, l)| format!("{}. {}\n", i + 1, l))
        .collect()
}

fn line(colours: &str, text: &str, width: usize) -> String {
    let len = text.chars().count();
    let text: String = if len > width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    };
    format!("{} {} {}\n", colours, text, RESET)
}

fn right_align(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}
