//! Light/dark palettes rendered as 24-bit ANSI colours.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn fg(self) -> String {
        format!("\u{1b}[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    pub fn bg(self) -> String {
        format!("\u{1b}[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

pub const RESET: &str = "\u{1b}[0m";
pub const BOLD: &str = "\u{1b}[1m";

/// Colours for one theme. `None` background means "leave the terminal's own".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page_fg: Rgb,
    pub page_bg: Option<Rgb>,
    pub card_fg: Rgb,
    /// Card background, pre-blended against the page
    pub card_bg: Rgb,
    pub tile_fg: Rgb,
    pub tile_bg: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
}

impl Palette {
    /// Black text on the terminal background, dark translucent cards
    pub const LIGHT: Palette = Palette {
        page_fg: Rgb(0, 0, 0),
        page_bg: None,
        card_fg: Rgb(255, 255, 255),
        card_bg: Rgb(51, 51, 51),
        tile_fg: Rgb(0, 0, 0),
        tile_bg: Rgb(153, 153, 153),
        success: Rgb(56, 161, 105),
        warning: Rgb(221, 107, 32),
    };

    /// White text on rgb(32,31,31), light translucent cards
    pub const DARK: Palette = Palette {
        page_fg: Rgb(255, 255, 255),
        page_bg: Some(Rgb(32, 31, 31)),
        card_fg: Rgb(0, 0, 0),
        card_bg: Rgb(188, 188, 188),
        tile_fg: Rgb(255, 255, 255),
        tile_bg: Rgb(94, 94, 94),
        success: Rgb(104, 211, 145),
        warning: Rgb(246, 173, 85),
    };

    /// Escape sequence that switches to the page colours
    pub fn page(&self) -> String {
        match self.page_bg {
            Some(bg) => format!("{}{}", self.page_fg.fg(), bg.bg()),
            None => self.page_fg.fg(),
        }
    }

    pub fn card(&self) -> String {
        format!("{}{}", self.card_fg.fg(), self.card_bg.bg())
    }

    pub fn tile(&self) -> String {
        format!("{}{}", self.tile_fg.fg(), self.tile_bg.bg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn labels() {
        assert_eq!(Theme::Light.label(), "Light");
        assert_eq!(Theme::Dark.label(), "Dark");
    }

    #[test]
    fn cards_invert_page_colours() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_eq!(light.page_fg, dark.card_fg);
        assert_eq!(dark.page_fg, light.card_fg);
        assert_eq!(dark.page_bg, Some(Rgb(32, 31, 31)));
        assert!(light.page_bg.is_none());
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Rgb(1, 2, 3).fg(), "\u{1b}[38;2;1;2;3m");
        assert_eq!(Rgb(1, 2, 3).bg(), "\u{1b}[48;2;1;2;3m");
        assert!(Theme::Dark.palette().page().contains("48;2;32;31;31"));
    }
}
