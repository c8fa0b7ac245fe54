//! Theme and color palette definitions for the terminal UI.

use ratatui::style::{Color, palette::tailwind};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Color palette derived from the current theme.
#[derive(Clone, Debug)]
pub struct Colors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub header_text: Color,
    pub selected_fg: Color,
    pub text: Color,
    pub border_color: Color,
    pub price: Color,
    pub gray: Color,
    pub chip_bg: Color,
    pub chip_active_bg: Color,
    pub input_editing: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Colors::new(Theme::default().to_palette(false), false)
    }
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        let basic_colors = Self {
            buffer_bg: Color::Black,
            header_bg: color.c900,
            header_text: Color::White,
            selected_fg: color.c400,
            text: Color::White,
            border_color: color.c400,
            price: Color::LightGreen,
            gray: Color::DarkGray,
            chip_bg: Color::DarkGray,
            chip_active_bg: color.c600,
            input_editing: Color::LightYellow,
        };

        let tw_colors = Self {
            buffer_bg: tailwind::SLATE.c950,
            header_bg: color.c600,
            header_text: tailwind::SLATE.c50,
            selected_fg: color.c400,
            text: tailwind::SLATE.c200,
            border_color: color.c400,
            price: tailwind::GREEN.c500,
            gray: tailwind::SLATE.c500,
            chip_bg: tailwind::SLATE.c700,
            chip_active_bg: color.c600,
            input_editing: tailwind::AMBER.c600,
        };

        if true_color_enabled {
            tw_colors
        } else {
            basic_colors
        }
    }
}

/// Available color themes for the application.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Blue,
    Emerald,
    Indigo,
    Red,
}

// Fallback palettes for terminals without true color support.
const fn basic_palette(light: Color, dark: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: dark,
        c600: dark,
        c700: dark,
        c800: dark,
        c900: dark,
        c950: dark,
    }
}

const BASIC_BLUE_PALLETE: tailwind::Palette = basic_palette(Color::LightCyan, Color::Cyan);
const BASIC_RED_PALLETE: tailwind::Palette = basic_palette(Color::LightRed, Color::Red);
const BASIC_GREEN_PALLETE: tailwind::Palette = basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA_PALLETE: tailwind::Palette =
    basic_palette(Color::LightMagenta, Color::Magenta);

impl Theme {
    /// Lenient lookup for persisted names: unknown values fall back to
    /// the default theme.
    pub fn from_string(value: &str) -> Theme {
        value.parse().unwrap_or_else(|_| {
            log::warn!("unknown theme {value:?}, using {}", Theme::default());
            Theme::default()
        })
    }

    /// Returns the theme after this one, wrapping around to the first.
    pub fn next(self) -> Theme {
        Theme::iter()
            .cycle()
            .skip_while(|t| *t != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(self, true_color_enabled: bool) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALLETE,
                Theme::Red => &BASIC_RED_PALLETE,
                Theme::Indigo => &BASIC_MAGENTA_PALLETE,
                Theme::Emerald => &BASIC_GREEN_PALLETE,
            }
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
