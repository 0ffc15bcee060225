//! Theme controller and ANSI escape sequence generation.
//!
//! The plugin has two themes, `day` and `night`, each reduced to a two-colour
//! [`ThemePalette`]. The palette is written into the surface's `:root` style
//! variables (`--color-dark`, `--color-light`); the terminal renderer draws text
//! with the dark slot and backgrounds with the light slot, so switching theme
//! swaps the two.
//!
//! # Palettes
//!
//! | theme   | `--color-dark`  | `--color-light` |
//! |---------|-----------------|-----------------|
//! | `day`   | `10, 10, 20`    | `255, 255, 255` |
//! | `night` | `255, 255, 255` | `10, 10, 20`    |
//!
//! # Example
//!
//! ```rust
//! use bookcase::ui::theme::{derive_colors, detect_theme, ThemeName};
//!
//! let theme = detect_theme(|| Some(true));
//! assert_eq!(theme, ThemeName::Night);
//!
//! let palette = derive_colors(theme);
//! assert_eq!(palette.dark, derive_colors(ThemeName::Day).light);
//! ```

use crate::domain::error::{BookcaseError, Result};
use crate::ui::surface::{MountPoint, Surface};
use std::fmt;
use std::str::FromStr;

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend towards `other`; `weight` is the share of `other` in percent.
    #[must_use]
    pub fn blend(self, other: Self, weight: u8) -> Self {
        let weight = u16::from(weight.min(100));
        let mix = |a: u8, b: u8| -> u8 {
            let value = (u16::from(a) * (100 - weight) + u16::from(b) * weight) / 100;
            u8::try_from(value).unwrap_or(u8::MAX)
        };
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    /// Formats as a style-variable value, e.g. `10, 10, 20`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

/// Accent used for selection and focus, independent of theme.
pub const ACCENT: Rgb = Rgb(0, 150, 255);

/// Selectable theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    Day,
    Night,
}

impl ThemeName {
    pub const ALL: [Self; 2] = [Self::Day, Self::Night];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// Display text of the theme option in the settings form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = BookcaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => Err(BookcaseError::Config(format!("unknown theme: {other}"))),
        }
    }
}

/// The two colours a theme resolves to.
///
/// `dark` holds the foreground (text) colour and `light` the background, so
/// under `night` the "dark" slot carries the lighter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub dark: Rgb,
    pub light: Rgb,
}

/// Derives the palette for `theme`.
#[must_use]
pub const fn derive_colors(theme: ThemeName) -> ThemePalette {
    match theme {
        ThemeName::Night => ThemePalette { dark: PAPER, light: INK },
        ThemeName::Day => ThemePalette { dark: INK, light: PAPER },
    }
}

/// Writes `palette` into the `:root` style variables and records `theme` as
/// the settings form's selected value.
pub fn apply_palette(surface: &mut Surface, theme: ThemeName, palette: ThemePalette) {
    surface.style.color_dark = palette.dark;
    surface.style.color_light = palette.light;
    tracing::debug!(
        selector = MountPoint::StyleRoot.selector(),
        color_dark = %palette.dark,
        color_light = %palette.light,
        "palette applied"
    );

    surface.settings.theme = theme;
    tracing::debug!(selector = MountPoint::SettingsTheme.selector(), theme = %theme, "theme selection updated");
}

/// Picks the initial theme from the host's ambient colour-scheme signal.
///
/// `signal` answers whether the host prefers a dark scheme; `None` means no
/// signal is available, which selects `day`.
#[must_use]
pub fn detect_theme<F>(signal: F) -> ThemeName
where
    F: FnOnce() -> Option<bool>,
{
    match signal() {
        Some(true) => ThemeName::Night,
        Some(false) | None => ThemeName::Day,
    }
}

/// ANSI escape sequence helpers.
pub struct Ansi;

impl Ansi {
    /// 24-bit foreground colour (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(color: Rgb) -> String {
        format!("\u{001b}[38;2;{};{};{}m", color.0, color.1, color.2)
    }

    /// 24-bit background colour (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(color: Rgb) -> String {
        format!("\u{001b}[48;2;{};{};{}m", color.0, color.1, color.2)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}
