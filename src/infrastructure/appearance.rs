//! Host colour-scheme signal.
//!
//! Terminals have no standard "prefers dark" query. The plugin accepts an
//! explicit `color_scheme` configuration value and otherwise falls back to
//! the `COLORFGBG` convention (`fg;bg` or `fg;default;bg`, set by rxvt,
//! Konsole, iTerm2 and others).

/// Environment variable carrying the terminal's foreground/background indices.
const COLORFGBG: &str = "COLORFGBG";

/// Whether the host prefers a dark colour scheme, or `None` if it gives no
/// signal.
///
/// `color_scheme` (from configuration) wins when it is `dark` or `light`.
#[must_use]
pub fn host_prefers_dark(color_scheme: Option<&str>) -> Option<bool> {
    if let Some(preference) = color_scheme.and_then(scheme_preference) {
        return Some(preference);
    }
    std::env::var(COLORFGBG).ok().as_deref().and_then(colorfgbg_prefers_dark)
}

/// Parses a `color_scheme` value: `dark` or `light`, case-insensitive.
#[must_use]
pub fn scheme_preference(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Reads the background index from a `COLORFGBG` value. Indices 0-6 and 8
/// are the dark ANSI colours.
#[must_use]
pub fn colorfgbg_prefers_dark(value: &str) -> Option<bool> {
    let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_scheme_wins() {
        assert_eq!(host_prefers_dark(Some("Dark")), Some(true));
        assert_eq!(host_prefers_dark(Some("light")), Some(false));
    }

    #[test]
    fn scheme_values() {
        assert_eq!(scheme_preference(" DARK "), Some(true));
        assert_eq!(scheme_preference("sepia"), None);
    }

    #[test]
    fn colorfgbg_background_index() {
        assert_eq!(colorfgbg_prefers_dark("15;0"), Some(true));
        assert_eq!(colorfgbg_prefers_dark("0;default;8"), Some(true));
        assert_eq!(colorfgbg_prefers_dark("0;15"), Some(false));
        assert_eq!(colorfgbg_prefers_dark("0;7"), Some(false));
        assert_eq!(colorfgbg_prefers_dark("15;default"), None);
        assert_eq!(colorfgbg_prefers_dark(""), None);
    }
}
