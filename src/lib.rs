//! Bookcase: a Zellij plugin for browsing a book catalog.
//!
//! Bookcase shows a catalog of books as a paginated list and lets the user:
//! - Narrow the list by title fragment, author and genre
//! - Draw further pages with a "Show more" button
//! - Open a detail panel for any entry
//! - Switch between a day and a night colour theme

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Input mapping (keys, mouse + hit map)            │
//! │  - Event handling (interaction router)              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Browse Layer          │   │ UI Layer (ui/)          │
//! │ (browse/)             │   │ - Presentation surface  │
//! │ - Filter engine       │   │ - Render adapter        │
//! │ - Page cursor         │   │ - Theme controller      │
//! │                       │   │ - Terminal rendering    │
//! └───────────────────────┘   └─────────────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths, colour-scheme signal              │
//! │  - Catalog, entries, errors (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing fmt layer → rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`browse`]: Filter engine and pagination cursor
//! - [`domain`]: Catalog, entries and errors
//! - [`infrastructure`]: Sandbox paths and host appearance
//! - [`ui`]: Surface, render adapter, themes and terminal rendering
//! - [`observability`]: File-based tracing output
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookcase.wasm" {
//!         catalog_file "~/books/catalog.json"
//!         page_size "12"
//!         theme "night"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. Parse configuration ([`Config::from_zellij`])
//! 2. Initialize tracing ([`observability::init_tracing`])
//! 3. Load the catalog: configured file, else the bundled sample
//! 4. Pick the theme: configured, else detected from the host
//! 5. Build [`AppState`]: first page drawn, option lists filled, palette applied
//!
//! # Example
//!
//! ```rust
//! use bookcase::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [Event::OpenSearch, Event::Char('d'), Event::Char('u'), Event::SearchSubmit] {
//!     let (_should_render, actions) = handle_event(&mut state, &event);
//!     assert!(actions.is_empty());
//! }
//! assert!(state.surface.list_items.iter().all(|item| item.title.to_lowercase().contains("du")));
//! ```

pub mod app;
pub mod browse;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, map_key, map_mouse, Action, AppState, Event, Focus};
pub use domain::{BookcaseError, Catalog, Entry, EntryId, Result};
pub use ui::{render, HitMap, ThemeName};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/bookcase.wasm" {
///     catalog_file "~/books/catalog.toml"
///     page_size "12"
///     theme "day"
///     color_scheme "dark"
///     trace_level "bookcase=debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Catalog document to load (`.toml` or JSON).
    ///
    /// `~` expands to the sandbox home mount. Default: the bundled sample.
    pub catalog_file: Option<String>,

    /// Entries per page, overriding the catalog's own value.
    pub page_size: Option<usize>,

    /// Initial theme, `day` or `night`. Default: detected from the host.
    pub theme_name: Option<String>,

    /// Host colour-scheme hint, `dark` or `light`, used when no theme is set.
    pub color_scheme: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Never fails: blank values are treated as unset and a `page_size` that
    /// is not a positive integer is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookcase::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/books.json".to_string());
    /// map.insert("page_size".to_string(), "12".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("~/books.json"));
    /// assert_eq!(config.page_size, Some(12));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| config.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()).map(String::from);

        let page_size = value("page_size").and_then(|s| s.parse::<usize>().ok()).filter(|&n| n > 0);

        Self {
            catalog_file: value("catalog_file"),
            page_size,
            theme_name: value("theme"),
            color_scheme: value("color_scheme"),
            trace_level: value("trace_level"),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Loads the catalog (see [`load_catalog`]), resolves the initial theme and
/// builds the [`AppState`] with the first page drawn. Never panics: every
/// failure degrades to a fallback and is logged.
///
/// # Example
///
/// ```rust
/// use bookcase::{initialize, Config, ThemeName};
///
/// let config = Config { theme_name: Some("night".to_string()), ..Default::default() };
/// let state = initialize(&config);
/// assert_eq!(state.theme, ThemeName::Night);
/// assert!(!state.surface.list_items.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();
    tracing::debug!("initializing bookcase plugin");

    let catalog = load_catalog(config);
    let theme = resolve_theme(config);
    tracing::info!(entries = catalog.len(), page_size = catalog.page_size(), theme = %theme, "catalog ready");

    AppState::new(catalog, theme)
}

/// Loads the catalog named by the configuration.
///
/// Order: `catalog_file` if set, else the bundled sample. A configured file
/// that fails to load falls back to the bundled sample, and an invalid bundled
/// sample falls back to an empty catalog. `page_size` is applied last.
#[must_use]
pub fn load_catalog(config: &Config) -> Catalog {
    let loaded = match &config.catalog_file {
        Some(path) => {
            let path = infrastructure::expand_tilde(path);
            Catalog::from_file(&path).or_else(|e| {
                tracing::warn!(path = %path, error = %e, "failed to load catalog file, using bundled catalog");
                Catalog::bundled()
            })
        }
        None => Catalog::bundled(),
    };

    let catalog = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled catalog is invalid, starting empty");
        Catalog::empty()
    });

    match config.page_size {
        Some(page_size) => catalog.clone().with_page_size(page_size).unwrap_or_else(|e| {
            tracing::warn!(page_size, error = %e, "ignoring configured page size");
            catalog
        }),
        None => catalog,
    }
}

/// Picks the initial theme: the configured name if it parses, otherwise the
/// host's colour-scheme signal.
#[must_use]
pub fn resolve_theme(config: &Config) -> ThemeName {
    if let Some(name) = &config.theme_name {
        match name.parse::<ThemeName>() {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!(theme_name = %name, error = %e, "unknown theme, detecting from host"),
        }
    }
    ui::theme::detect_theme(|| infrastructure::host_prefers_dark(config.color_scheme.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_is_default() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", " ~/books.toml "),
            ("page_size", "4"),
            ("theme", "night"),
            ("color_scheme", "dark"),
            ("trace_level", "debug"),
        ]));
        assert_eq!(config.catalog_file.as_deref(), Some("~/books.toml"));
        assert_eq!(config.page_size, Some(4));
        assert_eq!(config.theme_name.as_deref(), Some("night"));
        assert_eq!(config.color_scheme.as_deref(), Some("dark"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_page_size_is_ignored() {
        assert_eq!(Config::from_zellij(&map(&[("page_size", "0")])).page_size, None);
        assert_eq!(Config::from_zellij(&map(&[("page_size", "many")])).page_size, None);
        assert_eq!(Config::from_zellij(&map(&[("catalog_file", "  ")])).catalog_file, None);
    }

    #[test]
    fn configured_theme_wins_over_scheme() {
        let config = Config {
            theme_name: Some("day".to_string()),
            color_scheme: Some("dark".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config), ThemeName::Day);

        let config = Config {
            theme_name: Some("dusk".to_string()),
            color_scheme: Some("dark".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config), ThemeName::Night);
    }

    #[test]
    fn page_size_override_applies() {
        let config = Config { page_size: Some(2), ..Config::default() };
        assert_eq!(load_catalog(&config).page_size(), 2);

        let config = Config { page_size: Some(0), ..Config::default() };
        assert_eq!(load_catalog(&config).page_size(), Catalog::bundled().unwrap().page_size());
    }
}
