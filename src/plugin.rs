//! Zellij plugin wrapper.
//!
//! This module provides the thin integration layer between the Bookcase library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait to
//! handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, load the catalog, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `Mouse` events
//! 3. **Update**: Map input to library events, delegate to `handle_event`,
//!    execute returned actions
//! 4. **Render**: Call library render function, keep the returned hit map for
//!    the next mouse click
//!
//! # Event Mapping
//!
//! Key and mouse translation lives in the library (`bookcase::app::input`) so
//! it can be tested off-wasm; this shim only forwards.

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookcase::{handle_event, map_key, map_mouse, Action, Config, HitMap};

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the hit map from the last render.
pub struct State {
    /// Core application state from library layer.
    app: bookcase::AppState,

    /// Clickable rows from the last render.
    hits: HitMap,
}

impl Default for State {
    fn default() -> Self {
        Self { app: bookcase::initialize(&Config::default()), hits: HitMap::default() }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// The catalog is read synchronously here; it is small and local, so no
    /// worker is involved and no permissions are requested.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookcase::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = bookcase::initialize(&config);

        subscribe(&[EventType::Key, EventType::Mouse]);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: Event) -> bool {
        let span = tracing::debug_span!("plugin_update");
        let _guard = span.entered();

        let our_event = match event {
            Event::Key(ref key) => map_key(&self.app, key),
            Event::Mouse(ref mouse) => map_mouse(&self.app, mouse, &self.hits),
            _ => None,
        };
        let Some(our_event) = our_event else {
            return false;
        };

        let (should_render, actions) = handle_event(&mut self.app, &our_event);
        tracing::debug!(action_count = actions.len(), should_render, "event handled");
        for action in actions {
            Self::execute_action(action);
        }
        should_render
    }

    /// Renders the plugin UI and keeps the hit map for mouse resolution.
    fn render(&mut self, rows: usize, cols: usize) {
        self.hits = bookcase::render(&self.app, rows, cols);
    }
}

impl State {
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
