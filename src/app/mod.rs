//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the browse, domain
//! and UI layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Mouse → input → Event → handle_event → State Mutations → Actions → Side Effects
//!                 ↑                                   ↓
//!                 └──────────── HitMap ←──── render ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic (the interaction router)
//! - [`input`]: Key and mouse translation per focus
//! - [`modes`]: Focus state types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::{handle_event, AppState, Event};
//! use bookcase::domain::Catalog;
//! use bookcase::ui::theme::ThemeName;
//!
//! let mut state = AppState::new(Catalog::bundled()?, ThemeName::Day);
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown);
//! assert!(should_render && actions.is_empty());
//! assert_eq!(state.surface.selected, 1);
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use input::{map_key, map_mouse};
pub use modes::{Focus, Overlay, SearchField};
pub use state::AppState;
