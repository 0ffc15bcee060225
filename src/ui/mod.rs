//! User interface layer: presentation surface, render adapter, theme
//! controller and terminal rendering.
//!
//! # Architecture
//!
//! ```text
//! handler → adapter / theme → Surface ──compute_viewmodel──→ UIViewModel → render → ANSI + HitMap
//! ```
//!
//! The [`adapter`] and [`theme`] modules are the only writers of the
//! [`surface::Surface`]. The renderer only reads it.
//!
//! # Modules
//!
//! - [`surface`]: Mount points and the elements mounted into them
//! - [`adapter`]: Builds list items, option lists and the detail overlay
//! - [`theme`]: Palettes, theme detection and ANSI escape sequences
//! - [`viewmodel`]: Display-ready view of the surface, plus the hit map
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, fitting, wrapping)

pub mod adapter;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod surface;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use surface::{ItemHandle, MountPoint, Surface};
pub use theme::{ThemeName, ThemePalette};
pub use viewmodel::{HitMap, HitTarget, UIViewModel};
