//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for working with the Zellij plugin sandbox
//! environment: path handling where the host filesystem is mounted under
//! `/host`, and reading the host's colour-scheme preference.

pub mod appearance;
pub mod paths;

pub use appearance::host_prefers_dark;
pub use paths::{expand_tilde, get_data_dir};
