//! Focus state types for the application.
//!
//! The plugin always has exactly one focused region: the list, or one of the
//! three overlays. Focus decides how keys are interpreted and which footer
//! hints are shown.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::modes::{Focus, SearchField};
//!
//! let focus = Focus::Search(SearchField::Title);
//! assert_eq!(SearchField::Title.next(), SearchField::Genre);
//! assert!(matches!(focus, Focus::Search(_)));
//! ```

/// Control focused within the search overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Free-text title fragment.
    Title,
    /// Genre select.
    Genre,
    /// Author select.
    Author,
}

impl SearchField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Author,
            Self::Author => Self::Title,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Genre => Self::Title,
            Self::Author => Self::Genre,
        }
    }
}

/// Region currently receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Browsing the entry list.
    #[default]
    List,

    /// Editing the search form, with the focused control.
    Search(SearchField),

    /// Choosing a theme in the settings form.
    Settings,

    /// Reading the detail overlay of one entry.
    Detail,
}

/// Overlays that can be dismissed with a cancel/close control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Search,
    Settings,
    Detail,
}
