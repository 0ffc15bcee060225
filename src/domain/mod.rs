//! Domain layer for the Bookcase plugin.
//!
//! This module contains the catalog data model, independent of Zellij-specific
//! APIs and of how the catalog is browsed or drawn.
//!
//! # Organization
//!
//! - [`catalog`]: Catalog store (entries, author/genre mappings, page size)
//! - [`entry`]: Entry model and identifiers
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use bookcase::domain::{Catalog, EntryId};
//!
//! let catalog = Catalog::bundled()?;
//! let first = &catalog.entries()[0];
//! assert_eq!(catalog.find(&first.id), Some(first));
//! assert!(catalog.find(&EntryId::new("missing")).is_none());
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

pub mod catalog;
pub mod entry;
pub mod error;

pub use catalog::{author_name, Catalog, Mapping, DEFAULT_PAGE_SIZE};
pub use entry::{Entry, EntryId};
pub use error::{BookcaseError, Result};
