//! Browsing logic: filtering the catalog and paging through the matches.
//!
//! Both halves are pure with respect to the presentation surface. The
//! application state pairs a [`MatchedSet`] with a [`PageCursor`] and always
//! replaces them together.
//!
//! # Modules
//!
//! - [`filter`]: Filter criteria and the stable catalog filter
//! - [`pagination`]: Page cursor producing render windows

pub mod filter;
pub mod pagination;

pub use filter::{apply_filters, FilterCriteria, MatchedSet, Selection, ANY};
pub use pagination::{remaining_count, PageCursor};
