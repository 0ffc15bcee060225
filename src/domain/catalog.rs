//! Catalog store: the immutable source list of entries and its lookup mappings.
//!
//! A [`Catalog`] is loaded once at startup from a JSON or TOML document (or the
//! bundled sample catalog) and is read-only afterwards. It owns the entries in
//! their source order, the author and genre display-name mappings, and the page
//! size used by the list.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "page_size": 36,
//!   "authors": { "a1": "Frank Herbert" },
//!   "genres": { "g1": "Science Fiction" },
//!   "books": [
//!     {
//!       "id": "b1",
//!       "title": "Dune",
//!       "author": "a1",
//!       "image": "https://covers.example/dune.jpg",
//!       "description": "...",
//!       "published": "1965-08-01T00:00:00.000Z",
//!       "genres": ["g1"]
//!     }
//!   ]
//! }
//! ```

use crate::domain::entry::{Entry, EntryId};
use crate::domain::error::{BookcaseError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Number of entries drawn per page when the catalog does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Key → display name mapping, iterated in key order.
pub type Mapping = BTreeMap<String, String>;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    books: Vec<Entry>,
    #[serde(default)]
    authors: Mapping,
    #[serde(default)]
    genres: Mapping,
    #[serde(default = "default_page_size", alias = "BOOKS_PER_PAGE")]
    page_size: usize,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Immutable catalog of entries with author and genre mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
    authors: Mapping,
    genres: Mapping,
    page_size: usize,
}

impl Catalog {
    /// Builds a catalog, validating entry identity and page size.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Catalog`] if `page_size` is zero or two entries
    /// share an id.
    pub fn new(entries: Vec<Entry>, authors: Mapping, genres: Mapping, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(BookcaseError::Catalog("page size must be at least 1".to_string()));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(&entry.id) {
                return Err(BookcaseError::Catalog(format!("duplicate entry id: {}", entry.id)));
            }
            if !authors.contains_key(&entry.author) {
                tracing::debug!(entry_id = %entry.id, author = %entry.author, "entry references unknown author");
            }
        }

        Ok(Self { entries, authors, genres, page_size })
    }

    /// An empty catalog, used when no catalog source can be loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            authors: Mapping::new(),
            genres: Mapping::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Parses a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the catalog is invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Parses a catalog from a TOML document with the same shape as the JSON
    /// format (`[[books]]` tables, `[authors]` and `[genres]` tables).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the catalog is invalid.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let doc: CatalogDocument = toml::from_str(toml_str)?;
        Self::from_document(doc)
    }

    /// Loads a catalog file, choosing the parser by extension.
    ///
    /// `.toml` files are parsed as TOML; everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let catalog = if is_toml {
            Self::from_toml_str(&contents)?
        } else {
            Self::from_json_str(&contents)?
        };

        tracing::debug!(entries = catalog.len(), "catalog loaded from file");
        Ok(catalog)
    }

    /// The sample catalog compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document is invalid.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    fn from_document(doc: CatalogDocument) -> Result<Self> {
        Self::new(doc.books, doc.authors, doc.genres, doc.page_size)
    }

    /// Returns a copy of this catalog with a different page size.
    ///
    /// # Errors
    ///
    /// Returns [`BookcaseError::Catalog`] if `page_size` is zero.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(BookcaseError::Catalog("page size must be at least 1".to_string()));
        }
        self.page_size = page_size;
        Ok(self)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub const fn authors(&self) -> &Mapping {
        &self.authors
    }

    #[must_use]
    pub const fn genres(&self) -> &Mapping {
        &self.genres
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id across the whole catalog.
    #[must_use]
    pub fn find(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }
}

/// Resolves an author key to its display name, falling back to the key itself.
#[must_use]
pub fn author_name<'a>(authors: &'a Mapping, key: &'a str) -> &'a str {
    authors.get(key).map_or(key, String::as_str)
}
