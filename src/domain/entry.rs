//! Catalog entry model.
//!
//! An [`Entry`] is one book in the catalog. Entries reference their author and
//! genres by key; display names live in the catalog's mappings. Entries are
//! immutable once loaded and identified by their [`EntryId`].

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier of a catalog entry.
///
/// Also used as the opaque handle carried by rendered list elements, so a
/// click can be resolved back to the entry without inspecting the element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single book in the catalog.
///
/// # Fields
///
/// - `id`: Unique identifier
/// - `title`: Display title
/// - `author`: Key into the catalog's author mapping
/// - `image`: Cover image URI
/// - `description`: Free-text blurb shown in the detail overlay
/// - `published`: Publication date (only the year is displayed)
/// - `genres`: Keys into the catalog's genre mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub author: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "publishedDate", deserialize_with = "deserialize_published")]
    pub published: NaiveDate,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Entry {
    /// Year of publication, as shown in the detail subtitle.
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Whether this entry is tagged with the given genre key.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Accepts either an RFC 3339 timestamp (`2015-04-23T00:00:00.000Z`) or a
/// plain `YYYY-MM-DD` date.
fn deserialize_published<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_published(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid publication date: {raw}"))
    })
}

fn parse_published(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timestamp_and_plain_dates() {
        assert_eq!(
            parse_published("2015-04-23T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2015, 4, 23)
        );
        assert_eq!(parse_published("1965-08-01"), NaiveDate::from_ymd_opt(1965, 8, 1));
        assert_eq!(parse_published("last tuesday"), None);
    }

    #[test]
    fn deserializes_with_original_field_names() {
        let json = r#"{
            "id": "b1",
            "title": "Dune",
            "author": "a1",
            "image": "https://covers.example/dune.jpg",
            "description": "Spice.",
            "publishedDate": "1965-08-01T00:00:00.000Z",
            "genres": ["g1", "g2"],
            "popularity": 42
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id.as_str(), "b1");
        assert_eq!(entry.published_year(), 1965);
        assert!(entry.has_genre("g2"));
        assert!(!entry.has_genre("g3"));
    }

    #[test]
    fn rejects_unparseable_dates() {
        let json = r#"{"id":"b1","title":"t","author":"a","image":"i","published":"soon"}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }
}
