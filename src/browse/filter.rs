//! Filter engine mapping search criteria over the catalog.
//!
//! [`apply_filters`] is a stable filter: the resulting [`MatchedSet`] is a
//! subsequence of the catalog in source order, containing exactly the entries
//! that satisfy the title, author and genre constraints together.

use crate::domain::{Catalog, Entry};

/// Sentinel option value meaning "match anything".
pub const ANY: &str = "any";

/// An author or genre constraint: either the `any` sentinel or one key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Any,
    Key(String),
}

impl Selection {
    /// Interprets a form value. The sentinel and blank values mean [`Selection::Any`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Self::Any
        } else {
            Self::Key(value.to_string())
        }
    }

    /// The option value this selection corresponds to.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Any => ANY,
            Self::Key(key) => key,
        }
    }

    fn admits(&self, predicate: impl FnOnce(&str) -> bool) -> bool {
        match self {
            Self::Any => true,
            Self::Key(key) => predicate(key),
        }
    }
}

/// Search criteria built from one search-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Trimmed title fragment; empty means no title constraint.
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    /// Builds criteria from raw form values, normalizing blanks to the defaults.
    #[must_use]
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: Selection::from_value(author),
            genre: Selection::from_value(genre),
        }
    }

    /// Whether `entry` passes all three constraints.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.title_matches(entry)
            && self.author.admits(|key| entry.author == key)
            && self.genre.admits(|key| entry.has_genre(key))
    }

    fn title_matches(&self, entry: &Entry) -> bool {
        self.title.is_empty() || entry.title.to_lowercase().contains(&self.title.to_lowercase())
    }

    /// Whether these criteria constrain nothing.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_empty() && self.author == Selection::Any && self.genre == Selection::Any
    }
}

/// Ordered result of filtering the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchedSet {
    entries: Vec<Entry>,
}

impl MatchedSet {
    /// Every entry of the catalog, in source order.
    #[must_use]
    pub fn all(catalog: &Catalog) -> Self {
        Self { entries: catalog.entries().to_vec() }
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries within `range`, clamped to the set's bounds.
    #[must_use]
    pub fn window(&self, range: std::ops::Range<usize>) -> &[Entry] {
        let end = range.end.min(self.entries.len());
        let start = range.start.min(end);
        &self.entries[start..end]
    }
}

impl FromIterator<Entry> for MatchedSet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Applies `criteria` to `catalog`, preserving catalog order.
#[must_use]
pub fn apply_filters(criteria: &FilterCriteria, catalog: &Catalog) -> MatchedSet {
    let _span = tracing::debug_span!("apply_filters",
        total_entries = catalog.len(),
        title_len = criteria.title.len(),
        author = criteria.author.value(),
        genre = criteria.genre.value()
    ).entered();

    let matched: MatchedSet = catalog
        .entries()
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect();

    tracing::debug!(matched_count = matched.len(), "filters applied");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, Mapping};

    fn entry(id: &str, title: &str, author: &str, genres: &[&str]) -> Entry {
        Entry {
            id: EntryId::new(id),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("https://covers.example/{id}.jpg"),
            description: String::new(),
            published: chrono::NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                entry("1", "Dune", "herbert", &["scifi"]),
                entry("2", "Emma", "austen", &["romance"]),
                entry("3", "Dune Messiah", "herbert", &["scifi", "classic"]),
                entry("4", "Persuasion", "austen", &["romance", "classic"]),
                entry("5", "Children of Dune", "herbert", &["scifi"]),
            ],
            Mapping::new(),
            Mapping::new(),
            2,
        )
        .unwrap()
    }

    fn ids(set: &MatchedSet) -> Vec<&str> {
        set.entries().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn unconstrained_criteria_return_whole_catalog_in_order() {
        let catalog = catalog();
        let criteria = FilterCriteria::from_form("", ANY, ANY);
        assert!(criteria.is_unconstrained());
        assert_eq!(apply_filters(&criteria, &catalog), MatchedSet::all(&catalog));
    }

    #[test]
    fn title_is_case_insensitive_substring() {
        let catalog = catalog();
        let matched = apply_filters(&FilterCriteria::from_form("DUNE", ANY, ANY), &catalog);
        assert_eq!(ids(&matched), vec!["1", "3", "5"]);
    }

    #[test]
    fn title_is_trimmed() {
        let criteria = FilterCriteria::from_form("   messiah  ", ANY, ANY);
        assert_eq!(criteria.title, "messiah");
        assert_eq!(ids(&apply_filters(&criteria, &catalog())), vec!["3"]);

        let blank = FilterCriteria::from_form("   ", ANY, ANY);
        assert!(blank.is_unconstrained());
    }

    #[test]
    fn author_and_genre_combine_with_and() {
        let catalog = catalog();
        let matched = apply_filters(&FilterCriteria::from_form("", "austen", "classic"), &catalog);
        assert_eq!(ids(&matched), vec!["4"]);

        let matched = apply_filters(&FilterCriteria::from_form("dune", "austen", ANY), &catalog);
        assert!(matched.is_empty());
    }

    #[test]
    fn author_match_is_exact() {
        let matched = apply_filters(&FilterCriteria::from_form("", "herb", ANY), &catalog());
        assert!(matched.is_empty());
    }

    #[test]
    fn results_are_ordered_subsequence_satisfying_every_predicate() {
        let catalog = catalog();
        let criteria = FilterCriteria::from_form("e", ANY, "scifi");
        let matched = apply_filters(&criteria, &catalog);

        let positions: Vec<usize> = matched
            .entries()
            .iter()
            .map(|m| catalog.entries().iter().position(|e| e.id == m.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(matched.entries().iter().all(|e| criteria.matches(e)));
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let criteria = FilterCriteria::from_form("dune", "herbert", "scifi");
        assert_eq!(apply_filters(&criteria, &catalog), apply_filters(&criteria, &catalog));
    }

    #[test]
    fn selection_sentinel_round_trip() {
        assert_eq!(Selection::from_value("any"), Selection::Any);
        assert_eq!(Selection::from_value(""), Selection::Any);
        assert_eq!(Selection::from_value("scifi").value(), "scifi");
        assert_eq!(Selection::Any.value(), ANY);
    }

    #[test]
    fn window_clamps_to_bounds() {
        let set = MatchedSet::all(&catalog());
        assert_eq!(set.window(4..6).len(), 1);
        assert!(set.window(8..10).is_empty());
    }
}
