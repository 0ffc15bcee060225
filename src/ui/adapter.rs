//! Render adapter: turns entries and mappings into surface elements.
//!
//! Builders (`render_*`) are pure and return elements; mounting functions
//! write into exactly one mount point of the [`Surface`]. None of these
//! functions read or change application state.

use crate::browse::ANY;
use crate::domain::{author_name, Entry, Mapping};
use crate::ui::surface::{ItemHandle, ListItemElement, MountPoint, OptionElement, Surface};

/// Text of the message shown when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";

/// Label of the "match anything" genre option.
pub const ALL_GENRES_LABEL: &str = "All Genres";

/// Label of the "match anything" author option.
pub const ALL_AUTHORS_LABEL: &str = "All Authors";

/// Builds one preview element per entry, tagged with the entry's handle.
#[must_use]
pub fn render_entries(entries: &[Entry], authors: &Mapping) -> Vec<ListItemElement> {
    entries
        .iter()
        .map(|entry| ListItemElement {
            handle: ItemHandle::new(entry.id.clone()),
            title: entry.title.clone(),
            author_key: entry.author.clone(),
            author_name: author_name(authors, &entry.author).to_string(),
            image: entry.image.clone(),
        })
        .collect()
}

/// Builds a select's options: the `any` sentinel labelled `all_label`, then
/// one option per mapping entry in the mapping's order.
#[must_use]
pub fn render_option_list(mapping: &Mapping, all_label: &str) -> Vec<OptionElement> {
    std::iter::once(OptionElement { value: ANY.to_string(), text: all_label.to_string() })
        .chain(mapping.iter().map(|(key, name)| OptionElement { value: key.clone(), text: name.clone() }))
        .collect()
}

/// Replaces the list contents with `items`.
pub fn replace_list_items(surface: &mut Surface, items: Vec<ListItemElement>) {
    tracing::debug!(selector = MountPoint::ListItems.selector(), count = items.len(), "list replaced");
    surface.list_items = items;
    surface.selected = surface.selected.min(surface.list_items.len().saturating_sub(1));
}

/// Moves the viewport (and keyboard cursor) back to the first list element.
pub fn scroll_to_top(surface: &mut Surface) {
    surface.selected = 0;
}

/// Appends `items` after the elements already in the list.
pub fn append_list_items(surface: &mut Surface, items: Vec<ListItemElement>) {
    tracing::debug!(
        selector = MountPoint::ListItems.selector(),
        count = items.len(),
        existing = surface.list_items.len(),
        "list extended"
    );
    surface.list_items.extend(items);
}

/// Mounts option elements into one of the search form's selects.
///
/// `mount` must be [`MountPoint::SearchGenres`] or [`MountPoint::SearchAuthors`];
/// any other mount point is ignored.
pub fn mount_options(surface: &mut Surface, mount: MountPoint, options: Vec<OptionElement>) {
    let target = match mount {
        MountPoint::SearchGenres => &mut surface.search.genre_options,
        MountPoint::SearchAuthors => &mut surface.search.author_options,
        other => {
            tracing::warn!(selector = other.selector(), "mount point does not hold options");
            return;
        }
    };
    tracing::debug!(selector = mount.selector(), count = options.len(), "options mounted");
    *target = options;
}

/// Fills the detail overlay for `entry` and opens it.
pub fn render_detail_overlay(surface: &mut Surface, entry: &Entry, authors: &Mapping) {
    let detail = &mut surface.detail;
    detail.title = entry.title.clone();
    detail.subtitle = format!("{} ({})", author_name(authors, &entry.author), entry.published_year());
    detail.description = entry.description.clone();
    detail.blur_image = entry.image.clone();
    detail.image = entry.image.clone();
    detail.open = true;

    tracing::debug!(selector = MountPoint::ListActive.selector(), entry_id = %entry.id, "detail overlay opened");
}

/// Shows or hides the no-results message.
pub fn set_message_visible(surface: &mut Surface, visible: bool) {
    tracing::debug!(selector = MountPoint::ListMessage.selector(), visible, "message visibility set");
    surface.message_visible = visible;
}

/// Updates the show-more button with the number of entries left to draw.
pub fn set_show_more(surface: &mut Surface, remaining: usize) {
    let button = &mut surface.show_more;
    button.remaining = remaining;
    button.label = format!("Show more ({remaining})");
    button.disabled = remaining == 0;

    tracing::debug!(selector = MountPoint::ListButton.selector(), remaining, "show-more button updated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryId;
    use chrono::NaiveDate;

    fn entry(id: &str, author: &str) -> Entry {
        Entry {
            id: EntryId::new(id),
            title: format!("Book {id}"),
            author: author.to_string(),
            image: format!("https://covers.example/{id}.jpg"),
            description: "About a book.".to_string(),
            published: NaiveDate::from_ymd_opt(1984, 6, 8).unwrap(),
            genres: vec![],
        }
    }

    fn authors() -> Mapping {
        let mut authors = Mapping::new();
        authors.insert("b".to_string(), "Bea".to_string());
        authors.insert("a".to_string(), "Ann".to_string());
        authors
    }

    #[test]
    fn entries_carry_handles_and_author_names() {
        let items = render_entries(&[entry("1", "a"), entry("2", "zz")], &authors());
        assert_eq!(items[0].handle.entry_id().as_str(), "1");
        assert_eq!(items[0].author_name, "Ann");
        assert_eq!(items[0].author_key, "a");
        assert_eq!(items[1].author_name, "zz");
        assert_eq!(items[1].image, "https://covers.example/2.jpg");
    }

    #[test]
    fn option_list_starts_with_any() {
        let options = render_option_list(&authors(), ALL_AUTHORS_LABEL);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["any", "a", "b"]);
        assert_eq!(options[0].text, "All Authors");
        assert_eq!(options[2].text, "Bea");
    }

    #[test]
    fn detail_overlay_subtitle_and_images() {
        let mut surface = Surface::default();
        render_detail_overlay(&mut surface, &entry("7", "b"), &authors());
        assert!(surface.detail.open);
        assert_eq!(surface.detail.subtitle, "Bea (1984)");
        assert_eq!(surface.detail.image, surface.detail.blur_image);
        assert_eq!(surface.detail.description, "About a book.");
    }

    #[test]
    fn append_keeps_existing_items() {
        let mut surface = Surface::default();
        replace_list_items(&mut surface, render_entries(&[entry("1", "a")], &authors()));
        append_list_items(&mut surface, render_entries(&[entry("2", "a")], &authors()));
        assert_eq!(surface.list_items.len(), 2);
        assert_eq!(surface.list_items[0].title, "Book 1");
    }

    #[test]
    fn replacing_clamps_cursor() {
        let mut surface = Surface::default();
        replace_list_items(&mut surface, render_entries(&[entry("1", "a"), entry("2", "a")], &authors()));
        surface.selected = 1;
        replace_list_items(&mut surface, render_entries(&[entry("3", "a")], &authors()));
        assert_eq!(surface.selected, 0);
        surface.selected = 0;
        replace_list_items(&mut surface, Vec::new());
        assert_eq!(surface.selected, 0);
    }

    #[test]
    fn show_more_disables_at_zero() {
        let mut surface = Surface::default();
        set_show_more(&mut surface, 3);
        assert_eq!(surface.show_more.label, "Show more (3)");
        assert!(!surface.show_more.disabled);
        set_show_more(&mut surface, 0);
        assert!(surface.show_more.disabled);
    }

    #[test]
    fn options_only_mount_into_selects() {
        let mut surface = Surface::default();
        mount_options(&mut surface, MountPoint::ListItems, render_option_list(&authors(), "All"));
        assert!(surface.search.genre_options.is_empty());
        mount_options(&mut surface, MountPoint::SearchGenres, render_option_list(&authors(), "All"));
        assert_eq!(surface.search.genre_options.len(), 3);
    }
}
