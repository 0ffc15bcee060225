//! Presentation surface: the named mount points the plugin draws into.
//!
//! The surface is a plain data model of everything visible: the list of
//! rendered entries, the show-more button, the no-results message, the three
//! overlays and their form controls, and the two style variables. The render
//! adapter and theme controller write into it; the terminal renderer reads it.
//! Nothing else in the surface carries application state.
//!
//! Every mount point has a stable selector (see [`MountPoint::selector`]),
//! used to label writes in the logs.

use crate::browse::ANY;
use crate::domain::EntryId;
use crate::ui::theme::{derive_colors, Rgb, ThemeName};

/// A named attachment point on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPoint {
    ListItems,
    ListMessage,
    ListButton,
    ListActive,
    SearchOverlay,
    SearchTitle,
    SearchGenres,
    SearchAuthors,
    SettingsOverlay,
    SettingsTheme,
    StyleRoot,
}

impl MountPoint {
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::ListItems => "[data-list-items]",
            Self::ListMessage => "[data-list-message]",
            Self::ListButton => "[data-list-button]",
            Self::ListActive => "[data-list-active]",
            Self::SearchOverlay => "[data-search-overlay]",
            Self::SearchTitle => "[data-search-title]",
            Self::SearchGenres => "[data-search-genres]",
            Self::SearchAuthors => "[data-search-authors]",
            Self::SettingsOverlay => "[data-settings-overlay]",
            Self::SettingsTheme => "[data-settings-theme]",
            Self::StyleRoot => ":root",
        }
    }
}

/// Opaque reference from a rendered list element back to its entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemHandle(EntryId);

impl ItemHandle {
    #[must_use]
    pub const fn new(id: EntryId) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn entry_id(&self) -> &EntryId {
        &self.0
    }
}

/// One rendered entry preview in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemElement {
    pub handle: ItemHandle,
    pub title: String,
    pub author_key: String,
    pub author_name: String,
    pub image: String,
}

/// One option of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionElement {
    pub value: String,
    pub text: String,
}

/// The "Show more" button under the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonElement {
    pub label: String,
    pub remaining: usize,
    pub disabled: bool,
}

/// The detail overlay for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailOverlay {
    pub open: bool,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Image shown blurred behind the panel.
    pub blur_image: String,
    pub image: String,
}

/// Search overlay with its form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub open: bool,
    pub title: String,
    pub genre: String,
    pub author: String,
    pub genre_options: Vec<OptionElement>,
    pub author_options: Vec<OptionElement>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            open: false,
            title: String::new(),
            genre: ANY.to_string(),
            author: ANY.to_string(),
            genre_options: Vec::new(),
            author_options: Vec::new(),
        }
    }
}

impl SearchForm {
    pub fn cycle_genre(&mut self, step: isize) {
        self.genre = cycle_value(&self.genre_options, &self.genre, step);
    }

    pub fn cycle_author(&mut self, step: isize) {
        self.author = cycle_value(&self.author_options, &self.author, step);
    }

    /// Display text of the selected genre option.
    #[must_use]
    pub fn genre_text(&self) -> &str {
        option_text(&self.genre_options, &self.genre)
    }

    /// Display text of the selected author option.
    #[must_use]
    pub fn author_text(&self) -> &str {
        option_text(&self.author_options, &self.author)
    }
}

/// Settings overlay with its theme select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsForm {
    pub open: bool,
    pub theme: ThemeName,
}

/// The `:root` colour variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleVariables {
    pub color_dark: Rgb,
    pub color_light: Rgb,
}

impl Default for StyleVariables {
    fn default() -> Self {
        let palette = derive_colors(ThemeName::default());
        Self { color_dark: palette.dark, color_light: palette.light }
    }
}

/// Everything the plugin currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Surface {
    pub list_items: Vec<ListItemElement>,
    /// Keyboard cursor within `list_items`; the viewport follows it.
    pub selected: usize,
    pub message_visible: bool,
    pub show_more: ButtonElement,
    pub detail: DetailOverlay,
    pub search: SearchForm,
    pub settings: SettingsForm,
    pub style: StyleVariables,
}

impl Surface {
    /// Handle of the list element under the keyboard cursor.
    #[must_use]
    pub fn selected_handle(&self) -> Option<&ItemHandle> {
        self.list_items.get(self.selected).map(|item| &item.handle)
    }

    /// Whether any overlay is open.
    #[must_use]
    pub const fn overlay_open(&self) -> bool {
        self.search.open || self.settings.open || self.detail.open
    }
}

fn cycle_value(options: &[OptionElement], current: &str, step: isize) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let len = isize::try_from(options.len()).unwrap_or(isize::MAX);
    let index = options
        .iter()
        .position(|option| option.value == current)
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(0);
    let next = usize::try_from((index + step).rem_euclid(len)).unwrap_or(0);
    options[next].value.clone()
}

fn option_text<'a>(options: &'a [OptionElement], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|option| option.value == value)
        .map_or(value, |option| option.text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<OptionElement> {
        ["any", "g1", "g2"]
            .iter()
            .map(|v| OptionElement { value: (*v).to_string(), text: v.to_uppercase() })
            .collect()
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut form = SearchForm { genre_options: options(), ..SearchForm::default() };
        form.cycle_genre(1);
        assert_eq!(form.genre, "g1");
        form.cycle_genre(2);
        assert_eq!(form.genre, "any");
        form.cycle_genre(-1);
        assert_eq!(form.genre, "g2");
        assert_eq!(form.genre_text(), "G2");
    }

    #[test]
    fn unknown_value_restarts_from_first_option() {
        let mut form = SearchForm { author_options: options(), author: "gone".to_string(), ..SearchForm::default() };
        assert_eq!(form.author_text(), "gone");
        form.cycle_author(1);
        assert_eq!(form.author, "g1");
    }

    #[test]
    fn selectors_are_stable() {
        assert_eq!(MountPoint::ListItems.selector(), "[data-list-items]");
        assert_eq!(MountPoint::StyleRoot.selector(), ":root");
    }
}
