//! Event handling: the interaction router.
//!
//! Each external trigger (form submission, button press, list click, cancel
//! control, navigation key) arrives as an [`Event`]. [`handle_event`] runs it to
//! completion against [`AppState`], leaving the matched set and page cursor
//! consistent, and reports whether the surface changed plus any host actions.
//!
//! # Flows
//!
//! - **Search submit**: form → [`FilterCriteria`] → [`apply_filters`] → new
//!   matched set with cursor reset → first page drawn → no-results message
//!   toggled → search overlay closed → viewport scrolled to top
//! - **Settings submit**: selected theme → palette derived and applied →
//!   settings overlay closed
//! - **Show more**: cursor advanced → next page appended
//! - **Item activated**: handle → entry looked up in the full catalog →
//!   detail overlay opened
//! - **Close overlay**: overlay hidden, nothing else touched
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::{handle_event, AppState, Event};
//! use bookcase::domain::Catalog;
//! use bookcase::ui::theme::ThemeName;
//!
//! let mut state = AppState::new(Catalog::bundled()?, ThemeName::Day);
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenSearch);
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

use crate::app::modes::{Focus, Overlay, SearchField};
use crate::app::{Action, AppState};
use crate::browse::{apply_filters, FilterCriteria};
use crate::ui::adapter;
use crate::ui::surface::{ItemHandle, MountPoint};

/// Events triggered by user input on the plugin pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down by one element (wraps to top).
    KeyDown,
    /// Moves the list cursor up by one element (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the search overlay with the title field focused.
    OpenSearch,
    /// Opens the settings overlay.
    OpenSettings,
    /// Cancel/close control of an overlay.
    CloseOverlay(Overlay),

    /// Submits the search form.
    SearchSubmit,
    /// Submits the settings form.
    SettingsSubmit,
    /// Presses the show-more button.
    ShowMore,

    /// Activates a list element.
    ///
    /// Carries the handle of the element that was clicked or selected, or
    /// `None` when the click landed on nothing tagged.
    ItemActivated(Option<ItemHandle>),

    /// Moves focus to the next search-form control.
    NextField,
    /// Moves focus to the previous search-form control.
    PrevField,
    /// Selects the next option of the focused select.
    OptionNext,
    /// Selects the previous option of the focused select.
    OptionPrev,
    /// Types a character into the focused text field.
    Char(char),
    /// Removes the last character of the focused text field.
    Backspace,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the surface changed, and host-level
/// side effects to run in order.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, focus = ?state.focus).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::OpenSearch => {
            state.surface.search.open = true;
            state.focus = Focus::Search(SearchField::Title);
            tracing::debug!(selector = MountPoint::SearchOverlay.selector(), "search overlay opened");
            (true, vec![])
        }
        Event::OpenSettings => {
            state.surface.settings.open = true;
            state.focus = Focus::Settings;
            tracing::debug!(selector = MountPoint::SettingsOverlay.selector(), "settings overlay opened");
            (true, vec![])
        }
        Event::CloseOverlay(overlay) => {
            close_overlay(state, *overlay);
            (true, vec![])
        }
        Event::SearchSubmit => {
            let form = &state.surface.search;
            let criteria = FilterCriteria::from_form(&form.title, &form.author, &form.genre);
            tracing::debug!(criteria = ?criteria, "search submitted");

            let matches = apply_filters(&criteria, &state.catalog);
            state.establish_matches(matches);

            let no_results = state.matches.is_empty();
            adapter::set_message_visible(&mut state.surface, no_results);
            close_overlay(state, Overlay::Search);
            adapter::scroll_to_top(&mut state.surface);
            (true, vec![])
        }
        Event::SettingsSubmit => {
            let selected = state.surface.settings.theme;
            tracing::debug!(theme = %selected, "settings submitted");
            state.apply_theme(selected);
            close_overlay(state, Overlay::Settings);
            (true, vec![])
        }
        Event::ShowMore => {
            if state.surface.show_more.disabled {
                tracing::debug!("show-more button disabled, ignoring");
                return (false, vec![]);
            }
            let appended = state.show_more();
            tracing::debug!(appended, rendered = state.rendered_count(), "next page drawn");
            (true, vec![])
        }
        Event::ItemActivated(handle) => {
            let Some(handle) = handle else {
                tracing::debug!("activation without an entry handle");
                return (false, vec![]);
            };
            let Some(entry) = state.catalog.find(handle.entry_id()) else {
                tracing::debug!(entry_id = %handle.entry_id(), "activated entry not in catalog");
                return (false, vec![]);
            };
            adapter::render_detail_overlay(&mut state.surface, entry, state.catalog.authors());
            state.focus = Focus::Detail;
            (true, vec![])
        }
        Event::NextField => match state.focus {
            Focus::Search(field) => {
                state.focus = Focus::Search(field.next());
                (true, vec![])
            }
            Focus::Settings => cycle_theme(state),
            Focus::List | Focus::Detail => (false, vec![]),
        },
        Event::PrevField => match state.focus {
            Focus::Search(field) => {
                state.focus = Focus::Search(field.prev());
                (true, vec![])
            }
            Focus::Settings => cycle_theme(state),
            Focus::List | Focus::Detail => (false, vec![]),
        },
        Event::OptionNext => cycle_option(state, 1),
        Event::OptionPrev => cycle_option(state, -1),
        Event::Char(c) => {
            if state.focus != Focus::Search(SearchField::Title) {
                return (false, vec![]);
            }
            state.surface.search.title.push(*c);
            tracing::trace!(title = %state.surface.search.title, "search title edited");
            (true, vec![])
        }
        Event::Backspace => {
            if state.focus != Focus::Search(SearchField::Title) {
                return (false, vec![]);
            }
            let changed = state.surface.search.title.pop().is_some();
            (changed, vec![])
        }
    }
}

/// Hides `overlay` and returns focus to the list if it held focus.
fn close_overlay(state: &mut AppState, overlay: Overlay) {
    let mount = match overlay {
        Overlay::Search => {
            state.surface.search.open = false;
            MountPoint::SearchOverlay
        }
        Overlay::Settings => {
            state.surface.settings.open = false;
            MountPoint::SettingsOverlay
        }
        Overlay::Detail => {
            state.surface.detail.open = false;
            MountPoint::ListActive
        }
    };

    let focused = matches!(
        (state.focus, overlay),
        (Focus::Search(_), Overlay::Search) | (Focus::Settings, Overlay::Settings) | (Focus::Detail, Overlay::Detail)
    );
    if focused {
        state.focus = Focus::List;
    }

    tracing::debug!(selector = mount.selector(), "overlay closed");
}

fn cycle_option(state: &mut AppState, step: isize) -> (bool, Vec<Action>) {
    match state.focus {
        Focus::Search(SearchField::Genre) => state.surface.search.cycle_genre(step),
        Focus::Search(SearchField::Author) => state.surface.search.cycle_author(step),
        Focus::Settings => return cycle_theme(state),
        Focus::Search(SearchField::Title) | Focus::List | Focus::Detail => return (false, vec![]),
    }
    (true, vec![])
}

/// The theme select has two options, so any step toggles it.
fn cycle_theme(state: &mut AppState) -> (bool, Vec<Action>) {
    let settings = &mut state.surface.settings;
    settings.theme = settings.theme.toggled();
    tracing::trace!(theme = %settings.theme, selector = MountPoint::SettingsTheme.selector(), "theme option changed");
    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, Entry, EntryId, Mapping};
    use crate::ui::theme::{derive_colors, ThemeName};

    fn state() -> AppState {
        let mut authors = Mapping::new();
        authors.insert("herbert".to_string(), "Frank Herbert".to_string());
        let entries = ["Dune", "Dune Messiah", "Emma"]
            .iter()
            .enumerate()
            .map(|(i, title)| Entry {
                id: EntryId::new(format!("{i}")),
                title: (*title).to_string(),
                author: "herbert".to_string(),
                image: format!("img-{i}"),
                description: String::new(),
                published: chrono::NaiveDate::from_ymd_opt(1965, 1, 1).unwrap(),
                genres: vec![],
            })
            .collect();
        AppState::new(Catalog::new(entries, authors, Mapping::new(), 2).unwrap(), ThemeName::Day)
    }

    #[test]
    fn typing_only_reaches_title_field() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Char('x')), (false, vec![]));

        handle_event(&mut state, &Event::OpenSearch);
        handle_event(&mut state, &Event::Char('d'));
        handle_event(&mut state, &Event::NextField);
        handle_event(&mut state, &Event::Char('u'));
        assert_eq!(state.surface.search.title, "d");
        assert_eq!(state.focus, Focus::Search(SearchField::Genre));
    }

    #[test]
    fn option_cycling_targets_focused_select() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenSearch);
        handle_event(&mut state, &Event::PrevField);
        assert_eq!(state.focus, Focus::Search(SearchField::Author));
        handle_event(&mut state, &Event::OptionNext);
        assert_eq!(state.surface.search.author, "herbert");
        assert_eq!(state.surface.search.genre, "any");
    }

    #[test]
    fn settings_cancel_keeps_palette() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenSettings);
        handle_event(&mut state, &Event::OptionNext);
        assert_eq!(state.surface.settings.theme, ThemeName::Night);
        handle_event(&mut state, &Event::CloseOverlay(Overlay::Settings));
        assert_eq!(state.focus, Focus::List);
        assert_eq!(state.theme, ThemeName::Day);
        assert_eq!(state.surface.style.color_dark, derive_colors(ThemeName::Day).dark);
    }

    #[test]
    fn closing_unfocused_overlay_keeps_focus() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenSearch);
        handle_event(&mut state, &Event::CloseOverlay(Overlay::Detail));
        assert_eq!(state.focus, Focus::Search(SearchField::Title));
        assert!(state.surface.search.open);
    }

    #[test]
    fn backspace_on_empty_title_is_not_a_change() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenSearch);
        assert_eq!(handle_event(&mut state, &Event::Backspace), (false, vec![]));
    }

    #[test]
    fn close_focus_requests_host_action() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
