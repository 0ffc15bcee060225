//! Application state management.
//!
//! This module defines [`AppState`], the single owner of everything that
//! changes while browsing: the current matched set, its page cursor, the theme,
//! the focused region, and the surface being drawn.
//!
//! # Invariant
//!
//! `matches` and `cursor` are only ever replaced together through
//! [`AppState::establish_matches`], which resets the cursor and redraws the
//! first page. The list on the surface therefore always holds exactly the
//! first `min(page × page_size, |matches|)` matched entries.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::AppState;
//! use bookcase::browse::{apply_filters, FilterCriteria};
//! use bookcase::domain::Catalog;
//! use bookcase::ui::theme::ThemeName;
//!
//! let catalog = Catalog::bundled()?;
//! let mut state = AppState::new(catalog, ThemeName::Day);
//!
//! let criteria = FilterCriteria::from_form("dune", "any", "any");
//! let matches = apply_filters(&criteria, &state.catalog);
//! state.establish_matches(matches);
//! assert!(state.surface.list_items.iter().all(|item| item.title.to_lowercase().contains("dune")));
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

use crate::app::modes::{Focus, SearchField};
use crate::browse::{remaining_count, MatchedSet, PageCursor};
use crate::domain::Catalog;
use crate::ui::adapter::{self, ALL_AUTHORS_LABEL, ALL_GENRES_LABEL, NO_RESULTS_MESSAGE};
use crate::ui::surface::{MountPoint, Surface};
use crate::ui::theme::{self, ThemeName, ThemePalette};
use crate::ui::viewmodel::{
    list_capacity, list_window, ButtonInfo, DetailPanelInfo, DisplayItem, FooterInfo, HeaderInfo, OverlayInfo,
    SearchPanelInfo, UIViewModel,
};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable catalog loaded at startup.
    pub catalog: Catalog,

    /// Entries matching the last submitted search, in catalog order.
    pub matches: MatchedSet,

    /// Pages of `matches` drawn so far.
    pub cursor: PageCursor,

    /// Active theme.
    pub theme: ThemeName,

    /// Region currently receiving input.
    pub focus: Focus,

    /// Everything currently displayed.
    pub surface: Surface,
}

impl AppState {
    /// Creates the initial state: the whole catalog matched, the first page
    /// drawn, option lists filled, and `theme` applied.
    ///
    /// The show-more label initially counts entries beyond the first page of
    /// the full catalog.
    #[must_use]
    pub fn new(catalog: Catalog, theme: ThemeName) -> Self {
        let _span = tracing::debug_span!("app_state_new", entries = catalog.len(), theme = %theme).entered();

        let matches = MatchedSet::all(&catalog);
        let mut state = Self {
            catalog,
            matches,
            cursor: PageCursor::new(),
            theme,
            focus: Focus::List,
            surface: Surface::default(),
        };

        state.draw_first_page();

        let genres = adapter::render_option_list(state.catalog.genres(), ALL_GENRES_LABEL);
        adapter::mount_options(&mut state.surface, MountPoint::SearchGenres, genres);
        let authors = adapter::render_option_list(state.catalog.authors(), ALL_AUTHORS_LABEL);
        adapter::mount_options(&mut state.surface, MountPoint::SearchAuthors, authors);

        state.apply_theme(theme);

        adapter::set_show_more(
            &mut state.surface,
            remaining_count(state.catalog.len(), state.catalog.page_size()),
        );

        state
    }

    /// Replaces the matched set, resets the cursor and redraws the first page.
    pub fn establish_matches(&mut self, matches: MatchedSet) {
        self.matches = matches;
        self.cursor.reset();
        self.draw_first_page();
        self.refresh_show_more();
    }

    /// Draws the next page of matches below the ones already shown.
    ///
    /// Returns the number of entries appended (zero past the end).
    pub fn show_more(&mut self) -> usize {
        let window = self.cursor.advance(self.matches.len(), self.catalog.page_size());
        let items = adapter::render_entries(self.matches.window(window), self.catalog.authors());
        let appended = items.len();
        adapter::append_list_items(&mut self.surface, items);
        self.refresh_show_more();
        appended
    }

    /// Entries of the matched set currently in the list.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.cursor.rendered_count(self.matches.len(), self.catalog.page_size())
    }

    /// Derives and applies the palette for `theme`.
    pub fn apply_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
        theme::apply_palette(&mut self.surface, theme, theme::derive_colors(theme));
    }

    /// Moves the list cursor down by one element, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.surface.list_items.len();
        if len == 0 {
            return;
        }
        self.surface.selected = (self.surface.selected + 1) % len;
    }

    /// Moves the list cursor up by one element, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.surface.list_items.len();
        if len == 0 {
            return;
        }
        self.surface.selected = self.surface.selected.checked_sub(1).unwrap_or(len - 1);
    }

    /// Computes the view model for a pane of `rows` lines.
    ///
    /// Only the slice of the list that fits is included, scrolled so the
    /// keyboard cursor stays visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        let surface = &self.surface;

        let message = surface.message_visible.then(|| NO_RESULTS_MESSAGE.to_string());
        let reserved = 1 + usize::from(message.is_some());
        let window = list_window(surface.list_items.len(), surface.selected, list_capacity(rows, reserved));
        let start = window.start;

        let display_items = surface
            .list_items
            .get(window)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(offset, item)| DisplayItem {
                handle: item.handle.clone(),
                title: item.title.clone(),
                author: item.author_name.clone(),
                is_selected: self.focus == Focus::List && start + offset == surface.selected,
            })
            .collect();

        let overlay = if surface.detail.open {
            Some(OverlayInfo::Detail(DetailPanelInfo {
                title: surface.detail.title.clone(),
                subtitle: surface.detail.subtitle.clone(),
                description: surface.detail.description.clone(),
                image: surface.detail.image.clone(),
            }))
        } else if surface.settings.open {
            Some(OverlayInfo::Settings { theme: surface.settings.theme })
        } else if surface.search.open {
            let focused = match self.focus {
                Focus::Search(field) => field,
                Focus::List | Focus::Settings | Focus::Detail => SearchField::Title,
            };
            Some(OverlayInfo::Search(SearchPanelInfo {
                title: surface.search.title.clone(),
                genre: surface.search.genre_text().to_string(),
                author: surface.search.author_text().to_string(),
                focused,
            }))
        } else {
            None
        };

        UIViewModel {
            header: HeaderInfo {
                title: "Bookcase".to_string(),
                summary: format!("{} of {} books", self.rendered_count(), self.matches.len()),
            },
            rows: display_items,
            button: ButtonInfo { label: surface.show_more.label.clone(), disabled: surface.show_more.disabled },
            message,
            overlay,
            footer: FooterInfo { keybindings: footer_hints(self.focus).to_string() },
            palette: ThemePalette { dark: surface.style.color_dark, light: surface.style.color_light },
        }
    }

    fn draw_first_page(&mut self) {
        let window = self.cursor.current_slice(self.matches.len(), self.catalog.page_size());
        let items = adapter::render_entries(self.matches.window(window), self.catalog.authors());
        adapter::replace_list_items(&mut self.surface, items);
    }

    fn refresh_show_more(&mut self) {
        let remaining = self.cursor.remaining(self.matches.len(), self.catalog.page_size());
        adapter::set_show_more(&mut self.surface, remaining);
    }
}

const fn footer_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::List => "j/k: move | enter: details | m: show more | /: search | t: theme | q: quit",
        Focus::Search(_) => "tab: next field | ←/→: option | enter: search | esc: cancel",
        Focus::Settings => "←/→: theme | enter: apply | esc: cancel",
        Focus::Detail => "esc: close",
    }
}
