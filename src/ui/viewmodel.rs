//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold only display-ready data: the
//! visible slice of the list, the button and message rows, the open overlay,
//! and the palette to draw with.
//!
//! The renderer reports back where it drew each clickable row as a
//! [`HitMap`], which the plugin shim consults to resolve mouse clicks.
//!
//! # Example
//!
//! ```rust
//! use bookcase::ui::viewmodel::{list_window, HitMap, HitTarget};
//!
//! // 10 items, cursor on the 8th, 4 visible rows: the window scrolls.
//! assert_eq!(list_window(10, 7, 4), 4..8);
//!
//! let mut hits = HitMap::default();
//! hits.insert(5, HitTarget::ShowMore);
//! assert_eq!(hits.target_at(5), Some(&HitTarget::ShowMore));
//! assert_eq!(hits.target_at(-1), None);
//! ```

use crate::app::modes::SearchField;
use crate::ui::surface::ItemHandle;
use crate::ui::theme::{ThemeName, ThemePalette};
use std::collections::BTreeMap;
use std::ops::Range;

/// First terminal row (1-indexed) of the list area.
pub const LIST_TOP: usize = 4;

/// Rows taken by chrome: blank, header, two borders, footer, bottom margin.
const CHROME_ROWS: usize = 6;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Visible list rows, top to bottom.
    pub rows: Vec<DisplayItem>,

    pub button: ButtonInfo,

    /// No-results message, when visible.
    pub message: Option<String>,

    /// The overlay drawn over the list, if one is open.
    pub overlay: Option<OverlayInfo>,

    pub footer: FooterInfo,

    /// Colours read from the `:root` style variables.
    pub palette: ThemePalette,
}

/// Display information for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub handle: ItemHandle,
    pub title: String,
    pub author: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Progress through the matched set, e.g. `6 of 14 books`.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonInfo {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit | /: search").
    pub keybindings: String,
}

/// Overlay panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayInfo {
    Search(SearchPanelInfo),
    Settings { theme: ThemeName },
    Detail(DetailPanelInfo),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanelInfo {
    pub title: String,
    pub genre: String,
    pub author: String,
    pub focused: SearchField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanelInfo {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

/// Number of list rows that fit in a pane of `rows` lines when `reserved`
/// lines (button, message) are drawn below the list.
#[must_use]
pub const fn list_capacity(rows: usize, reserved: usize) -> usize {
    rows.saturating_sub(CHROME_ROWS + reserved)
}

/// Range of list indices to draw so that `selected` stays visible.
///
/// The window starts at the top and scrolls only once the cursor moves past
/// the last visible row.
#[must_use]
pub fn list_window(len: usize, selected: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || len == 0 {
        return 0..0;
    }
    let start = if selected < capacity { 0 } else { selected + 1 - capacity };
    let start = start.min(len.saturating_sub(capacity));
    start..(start + capacity).min(len)
}

/// What a clickable row resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Item(ItemHandle),
    ShowMore,
}

/// Clickable rows from the last render, keyed by 0-based pane line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    lines: BTreeMap<usize, HitTarget>,
}

impl HitMap {
    pub fn insert(&mut self, line: usize, target: HitTarget) {
        self.lines.insert(line, target);
    }

    /// Target drawn on `line`, if any. Negative lines come from clicks above
    /// the pane content and never hit.
    #[must_use]
    pub fn target_at(&self, line: isize) -> Option<&HitTarget> {
        usize::try_from(line).ok().and_then(|line| self.lines.get(&line))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryId;

    #[test]
    fn window_stays_at_top_until_cursor_leaves_it() {
        assert_eq!(list_window(10, 0, 4), 0..4);
        assert_eq!(list_window(10, 3, 4), 0..4);
        assert_eq!(list_window(10, 4, 4), 1..5);
        assert_eq!(list_window(10, 9, 4), 6..10);
    }

    #[test]
    fn window_handles_short_lists_and_tiny_panes() {
        assert_eq!(list_window(2, 1, 4), 0..2);
        assert_eq!(list_window(0, 0, 4), 0..0);
        assert_eq!(list_window(5, 3, 0), 0..0);
    }

    #[test]
    fn capacity_saturates() {
        assert_eq!(list_capacity(24, 1), 17);
        assert_eq!(list_capacity(3, 1), 0);
    }

    #[test]
    fn hit_map_resolves_lines() {
        let mut hits = HitMap::default();
        let handle = ItemHandle::new(EntryId::new("dune"));
        hits.insert(3, HitTarget::Item(handle.clone()));
        assert_eq!(hits.target_at(3), Some(&HitTarget::Item(handle)));
        assert_eq!(hits.target_at(4), None);
        assert_eq!(hits.target_at(-3), None);
        assert_eq!(hits.len(), 1);
    }
}
