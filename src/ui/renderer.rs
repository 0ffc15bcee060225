//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`, sized to the pane
//! 2. **Component Rendering**: background, then the components, then any
//!    open overlay on top
//!
//! The returned [`HitMap`] records which pane line shows which entry (and
//! which line holds the show-more button) so that mouse clicks can be
//! resolved against exactly what was drawn.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::fill_background;
use crate::ui::viewmodel::HitMap;

/// Renders the plugin UI to stdout and returns the clickable rows.
///
/// # Output
///
/// Prints 24-bit ANSI output with `print!`, positioning every line explicitly.
/// Every cell of the pane is painted in the theme background first.
pub fn render(state: &AppState, rows: usize, cols: usize) -> HitMap {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows);
    fill_background(rows, cols, &viewmodel.palette);
    let hits = components::render_layout(&viewmodel, cols, rows);

    tracing::trace!(clickable = hits.len(), "frame drawn");
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::Focus;
    use crate::domain::{Catalog, Entry, EntryId, Mapping};
    use crate::ui::theme::ThemeName;
    use crate::ui::viewmodel::HitTarget;

    fn state(len: usize, page_size: usize) -> AppState {
        let entries = (0..len)
            .map(|i| Entry {
                id: EntryId::new(format!("e{i}")),
                title: format!("Entry {i}"),
                author: "a".to_string(),
                image: String::new(),
                description: "A long description of the entry.".to_string(),
                published: chrono::NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
                genres: vec![],
            })
            .collect();
        AppState::new(Catalog::new(entries, Mapping::new(), Mapping::new(), page_size).unwrap(), ThemeName::Day)
    }

    #[test]
    fn rows_and_button_are_clickable() {
        let state = state(5, 2);
        let hits = render(&state, 24, 80);
        assert_eq!(hits.target_at(3), Some(&HitTarget::Item(state.surface.list_items[0].handle.clone())));
        assert_eq!(hits.target_at(4), Some(&HitTarget::Item(state.surface.list_items[1].handle.clone())));
        assert_eq!(hits.target_at(5), Some(&HitTarget::ShowMore));
        assert_eq!(hits.target_at(1), None);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn overlay_hides_list_from_clicks() {
        let mut state = state(5, 2);
        state.surface.search.open = true;
        state.focus = Focus::Search(crate::app::modes::SearchField::Title);
        assert!(render(&state, 24, 80).is_empty());

        state.surface.search.open = false;
        state.surface.detail.open = true;
        state.focus = Focus::Detail;
        assert!(render(&state, 6, 20).is_empty());
    }
}
