//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row. Colours come from the view model's palette: text in the
//! `--color-dark` slot, backgrounds in `--color-light`, selection and focus
//! in the fixed accent.
//!
//! # Components
//!
//! - [`header`]: Title bar with matched-set progress
//! - [`table`]: Entry rows (title, author) and the show-more button
//! - [`message`]: The no-results message
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search form panel
//! - [`panel`]: Framed overlay panels (settings, detail)
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [List rows]
//! [No-results message]   (only after an empty search)
//! [Show more (N)]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```
//!
//! An open overlay is drawn as a framed panel over the list area.

mod footer;
mod header;
mod message;
mod panel;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::{Ansi, Rgb, ThemePalette};
use crate::ui::viewmodel::{HitMap, HitTarget, OverlayInfo, UIViewModel};

use footer::render_footer;
use header::render_header;
use message::render_message;
use table::{render_button, render_table_row};

/// Dimmed text colour: the foreground pulled towards the background.
fn dim(palette: &ThemePalette) -> Rgb {
    palette.dark.blend(palette.light, 45)
}

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, palette: &ThemePalette, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Ansi::bg(palette.light), Ansi::fg(dim(palette)));
    print!("{}", "─".repeat(cols));
    print!("{}", Ansi::reset());
    row + 1
}

/// Draws the whole screen and returns the clickable rows.
///
/// Rows hidden behind an open overlay are not clickable.
pub fn render_layout(vm: &UIViewModel, cols: usize, rows: usize) -> HitMap {
    let palette = &vm.palette;
    let mut hits = HitMap::default();
    let covered = vm.overlay.is_some();

    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)
    current_row = render_header(current_row, &vm.header, palette, cols);
    current_row = render_border(current_row, palette, cols);

    for item in &vm.rows {
        if !covered {
            hits.insert(current_row - 1, HitTarget::Item(item.handle.clone()));
        }
        current_row = render_table_row(current_row, item, palette, cols);
    }

    if let Some(message) = &vm.message {
        current_row = render_message(current_row, message, palette, cols);
    }

    if !covered {
        hits.insert(current_row - 1, HitTarget::ShowMore);
    }
    render_button(current_row, &vm.button, palette, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    render_border(border_row, palette, cols);
    render_footer(footer_start, &vm.footer, palette, cols);

    match &vm.overlay {
        Some(OverlayInfo::Search(info)) => search::render_search_panel(info, palette, cols),
        Some(OverlayInfo::Settings { theme }) => panel::render_settings_panel(*theme, palette, cols),
        Some(OverlayInfo::Detail(info)) => panel::render_detail_panel(info, palette, cols, rows),
        None => {}
    }

    hits
}
