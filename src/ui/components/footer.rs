//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use super::dim;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::{Ansi, ThemePalette};
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally in the dimmed colour.
/// Padding is split evenly on both sides; when the pane cannot divide evenly,
/// the right side gets the extra column. Hints wider than the pane are cut.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, palette: &ThemePalette, cols: usize) -> usize {
    let help_text = &footer.keybindings;

    let text_len = help_text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}{}", Ansi::bg(palette.light), Ansi::fg(dim(palette)));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(help_text, text_len));
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Ansi::reset());
    row + 1
}
