//! No-results message renderer.

use super::dim;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::{Ansi, ThemePalette};

/// Renders `message` centered on `row` in the dimmed colour.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_message(row: usize, message: &str, palette: &ThemePalette, cols: usize) -> usize {
    let msg_len = message.chars().count().min(cols);
    let padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}{}", Ansi::bg(palette.light), Ansi::fg(dim(palette)));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(message, msg_len));
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_len)));
    print!("{}", Ansi::reset());
    row + 1
}
