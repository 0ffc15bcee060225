//! Header component renderer.
//!
//! This module renders the plugin title bar: the title on the left and the
//! matched-set progress on the right.

use super::dim;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::{Ansi, ThemePalette};
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Layout
///
/// ```text
///  TITLE [padding] summary
/// ```
///
/// On narrow panes the summary is dropped before the title is cut.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, palette: &ThemePalette, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let summary = format!("{} ", header.summary);
    let title_len = title.chars().count();
    let summary_len = summary.chars().count();

    position_cursor(row, 1);
    print!("{}", Ansi::bg(palette.light));
    print!("{}{}{title}{}", Ansi::bold(), Ansi::fg(palette.dark), Ansi::reset());
    print!("{}", Ansi::bg(palette.light));

    if title_len + summary_len < cols {
        print!("{}", " ".repeat(cols - title_len - summary_len));
        print!("{}{summary}", Ansi::fg(dim(palette)));
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title_len)));
    }

    print!("{}", Ansi::reset());
    row + 1
}
