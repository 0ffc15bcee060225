//! Entry list renderer.
//!
//! This module renders the visible entry previews as a two-column table
//! (title, author) and the show-more button row beneath them.

use super::dim;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::{Ansi, ThemePalette, ACCENT};
use crate::ui::viewmodel::{ButtonInfo, DisplayItem};

/// Share of the row given to the title column, in percent.
const TITLE_SHARE: usize = 60;

/// Splits the usable width (minus the leading and separating space) into
/// title and author column widths.
const fn column_widths(cols: usize) -> (usize, usize) {
    let usable = cols.saturating_sub(3);
    let title = usable * TITLE_SHARE / 100;
    (title, usable - title)
}

/// Renders a single entry row at the specified row position.
///
/// # Layout
///
/// ```text
///  TITLE (60%)  AUTHOR (rest)
/// ```
///
/// The selected row is drawn on the accent background across the full width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_row(row: usize, item: &DisplayItem, palette: &ThemePalette, cols: usize) -> usize {
    let (title_width, author_width) = column_widths(cols);

    position_cursor(row, 1);
    if item.is_selected {
        print!("{}{}{}", Ansi::bg(ACCENT), Ansi::fg(palette.light), Ansi::bold());
    } else {
        print!("{}{}", Ansi::bg(palette.light), Ansi::fg(palette.dark));
    }

    print!(" {} ", fit(&item.title, title_width));
    if !item.is_selected {
        print!("{}", Ansi::fg(dim(palette)));
    }
    print!("{}", fit(&item.author, author_width));
    print!("{}", " ".repeat(cols.saturating_sub(title_width + author_width + 2)));

    print!("{}", Ansi::reset());
    row + 1
}

/// Renders the show-more button centered on `row`. A disabled button is dimmed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_button(row: usize, button: &ButtonInfo, palette: &ThemePalette, cols: usize) -> usize {
    let label = format!("[ {} ]", button.label);
    let label_len = label.chars().count().min(cols);
    let padding = (cols.saturating_sub(label_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Ansi::bg(palette.light));
    print!("{}", " ".repeat(padding));
    if button.disabled {
        print!("{}", Ansi::fg(dim(palette)));
    } else {
        print!("{}{}", Ansi::bold(), Ansi::fg(ACCENT));
    }
    print!("{}", fit(&label, label_len));
    print!("{}{}", Ansi::reset(), Ansi::bg(palette.light));
    print!("{}", " ".repeat(cols.saturating_sub(padding + label_len)));
    print!("{}", Ansi::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fill_the_row() {
        let (title, author) = column_widths(83);
        assert_eq!(title, 48);
        assert_eq!(title + author + 3, 83);
        assert_eq!(column_widths(2), (0, 0));
    }
}
