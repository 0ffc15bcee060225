//! Framed overlay panels.
//!
//! Overlays are drawn as a box over the list area, inset from both pane
//! edges. [`Frame`] draws the box; the settings and detail panels fill it.

use super::dim;
use crate::ui::helpers::{fit, position_cursor, wrap};
use crate::ui::theme::{Ansi, Rgb, ThemeName, ThemePalette, ACCENT};
use crate::ui::viewmodel::{DetailPanelInfo, LIST_TOP};

/// Horizontal margin for panels (columns left and right of the frame).
const PANEL_MARGIN: usize = 4;

/// Rows below the panel kept free for the border and footer.
const BOTTOM_CLEARANCE: usize = 3;

/// A box over the list area.
pub(super) struct Frame {
    top: usize,
    left: usize,
    inner_width: usize,
    height: usize,
}

impl Frame {
    /// A frame with `lines` content lines, as wide as the pane allows.
    pub(super) const fn new(lines: usize, cols: usize) -> Self {
        let width = cols.saturating_sub(PANEL_MARGIN * 2);
        Self { top: LIST_TOP, left: PANEL_MARGIN + 1, inner_width: width.saturating_sub(2), height: lines + 2 }
    }

    /// Width available to text inside the frame (one space each side).
    pub(super) const fn text_width(&self) -> usize {
        self.inner_width.saturating_sub(2)
    }

    /// Draws the border with `title` in the top edge and blanks the inside.
    pub(super) fn draw(&self, title: &str, palette: &ThemePalette) {
        let label = fit(&format!(" {title} "), self.inner_width.min(title.chars().count() + 2));
        let rest = self.inner_width.saturating_sub(label.chars().count());

        position_cursor(self.top, self.left);
        print!("{}{}┌", Ansi::bg(palette.light), Ansi::fg(ACCENT));
        print!("{}{label}{}", Ansi::bold(), Ansi::reset());
        print!("{}{}{}┐{}", Ansi::bg(palette.light), Ansi::fg(ACCENT), "─".repeat(rest), Ansi::reset());

        for row in self.top + 1..self.top + self.height - 1 {
            position_cursor(row, self.left);
            print!("{}{}│", Ansi::bg(palette.light), Ansi::fg(ACCENT));
            print!("{}", " ".repeat(self.inner_width));
            print!("│{}", Ansi::reset());
        }

        position_cursor(self.top + self.height - 1, self.left);
        print!("{}{}└{}┘{}", Ansi::bg(palette.light), Ansi::fg(ACCENT), "─".repeat(self.inner_width), Ansi::reset());
    }

    /// Writes `text` on content line `index` (0-based).
    pub(super) fn text(&self, index: usize, text: &str, color: Rgb, bold: bool, palette: &ThemePalette) {
        position_cursor(self.top + 1 + index, self.left + 2);
        print!("{}{}", Ansi::bg(palette.light), Ansi::fg(color));
        if bold {
            print!("{}", Ansi::bold());
        }
        print!("{}{}", fit(text, self.text_width()), Ansi::reset());
    }

    /// Writes a `label value` pair on content line `index`; a focused label
    /// is drawn in the accent colour.
    pub(super) fn field(&self, index: usize, label: &str, value: &str, focused: bool, palette: &ThemePalette) {
        let label_len = label.chars().count().min(self.text_width());

        position_cursor(self.top + 1 + index, self.left + 2);
        print!("{}", Ansi::bg(palette.light));
        if focused {
            print!("{}{}", Ansi::bold(), Ansi::fg(ACCENT));
        } else {
            print!("{}", Ansi::fg(dim(palette)));
        }
        print!("{}{}", fit(label, label_len), Ansi::reset());
        print!("{}{}", Ansi::bg(palette.light), Ansi::fg(palette.dark));
        print!("{}{}", fit(value, self.text_width() - label_len), Ansi::reset());
    }
}

/// Renders the settings panel with the selected theme option.
pub fn render_settings_panel(theme: ThemeName, palette: &ThemePalette, cols: usize) {
    let frame = Frame::new(3, cols);
    frame.draw("Settings", palette);

    let options = ThemeName::ALL
        .iter()
        .map(|option| if *option == theme { format!("[{}]", option.label()) } else { option.label().to_string() })
        .collect::<Vec<_>>()
        .join("  ");
    frame.field(1, "Theme   ", &format!("< {options} >"), true, palette);
}

/// Renders the detail panel: title, `author (year)`, the description wrapped
/// to the panel width, and the cover image reference.
///
/// The description is cut to the rows available above the footer.
pub fn render_detail_panel(info: &DetailPanelInfo, palette: &ThemePalette, cols: usize, rows: usize) {
    let probe = Frame::new(0, cols);
    let max_lines = rows.saturating_sub(LIST_TOP + 2 + BOTTOM_CLEARANCE);
    let room = max_lines.saturating_sub(5);

    let mut description = wrap(&info.description, probe.text_width());
    description.truncate(room);

    let lines = (description.len() + 5).min(max_lines);
    let frame = Frame::new(lines, cols);
    frame.draw(&info.title, palette);

    if lines == 0 {
        return;
    }
    frame.text(0, &info.title, palette.dark, true, palette);
    if lines > 1 {
        frame.text(1, &info.subtitle, dim(palette), false, palette);
    }
    for (index, line) in description.iter().enumerate() {
        frame.text(3 + index, line, palette.dark, false, palette);
    }
    if lines >= description.len() + 5 {
        frame.text(4 + description.len(), &format!("Cover: {}", info.image), dim(palette), false, palette);
    }
}
