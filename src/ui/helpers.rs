//! Shared rendering utilities and helpers.
//!
//! Widths are counted in characters, not bytes, so titles with accents or
//! CJK text are cut on character boundaries.
//!
//! # Example
//!
//! ```rust
//! use bookcase::ui::helpers::fit;
//!
//! assert_eq!(fit("Dune Messiah", 8), "Dune Me…");
//! assert_eq!(fit("Dune", 8), "Dune    ");
//! ```

use crate::ui::theme::{Ansi, ThemePalette};

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Cuts `text` to exactly `width` characters: longer text ends in `…`,
/// shorter text is padded with spaces.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Greedy word wrap to lines of at most `width` characters. Words longer
/// than `width` are cut.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word: String = word.chars().take(width).collect();
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(&word);
        line_len += word_len;
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Paints `cols` blank cells in the palette background on each of `rows`.
pub fn fill_background(rows: usize, cols: usize, palette: &ThemePalette) {
    let blank = " ".repeat(cols);
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{}{}{blank}{}", Ansi::bg(palette.light), Ansi::fg(palette.dark), Ansi::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("Émile", 3), "Ém…");
        assert_eq!(fit("Émile", 5), "Émile");
        assert_eq!(fit("abc", 0), "");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("a desert planet and its spice", 12), vec!["a desert", "planet and", "its spice"]);
        assert_eq!(wrap("incomprehensibilities", 5), vec!["incom"]);
        assert!(wrap("   ", 5).is_empty());
        assert!(wrap("text", 0).is_empty());
    }
}
