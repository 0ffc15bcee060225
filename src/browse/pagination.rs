//! Page cursor tracking how much of the matched set has been drawn.
//!
//! The cursor counts rendered pages (always at least one). Windows are
//! half-open index ranges into the matched set, clamped to its length, so a
//! window past the end is simply empty.

use std::ops::Range;

/// Number of pages of the current matched set already rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Back to the first page. Called whenever a new matched set is established.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// The window of the most recently rendered page.
    ///
    /// Right after [`reset`](Self::reset) this is `0..min(page_size, matched_len)`.
    #[must_use]
    pub fn current_slice(&self, matched_len: usize, page_size: usize) -> Range<usize> {
        clamp_window((self.page - 1) * page_size, self.page * page_size, matched_len)
    }

    /// Returns the next page's window and moves the cursor onto it.
    ///
    /// Past the end of the matched set the window is empty; the page counter
    /// still advances.
    pub fn advance(&mut self, matched_len: usize, page_size: usize) -> Range<usize> {
        let window = clamp_window(self.page * page_size, (self.page + 1) * page_size, matched_len);
        self.page += 1;
        window
    }

    /// Entries drawn so far: `min(page × page_size, matched_len)`.
    #[must_use]
    pub fn rendered_count(&self, matched_len: usize, page_size: usize) -> usize {
        (self.page * page_size).min(matched_len)
    }

    /// Entries of the matched set not yet drawn.
    #[must_use]
    pub fn remaining(&self, matched_len: usize, page_size: usize) -> usize {
        matched_len - self.rendered_count(matched_len, page_size)
    }
}

/// Entries beyond the first page of a list of `len` entries.
///
/// Used for the initial "Show more" label, computed against the full catalog.
#[must_use]
pub const fn remaining_count(len: usize, page_size: usize) -> usize {
    len.saturating_sub(page_size)
}

fn clamp_window(start: usize, end: usize, len: usize) -> Range<usize> {
    let end = end.min(len);
    start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_after_reset() {
        let mut cursor = PageCursor::new();
        cursor.advance(10, 3);
        cursor.reset();
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.current_slice(10, 3), 0..3);
        assert_eq!(cursor.current_slice(2, 3), 0..2);
        assert_eq!(cursor.current_slice(0, 3), 0..0);
    }

    #[test]
    fn five_entries_in_pages_of_two() {
        let mut cursor = PageCursor::new();
        assert_eq!(cursor.current_slice(5, 2), 0..2);
        assert_eq!(cursor.advance(5, 2), 2..4);
        assert_eq!(cursor.advance(5, 2), 4..5);
        assert_eq!(cursor.rendered_count(5, 2), 5);
        assert_eq!(cursor.remaining(5, 2), 0);
    }

    #[test]
    fn advancing_past_the_end_is_empty() {
        let mut cursor = PageCursor::new();
        cursor.advance(3, 2);
        let window = cursor.advance(3, 2);
        assert!(window.is_empty());
        assert_eq!(cursor.page(), 3);
        assert_eq!(cursor.rendered_count(3, 2), 3);
    }

    #[test]
    fn windows_are_disjoint_and_cover_prefix() {
        let (len, size, k) = (20, 3, 5);
        let mut cursor = PageCursor::new();
        let mut covered = cursor.current_slice(len, size).collect::<Vec<_>>();
        for _ in 1..k {
            let window = cursor.advance(len, size);
            assert_eq!(window.start, covered.len());
            covered.extend(window);
        }
        assert_eq!(covered, (0..k * size).collect::<Vec<_>>());
    }

    #[test]
    fn remaining_count_saturates() {
        assert_eq!(remaining_count(40, 36), 4);
        assert_eq!(remaining_count(10, 36), 0);
    }
}
