//! Search form panel renderer.
//!
//! Draws the search overlay: the title text field and the genre and author
//! selects, with the focused control's label in the accent colour.

use super::panel::Frame;
use crate::app::modes::SearchField;
use crate::ui::theme::ThemePalette;
use crate::ui::viewmodel::SearchPanelInfo;

/// Renders the search panel over the list.
///
/// # Layout
///
/// ```text
/// ┌ Search ─────────────────────┐
/// │                             │
/// │ Title    dune_              │
/// │ Genre    < All Genres >     │
/// │ Author   < All Authors >    │
/// │                             │
/// └─────────────────────────────┘
/// ```
///
/// The focused title field shows a trailing `_` as its caret.
pub fn render_search_panel(info: &SearchPanelInfo, palette: &ThemePalette, cols: usize) {
    let frame = Frame::new(5, cols);
    frame.draw("Search", palette);

    let caret = if info.focused == SearchField::Title { "_" } else { "" };
    frame.field(1, "Title    ", &format!("{}{caret}", info.title), info.focused == SearchField::Title, palette);
    frame.field(2, "Genre    ", &format!("< {} >", info.genre), info.focused == SearchField::Genre, palette);
    frame.field(3, "Author   ", &format!("< {} >", info.author), info.focused == SearchField::Author, palette);
}
