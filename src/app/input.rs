//! Translation of host key and mouse input into application events.
//!
//! The same key means different things depending on [`Focus`]: `j` moves the
//! list cursor while browsing but types a letter into the search title.
//! Mouse clicks are resolved through the [`HitMap`] produced by the last
//! render, so a click always refers to what is actually on screen.
//!
//! # Keybindings
//!
//! List:
//! - `j`/`Down`/`Ctrl+n`, `k`/`Up`/`Ctrl+p`: move selection (wraps)
//! - `Enter`: open the selected entry
//! - `m`/`Space`: show more
//! - `/`: search
//! - `t`: settings
//! - `q`/`Esc`: hide the plugin
//!
//! Search:
//! - `Tab`/`Shift+Tab`: next/previous control
//! - `Left`/`Right`: cycle the focused select
//! - characters, `Backspace`: edit the title
//! - `Enter`: submit, `Esc`: cancel
//!
//! Settings:
//! - `Left`/`Right`/`Tab`: cycle theme
//! - `Enter`: apply, `Esc`: cancel
//!
//! Detail:
//! - `Esc`/`Enter`/`q`: close

use crate::app::modes::{Focus, Overlay, SearchField};
use crate::app::{AppState, Event};
use crate::ui::viewmodel::{HitMap, HitTarget};
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier, Mouse};

/// Maps a key press to an application event, or `None` if the key does
/// nothing in the current focus.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    tracing::debug!(bare_key = ?key.bare_key, focus = ?state.focus, "key event");

    match state.focus {
        Focus::List => map_list_key(state, key),
        Focus::Search(field) => map_search_key(field, key),
        Focus::Settings => match key.bare_key {
            BareKey::Left => Some(Event::OptionPrev),
            BareKey::Right => Some(Event::OptionNext),
            BareKey::Tab => Some(Event::NextField),
            BareKey::Enter => Some(Event::SettingsSubmit),
            BareKey::Esc => Some(Event::CloseOverlay(Overlay::Settings)),
            _ => None,
        },
        Focus::Detail => match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseOverlay(Overlay::Detail)),
            _ => None,
        },
    }
}

fn map_list_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::KeyDown);
    }
    if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::KeyUp);
    }

    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Enter => Event::ItemActivated(state.surface.selected_handle().cloned()),
        BareKey::Char('m' | ' ') => Event::ShowMore,
        BareKey::Char('/') => Event::OpenSearch,
        BareKey::Char('t') => Event::OpenSettings,
        BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
        _ => return None,
    })
}

fn map_search_key(field: SearchField, key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
        BareKey::Tab => Event::NextField,
        BareKey::Enter => Event::SearchSubmit,
        BareKey::Esc => Event::CloseOverlay(Overlay::Search),
        BareKey::Left if field != SearchField::Title => Event::OptionPrev,
        BareKey::Right if field != SearchField::Title => Event::OptionNext,
        BareKey::Backspace if field == SearchField::Title => Event::Backspace,
        BareKey::Char(c) if field == SearchField::Title => Event::Char(c),
        _ => return None,
    })
}

/// Maps a mouse event to an application event.
///
/// Only the list reacts to the mouse. A left click on a row drawn for an entry
/// activates it, a click on the button row shows more, and a click anywhere
/// else yields `ItemActivated(None)`, which the handler ignores.
#[must_use]
pub fn map_mouse(state: &AppState, mouse: &Mouse, hits: &HitMap) -> Option<Event> {
    if state.focus != Focus::List {
        return None;
    }

    match mouse {
        Mouse::ScrollDown(_) => Some(Event::KeyDown),
        Mouse::ScrollUp(_) => Some(Event::KeyUp),
        Mouse::LeftClick(line, _col) => {
            let event = match hits.target_at(*line) {
                Some(HitTarget::Item(handle)) => Event::ItemActivated(Some(handle.clone())),
                Some(HitTarget::ShowMore) => Event::ShowMore,
                None => Event::ItemActivated(None),
            };
            tracing::debug!(line, event = ?event, "click resolved");
            Some(event)
        }
        _ => None,
    }
}
