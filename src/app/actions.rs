//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) directly and
//! returns a `Vec<Action>` for anything that must reach the host. Everything
//! drawn on screen lives in the surface, so the only host-level effect left is
//! hiding the plugin pane.

/// Commands to be executed by the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave the browser (e.g. pressing 'q').
    CloseFocus,
}
