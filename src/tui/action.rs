//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::{Event, Session, Tab};

/// An action that a key handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the session, move focus and drive
/// the copy and reset buttons.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Feed an event to the session.
    Apply(Event),
    /// Show the given tab.
    SwitchTab(Tab),
    /// Move focus into the output editor.
    FocusOutput,
    /// Move focus to the first field of the active tab.
    FocusFirstField,
    /// Move focus to the last field of the active tab.
    FocusLastField,
    /// Clear the active tab's fields, keeping the generated prompt.
    Reset,
    /// Copy the output buffer to the clipboard.
    Copy,
    /// Open the help overlay.
    ShowHelp,
    /// Close the help overlay.
    CloseHelp,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event against the current session and return an
    /// [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Action;
}
