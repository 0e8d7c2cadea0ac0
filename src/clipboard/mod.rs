//! Clipboard access and the copy-to-clipboard action.

mod error;
mod system;

pub use error::ClipboardError;
pub use system::SystemClipboard;

use crate::model::Notification;

/// A host capability that places text on the clipboard.
///
/// A write has exactly two outcomes; callers never retry on their own.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Sends `text` to `clipboard` and describes the outcome for the user.
///
/// Failures are logged and reported; nothing else changes.
pub fn copy_prompt(clipboard: &mut dyn Clipboard, text: &str) -> Notification {
    match clipboard.write_text(text) {
        Ok(()) => {
            tracing::info!(chars = text.chars().count(), "prompt copied to clipboard");
            Notification::copied()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to copy prompt to clipboard");
            Notification::copy_failed()
        }
    }
}
