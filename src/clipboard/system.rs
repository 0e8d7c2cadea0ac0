use super::{Clipboard, ClipboardError};

/// The system clipboard, via `arboard`.
///
/// The handle is opened on first write and then kept: on X11 and Wayland the
/// copied text only stays available while the handle is alive. A failed write
/// drops the handle so the next copy opens a fresh one.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(ClipboardError::Open)?,
        };
        clipboard.set_text(text).map_err(ClipboardError::Write)?;
        self.inner = Some(clipboard);
        Ok(())
    }
}
