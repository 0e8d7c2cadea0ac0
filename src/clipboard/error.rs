/// Errors that can occur while writing to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened.
    #[error("could not open clipboard: {0}")]
    Open(#[source] arboard::Error),

    /// The clipboard was open but refused the text.
    #[error("clipboard write failed: {0}")]
    Write(#[source] arboard::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn messages_name_the_failing_step() {
        let open = ClipboardError::Open(arboard::Error::ClipboardNotSupported);
        assert!(open.to_string().starts_with("could not open clipboard: "));
        let write = ClipboardError::Write(arboard::Error::ClipboardOccupied);
        assert!(write.to_string().starts_with("clipboard write failed: "));
    }

    #[test]
    fn source_is_the_arboard_error() {
        let e = ClipboardError::Write(arboard::Error::ClipboardOccupied);
        assert!(e.source().is_some());
    }
}
