/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    /// Rendered in the destructive (red) style.
    Failure,
}

/// A short transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    /// Reported after the prompt reached the clipboard.
    pub fn copied() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Copied to clipboard!",
            description: "Your prompt has been copied successfully.",
        }
    }

    /// Reported when the clipboard write failed.
    pub fn copy_failed() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Failed to copy",
            description: "Please try again.",
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copied_is_success() {
        let n = Notification::copied();
        assert!(n.is_success());
        assert_eq!(n.title, "Copied to clipboard!");
    }

    #[test]
    fn copy_failed_is_failure() {
        let n = Notification::copy_failed();
        assert!(!n.is_success());
        assert_eq!(n.kind, NotificationKind::Failure);
        assert_eq!(n.description, "Please try again.");
    }
}
