use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four independent prompt-building contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Ui,
    Functionality,
    Logic,
    Database,
}

static ALL_TABS: &[Tab] = &[Tab::Ui, Tab::Functionality, Tab::Logic, Tab::Database];

impl Tab {
    /// Returns all tabs in display order.
    pub fn all() -> &'static [Tab] {
        ALL_TABS
    }

    /// Title shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Ui => "UI",
            Tab::Functionality => "Functionality/Features",
            Tab::Logic => "Logic",
            Tab::Database => "Database",
        }
    }

    /// Short badge shown next to the tab heading.
    pub fn badge(&self) -> &'static str {
        match self {
            Tab::Ui => "UI",
            Tab::Functionality => "Features",
            Tab::Logic => "Logic",
            Tab::Database => "Database",
        }
    }

    /// Heading describing what the tab's form builds.
    pub fn heading(&self) -> &'static str {
        match self {
            Tab::Ui => "User Interface Components",
            Tab::Functionality => "Functionality & Features",
            Tab::Logic => "Business Logic",
            Tab::Database => "Data Management",
        }
    }

    /// Returns `true` for the tabs backed by the shared [`FormState`](super::FormState).
    pub fn is_form(&self) -> bool {
        !matches!(self, Tab::Functionality)
    }

    /// Zero-based position of this tab in [`Tab::all`].
    pub fn index(&self) -> usize {
        ALL_TABS.iter().position(|t| t == self).unwrap_or(0)
    }
}

#[mutants::skip]
impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
