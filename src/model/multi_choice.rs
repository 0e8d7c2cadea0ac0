/// Separator used when a multi-choice field is rendered into a prompt.
const JOIN_SEPARATOR: &str = ", ";

/// An ordered set of strings kept in toggle order.
///
/// Checking an option appends it if absent; unchecking removes it by value.
/// Remaining entries never move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiChoice {
    items: Vec<String>,
}

impl MultiChoice {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets membership of `option` to `checked`.
    pub fn set_checked(&mut self, option: &str, checked: bool) {
        if checked {
            if !self.contains(option) {
                self.items.push(option.to_string());
            }
        } else {
            self.items.retain(|item| item != option);
        }
    }

    /// Flips membership of `option`.
    pub fn toggle(&mut self, option: &str) {
        let checked = !self.contains(option);
        self.set_checked(option, checked);
    }

    /// Returns `true` if `option` is selected.
    pub fn contains(&self, option: &str) -> bool {
        self.items.iter().any(|item| item == option)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected entries in toggle order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Joins the entries with `", "`.
    pub fn joined(&self) -> String {
        self.items.join(JOIN_SEPARATOR)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for MultiChoice {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut choice = Self::new();
        for item in iter {
            let item = item.into();
            choice.set_checked(&item, true);
        }
        choice
    }
}
