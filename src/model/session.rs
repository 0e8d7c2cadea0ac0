//! The prompt-building session: all selection state plus the output buffer.

use super::form::{FormField, FormState};
use super::functionality::{ChoiceField, FunctionalityState, MultiField};
use super::prompt;
use super::tab::Tab;

/// A discrete input to the [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Show a different tab. The other tab's state is left untouched.
    SwitchTab(Tab),
    /// Set a sentence slot, from a catalog pick or free text.
    SetField(FormField, String),
    /// Pick a value for a single-choice Functionality field.
    Choose(ChoiceField, String),
    /// Check or uncheck a Functionality checkbox.
    SetChecked {
        field: MultiField,
        option: String,
        checked: bool,
    },
    /// The user edited the output buffer directly.
    EditOutput(String),
    /// Clear the state behind the active tab, keeping the output buffer.
    Reset,
}

/// Synchronous reducer over selection state and the editable output buffer.
///
/// UI, Logic and Database share one [`FormState`]; Functionality has its own
/// [`FunctionalityState`]. After every selection change the prompt for the
/// active tab is recomputed and written to the buffer, unless the active
/// tab's state is empty or the result is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    tab: Tab,
    form: FormState,
    functionality: FunctionalityState,
    output: String,
}

impl Session {
    /// Creates an empty session showing `tab`.
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Applies `event` and returns `true` if the output buffer was
    /// overwritten by a recompute.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::SwitchTab(tab) => {
                if tab == self.tab {
                    return false;
                }
                self.tab = tab;
            }
            Event::SetField(field, value) => self.form.set(field, value),
            Event::Choose(field, value) => self.functionality.set_choice(field, value),
            Event::SetChecked {
                field,
                option,
                checked,
            } => self.functionality.set_checked(field, &option, checked),
            Event::EditOutput(text) => {
                self.output = text;
                return false;
            }
            Event::Reset => {
                self.reset_active();
                return false;
            }
        }
        self.refresh_output()
    }

    /// Recomputes the prompt and stores it if non-empty.
    ///
    /// An active tab with nothing selected counts as an empty recompute, even
    /// though the template alone still formats to `"."` or the bare header.
    fn refresh_output(&mut self) -> bool {
        if self.active_is_empty() {
            return false;
        }
        let generated = self.generate();
        self.store_generated(generated)
    }

    /// Returns `true` if the state behind the active tab has no selection.
    fn active_is_empty(&self) -> bool {
        if self.tab.is_form() {
            self.form.is_empty()
        } else {
            self.functionality.is_empty()
        }
    }

    fn store_generated(&mut self, generated: String) -> bool {
        if generated.is_empty() {
            return false;
        }
        self.output = generated;
        true
    }

    fn reset_active(&mut self) {
        if self.tab.is_form() {
            self.form.reset();
        } else {
            self.functionality.reset();
        }
    }

    /// Formats the active tab's state without touching the buffer.
    pub fn generate(&self) -> String {
        prompt::generate(self.tab, &self.form, &self.functionality)
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn functionality(&self) -> &FunctionalityState {
        &self.functionality
    }

    /// Returns the editable output buffer.
    pub fn output(&self) -> &str {
        &self.output
    }
}
