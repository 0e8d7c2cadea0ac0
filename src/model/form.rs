/// A slot in the sentence template shared by the UI, Logic and Database tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Do,
    What,
    How,
    Condition,
    Action,
    Additional,
}

static ALL_FORM_FIELDS: &[FormField] = &[
    FormField::Do,
    FormField::What,
    FormField::How,
    FormField::Condition,
    FormField::Action,
    FormField::Additional,
];

impl FormField {
    /// Returns all fields in template order.
    pub fn all() -> &'static [FormField] {
        ALL_FORM_FIELDS
    }

    /// Numbered label shown above the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Do => "1. Do",
            FormField::What => "2. What",
            FormField::How => "3. How",
            FormField::Condition => "4. Condition",
            FormField::Action => "5. Action",
            FormField::Additional => "6. Additional",
        }
    }

    /// Hint for picking from the catalog.
    pub fn select_hint(&self) -> &'static str {
        match self {
            FormField::Do => "Select action...",
            FormField::What => "Select element...",
            FormField::How => "Select method...",
            FormField::Condition => "Select condition...",
            FormField::Action => "Select trigger...",
            FormField::Additional => "Select constraint...",
        }
    }

    /// Placeholder for the free-text input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Do => "Or type custom action...",
            FormField::What => "Or type custom element...",
            FormField::How => "Or type custom method...",
            FormField::Condition => "Or type custom condition...",
            FormField::Action => "Or type custom trigger...",
            FormField::Additional => "Or type additional requirements...",
        }
    }
}

/// Selection state for the UI, Logic and Database tabs.
///
/// Each slot holds one string; an empty string means unset. Picking from the
/// catalog and typing free text both write the same slot, last writer wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// The "Do" slot.
    pub verb: String,
    pub what: String,
    pub how: String,
    pub condition: String,
    pub action: String,
    pub additional: String,
}

impl FormState {
    /// Returns the current value of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Do => &self.verb,
            FormField::What => &self.what,
            FormField::How => &self.how,
            FormField::Condition => &self.condition,
            FormField::Action => &self.action,
            FormField::Additional => &self.additional,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Do => &mut self.verb,
            FormField::What => &mut self.what,
            FormField::How => &mut self.how,
            FormField::Condition => &mut self.condition,
            FormField::Action => &mut self.action,
            FormField::Additional => &mut self.additional,
        };
        *slot = value.into();
    }

    /// Returns `true` if every slot is empty.
    pub fn is_empty(&self) -> bool {
        FormField::all().iter().all(|&f| self.get(f).is_empty())
    }

    /// Clears every slot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
