use super::multi_choice::MultiChoice;

/// Single-choice fields on the Functionality tab. Catalog picks only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceField {
    OrganizeBy,
    DetailsFor,
}

/// Multi-choice (checkbox) fields on the Functionality tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiField {
    Listings,
    SearchFiltering,
    OrganizeCategories,
    DetailsWith,
    RegisterFor,
    RegistrationOptions,
    SecurityConsiderations,
    Additional,
}

/// Any field on the Functionality tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalityField {
    Single(ChoiceField),
    Multi(MultiField),
}

static ALL_FUNCTIONALITY_FIELDS: &[FunctionalityField] = &[
    FunctionalityField::Multi(MultiField::Listings),
    FunctionalityField::Multi(MultiField::SearchFiltering),
    FunctionalityField::Single(ChoiceField::OrganizeBy),
    FunctionalityField::Multi(MultiField::OrganizeCategories),
    FunctionalityField::Single(ChoiceField::DetailsFor),
    FunctionalityField::Multi(MultiField::DetailsWith),
    FunctionalityField::Multi(MultiField::RegisterFor),
    FunctionalityField::Multi(MultiField::RegistrationOptions),
    FunctionalityField::Multi(MultiField::SecurityConsiderations),
    FunctionalityField::Multi(MultiField::Additional),
];

impl FunctionalityField {
    /// Returns all ten fields in display order.
    pub fn all() -> &'static [FunctionalityField] {
        ALL_FUNCTIONALITY_FIELDS
    }

    /// Section label shown above the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Multi(MultiField::Listings) => "1. Listings (Multiple Selection)",
            Self::Multi(MultiField::SearchFiltering) => {
                "2. Search and Filtering (Multiple Selection)"
            }
            Self::Single(ChoiceField::OrganizeBy) => "3a. Organize (Single Selection)",
            Self::Multi(MultiField::OrganizeCategories) => "3b. By (Multiple Selection)",
            Self::Single(ChoiceField::DetailsFor) => "4a. For (Single Selection)",
            Self::Multi(MultiField::DetailsWith) => "4b. With (Multiple Selection)",
            Self::Multi(MultiField::RegisterFor) => "5a. For (Multiple Selection)",
            Self::Multi(MultiField::RegistrationOptions) => {
                "5b. Registration Options (Multiple Selection)"
            }
            Self::Multi(MultiField::SecurityConsiderations) => {
                "6. Security Considerations (Multiple Selection)"
            }
            Self::Multi(MultiField::Additional) => "7. Additional (Multiple Selection)",
        }
    }
}

/// Selection state for the Functionality tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionalityState {
    pub listings: MultiChoice,
    pub search_filtering: MultiChoice,
    /// Empty string means unset.
    pub organize_by: String,
    pub organize_categories: MultiChoice,
    /// Empty string means unset.
    pub details_for: String,
    pub details_with: MultiChoice,
    pub register_for: MultiChoice,
    pub registration_options: MultiChoice,
    pub security_considerations: MultiChoice,
    pub additional: MultiChoice,
}

impl FunctionalityState {
    /// Returns the value of a single-choice field.
    pub fn choice(&self, field: ChoiceField) -> &str {
        match field {
            ChoiceField::OrganizeBy => &self.organize_by,
            ChoiceField::DetailsFor => &self.details_for,
        }
    }

    /// Sets a single-choice field.
    pub fn set_choice(&mut self, field: ChoiceField, value: impl Into<String>) {
        let slot = match field {
            ChoiceField::OrganizeBy => &mut self.organize_by,
            ChoiceField::DetailsFor => &mut self.details_for,
        };
        *slot = value.into();
    }

    pub fn multi(&self, field: MultiField) -> &MultiChoice {
        match field {
            MultiField::Listings => &self.listings,
            MultiField::SearchFiltering => &self.search_filtering,
            MultiField::OrganizeCategories => &self.organize_categories,
            MultiField::DetailsWith => &self.details_with,
            MultiField::RegisterFor => &self.register_for,
            MultiField::RegistrationOptions => &self.registration_options,
            MultiField::SecurityConsiderations => &self.security_considerations,
            MultiField::Additional => &self.additional,
        }
    }

    pub fn multi_mut(&mut self, field: MultiField) -> &mut MultiChoice {
        match field {
            MultiField::Listings => &mut self.listings,
            MultiField::SearchFiltering => &mut self.search_filtering,
            MultiField::OrganizeCategories => &mut self.organize_categories,
            MultiField::DetailsWith => &mut self.details_with,
            MultiField::RegisterFor => &mut self.register_for,
            MultiField::RegistrationOptions => &mut self.registration_options,
            MultiField::SecurityConsiderations => &mut self.security_considerations,
            MultiField::Additional => &mut self.additional,
        }
    }

    /// Checks or unchecks `option` in a multi-choice field.
    pub fn set_checked(&mut self, field: MultiField, option: &str, checked: bool) {
        self.multi_mut(field).set_checked(option, checked);
    }

    /// Returns `true` if `option` is currently selected in `field`.
    ///
    /// For single-choice fields this compares against the chosen value.
    pub fn is_selected(&self, field: FunctionalityField, option: &str) -> bool {
        match field {
            FunctionalityField::Single(f) => self.choice(f) == option,
            FunctionalityField::Multi(f) => self.multi(f).contains(option),
        }
    }

    /// Returns `true` if no field has a selection.
    pub fn is_empty(&self) -> bool {
        FunctionalityField::all().iter().all(|&field| match field {
            FunctionalityField::Single(f) => self.choice(f).is_empty(),
            FunctionalityField::Multi(f) => self.multi(f).is_empty(),
        })
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
