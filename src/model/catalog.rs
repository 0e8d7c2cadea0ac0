//! Static option catalogs offered for each field on each tab.

use super::form::FormField;
use super::functionality::{ChoiceField, FunctionalityField, MultiField};
use super::tab::Tab;

/// Option lists for the six sentence slots of one form tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCatalog {
    pub verbs: &'static [&'static str],
    pub what: &'static [&'static str],
    pub how: &'static [&'static str],
    pub condition: &'static [&'static str],
    pub action: &'static [&'static str],
    pub additional: &'static [&'static str],
}

impl FormCatalog {
    /// Returns the options offered for `field`.
    pub fn options(&self, field: FormField) -> &'static [&'static str] {
        match field {
            FormField::Do => self.verbs,
            FormField::What => self.what,
            FormField::How => self.how,
            FormField::Condition => self.condition,
            FormField::Action => self.action,
            FormField::Additional => self.additional,
        }
    }
}

static UI_DO: &[&str] = &["Make", "Add", "Change", "Delete"];
static UI_WHAT: &[&str] = &[
    "Button",
    "Input field",
    "Navigation menu",
    "Header",
    "Footer",
    "Card",
    "Color",
];
static UI_HOW: &[&str] = &[
    "Subtly rise up",
    "Fade in smoothly",
    "Slide from left",
    "Scale up gently",
];
static CONDITIONS: &[&str] = &["When", "If", "After", "Before"];
static UI_ACTIONS: &[&str] = &[
    "You move your mouse over them",
    "You click on them",
    "The page loads",
    "You scroll down",
];
static ADDITIONAL: &[&str] = &[
    "Please don't make any changes to its width or height",
    "Make sure you keep the same dimensions regardless of screen sizes",
    "Keep the original color scheme",
    "Maintain accessibility standards",
];

static UI_CATALOG: FormCatalog = FormCatalog {
    verbs: UI_DO,
    what: UI_WHAT,
    how: UI_HOW,
    condition: CONDITIONS,
    action: UI_ACTIONS,
    additional: ADDITIONAL,
};

static LOGIC_CATALOG: FormCatalog = FormCatalog {
    verbs: &["Implement", "Create", "Update", "Remove"],
    what: &["Logic", "Rule", "Validation", "Condition"],
    how: &["Automatically", "Dynamically", "Conditionally"],
    condition: CONDITIONS,
    action: UI_ACTIONS,
    additional: ADDITIONAL,
};

static DATABASE_CATALOG: FormCatalog = FormCatalog {
    verbs: &["Create", "Update", "Delete", "Query"],
    what: &["Table", "Record", "Field", "Relationship"],
    how: &["Efficiently", "Securely", "Automatically"],
    condition: CONDITIONS,
    action: &["Data is submitted", "User logs in", "Record is created"],
    additional: ADDITIONAL,
};

impl Tab {
    /// Returns the sentence-slot catalog for form tabs, `None` for Functionality.
    pub fn form_catalog(&self) -> Option<&'static FormCatalog> {
        match self {
            Tab::Ui => Some(&UI_CATALOG),
            Tab::Logic => Some(&LOGIC_CATALOG),
            Tab::Database => Some(&DATABASE_CATALOG),
            Tab::Functionality => None,
        }
    }
}

static LISTINGS: &[&str] = &[
    "Company profiles with name",
    "description",
    "contact info",
    "website",
    "hours",
];

static SEARCH_FILTERING: &[&str] = &["location", "category", "name", "services offered"];

static ORGANIZE_BY: &[&str] = &[
    "businesses",
    "services",
    "candidates",
    "vendors/sellers",
    "courses",
];

static ORGANIZE_CATEGORIES: &[&str] = &[
    "product types(women fashion, men fashion, kids fashion, heavy equipments)",
    "All",
    "Random",
    "Nearby",
    "Restaurants",
    "Healthcare",
    "Retail",
];

static DETAILS_FOR: &[&str] = &[
    "Products",
    "Businesses",
    "Vendors",
    "Sellers",
    "Services",
    "Service Providers",
];

static DETAILS_WITH: &[&str] = &[
    "photos",
    "videos",
    "full descriptions",
    "social links",
    "ratings",
    "comments",
    "price",
    "website link",
    "verified badge",
];

static REGISTER_FOR: &[&str] = &[
    "regular user",
    "business owner",
    "seller",
    "vendor",
    "admin user",
];

static REGISTRATION_OPTIONS: &[&str] = &[
    "email/password signup",
    "phone/OTP login(Ensure to Remember the credentials for 30 days",
    "Username/Password Signup(Create a clear and simple process for users to check username availability.)",
    "Google social login",
    "X social login",
    "Facebook social login",
    "Phone Number + OTP(First time only) + Password (Database query: Check if \"Phone Number\" already Exists -> Yes(Go to \"Enter Password\"), No (Go to \"Phone Number\" with \"OTP\" -> then \"Enter Password\")",
    "Password reset via email/OTP(Ensure to send the code only, No reset link)",
    "Two-factor authentication for business accounts",
    "Use Secure login sessions with appropriate timeouts",
];

static SECURITY: &[&str] = &[
    "Password strength requirements is minimum 8 characters",
    "Rate limiting on login is 5 attempts",
    "Secure password storage (hashing)",
    "Protected routes based on authentication status",
];

static FUNCTIONALITY_ADDITIONAL: &[&str] = &[
    "Begin with a homepage and listing layout first, and then set up the database structure using Supabase",
    "Set up the database structure using Supabase first and then continue to design home page and layout",
    "Suggest any Tool that you can provide to detect and prevent spam listings and fake reviews.",
];

/// Returns the options offered for a Functionality field.
pub fn functionality_options(field: FunctionalityField) -> &'static [&'static str] {
    match field {
        FunctionalityField::Single(ChoiceField::OrganizeBy) => ORGANIZE_BY,
        FunctionalityField::Single(ChoiceField::DetailsFor) => DETAILS_FOR,
        FunctionalityField::Multi(MultiField::Listings) => LISTINGS,
        FunctionalityField::Multi(MultiField::SearchFiltering) => SEARCH_FILTERING,
        FunctionalityField::Multi(MultiField::OrganizeCategories) => ORGANIZE_CATEGORIES,
        FunctionalityField::Multi(MultiField::DetailsWith) => DETAILS_WITH,
        FunctionalityField::Multi(MultiField::RegisterFor) => REGISTER_FOR,
        FunctionalityField::Multi(MultiField::RegistrationOptions) => REGISTRATION_OPTIONS,
        FunctionalityField::Multi(MultiField::SecurityConsiderations) => SECURITY,
        FunctionalityField::Multi(MultiField::Additional) => FUNCTIONALITY_ADDITIONAL,
    }
}
