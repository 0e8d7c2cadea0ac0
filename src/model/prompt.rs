//! Prompt formatting: pure functions from selection state to prompt text.

use super::form::FormState;
use super::functionality::FunctionalityState;
use super::tab::Tab;

/// First line of every Functionality prompt.
pub const FUNCTIONALITY_HEADER: &str =
    "I need the website to have all these features and functionalities:";

/// Prefix of each feature line after the header.
const LINE_PREFIX: &str = "\n- ";

/// Builds the prompt for the tab currently shown.
pub fn generate(tab: Tab, form: &FormState, functionality: &FunctionalityState) -> String {
    match tab {
        Tab::Functionality => functionality_prompt(functionality),
        Tab::Ui | Tab::Logic | Tab::Database => form_prompt(form),
    }
}

/// Interpolates the sentence template `"{do} {what} {how} {condition} {action}. {additional}"`.
///
/// Only the ends are trimmed: unset slots leave their separators behind.
pub fn form_prompt(form: &FormState) -> String {
    format!(
        "{} {} {} {} {}. {}",
        form.verb, form.what, form.how, form.condition, form.action, form.additional
    )
    .trim()
    .to_string()
}

/// Composes the header plus one line per satisfied feature group.
pub fn functionality_prompt(state: &FunctionalityState) -> String {
    let mut prompt = String::from(FUNCTIONALITY_HEADER);
    let mut push_line = |line: String| {
        prompt.push_str(LINE_PREFIX);
        prompt.push_str(&line);
    };

    if !state.listings.is_empty() {
        push_line(format!("Listing with {}", state.listings.joined()));
    }
    if !state.search_filtering.is_empty() {
        push_line(format!(
            "Search and Filtering By: {}",
            state.search_filtering.joined()
        ));
    }
    if !state.organize_by.is_empty() && !state.organize_categories.is_empty() {
        push_line(format!(
            "Organize {} by {}",
            state.organize_by,
            state.organize_categories.joined()
        ));
    }
    if !state.details_for.is_empty() && !state.details_with.is_empty() {
        push_line(format!(
            "Create Individual pages for {} with {}",
            state.details_for,
            state.details_with.joined()
        ));
    }
    if !state.register_for.is_empty() && !state.registration_options.is_empty() {
        push_line(format!(
            "multi-tiered authentication system for {} with {}",
            state.register_for.joined(),
            state.registration_options.joined()
        ));
    }
    if !state.security_considerations.is_empty() {
        push_line(format!(
            "For Security Considerations, {}",
            state.security_considerations.joined()
        ));
    }
    if !state.additional.is_empty() {
        push_line(state.additional.joined());
    }

    prompt
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::{ChoiceField, FormField, MultiChoice, MultiField};

    fn form(values: [&str; 6]) -> FormState {
        let mut state = FormState::default();
        for (field, value) in FormField::all().iter().zip(values) {
            state.set(*field, value);
        }
        state
    }

    fn choices(items: &[&str]) -> MultiChoice {
        items.iter().copied().collect()
    }

    mod form_template {
        use super::*;

        #[test]
        fn all_fields_set() {
            let state = form([
                "Make",
                "Button",
                "Subtly rise up",
                "When",
                "You move your mouse over them",
                "Keep the original color scheme",
            ]);
            assert_eq!(
                form_prompt(&state),
                "Make Button Subtly rise up When You move your mouse over them. Keep the original color scheme"
            );
        }

        #[test]
        fn only_do_keeps_inner_spaces() {
            let state = form(["Make", "", "", "", "", ""]);
            assert_eq!(form_prompt(&state), "Make    .");
        }

        #[test]
        fn all_empty_trims_to_period() {
            assert_eq!(form_prompt(&FormState::default()), ".");
        }

        #[test]
        fn only_additional_leads_with_period() {
            let state = form(["", "", "", "", "", "Maintain accessibility standards"]);
            assert_eq!(form_prompt(&state), ". Maintain accessibility standards");
        }

        #[test]
        fn gap_in_middle_is_not_collapsed() {
            let state = form(["Add", "Card", "", "After", "The page loads", ""]);
            assert_eq!(form_prompt(&state), "Add Card  After The page loads.");
        }

        #[quickcheck]
        fn all_set_joins_with_single_spaces(
            d: String,
            w: String,
            h: String,
            c: String,
            a: String,
            x: String,
        ) -> TestResult {
            let values = [&d, &w, &h, &c, &a, &x];
            if values.iter().any(|v| v.is_empty() || v.trim() != v.as_str()) {
                return TestResult::discard();
            }
            let state = form([&d, &w, &h, &c, &a, &x].map(String::as_str));
            TestResult::from_bool(form_prompt(&state) == format!("{d} {w} {h} {c} {a}. {x}"))
        }
    }

    mod functionality_template {
        use super::*;

        #[test]
        fn empty_state_is_header_only() {
            assert_eq!(
                functionality_prompt(&FunctionalityState::default()),
                FUNCTIONALITY_HEADER
            );
        }

        #[test]
        fn listings_only() {
            let state = FunctionalityState {
                listings: choices(&["a", "b"]),
                ..Default::default()
            };
            assert_eq!(
                functionality_prompt(&state),
                "I need the website to have all these features and functionalities:\n- Listing with a, b"
            );
        }

        #[test]
        fn organize_by_without_categories_omits_line() {
            let state = FunctionalityState {
                organize_by: "businesses".into(),
                ..Default::default()
            };
            assert_eq!(functionality_prompt(&state), FUNCTIONALITY_HEADER);
        }

        #[test]
        fn categories_without_organize_by_omits_line() {
            let state = FunctionalityState {
                organize_categories: choices(&["Nearby"]),
                ..Default::default()
            };
            assert_eq!(functionality_prompt(&state), FUNCTIONALITY_HEADER);
        }

        #[test]
        fn details_need_both_halves() {
            let mut state = FunctionalityState::default();
            state.set_choice(ChoiceField::DetailsFor, "Products");
            assert_eq!(functionality_prompt(&state), FUNCTIONALITY_HEADER);
            state.set_checked(MultiField::DetailsWith, "photos", true);
            assert!(
                functionality_prompt(&state)
                    .ends_with("\n- Create Individual pages for Products with photos")
            );
        }

        #[test]
        fn registration_needs_both_halves() {
            let mut state = FunctionalityState::default();
            state.set_checked(MultiField::RegistrationOptions, "Google social login", true);
            assert_eq!(functionality_prompt(&state), FUNCTIONALITY_HEADER);
            state.set_checked(MultiField::RegisterFor, "seller", true);
            assert!(functionality_prompt(&state).ends_with(
                "\n- multi-tiered authentication system for seller with Google social login"
            ));
        }

        #[test]
        fn every_group_in_fixed_order() {
            let state = FunctionalityState {
                listings: choices(&["website", "hours"]),
                search_filtering: choices(&["location"]),
                organize_by: "services".into(),
                organize_categories: choices(&["All", "Nearby"]),
                details_for: "Vendors".into(),
                details_with: choices(&["ratings", "price"]),
                register_for: choices(&["regular user", "admin user"]),
                registration_options: choices(&["email/password signup"]),
                security_considerations: choices(&["Secure password storage (hashing)"]),
                additional: choices(&["Suggest tools", "Start with the homepage"]),
            };
            insta::assert_snapshot!(functionality_prompt(&state), @r"
            I need the website to have all these features and functionalities:
            - Listing with website, hours
            - Search and Filtering By: location
            - Organize services by All, Nearby
            - Create Individual pages for Vendors with ratings, price
            - multi-tiered authentication system for regular user, admin user with email/password signup
            - For Security Considerations, Secure password storage (hashing)
            - Suggest tools, Start with the homepage
            ");
        }

        #[test]
        fn selection_order_is_preserved() {
            let mut state = FunctionalityState::default();
            state.set_checked(MultiField::SearchFiltering, "name", true);
            state.set_checked(MultiField::SearchFiltering, "category", true);
            state.set_checked(MultiField::SearchFiltering, "location", true);
            insta::assert_snapshot!(functionality_prompt(&state), @r"
            I need the website to have all these features and functionalities:
            - Search and Filtering By: name, category, location
            ");
        }
    }

    #[test]
    fn generate_dispatches_on_tab() {
        let form_state = form(["Create", "Table", "Securely", "When", "User logs in", ""]);
        let functionality = FunctionalityState::default();
        for tab in [Tab::Ui, Tab::Logic, Tab::Database] {
            assert_eq!(
                generate(tab, &form_state, &functionality),
                "Create Table Securely When User logs in."
            );
        }
        assert_eq!(
            generate(Tab::Functionality, &form_state, &functionality),
            FUNCTIONALITY_HEADER
        );
    }
}
