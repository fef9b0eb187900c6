//! Property-based tests for form validation.

use super::{FormFields, FormValidator, REQUIRED_MESSAGE};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Validation is a pure function of the submitted fields.
    #[test]
    fn validate_is_deterministic(
        first in ".{0,12}",
        last in ".{0,12}",
        email in ".{0,24}",
    ) {
        let fields = FormFields::new()
            .with("first_name", first)
            .with("last_name", last)
            .with("email", email);
        let validator = FormValidator::reservation_form(3);
        prop_assert_eq!(validator.validate(&fields), validator.validate(&fields));
    }

    #[test]
    fn valid_iff_no_errors(first in ".{0,12}", email in ".{0,24}") {
        let fields = FormFields::new()
            .with("first_name", first)
            .with("email", email);
        let result = FormValidator::reservation_form(3).validate(&fields);
        prop_assert_eq!(result.valid, result.errors.is_empty());
    }

    #[test]
    fn whitespace_only_is_blank(spaces in "[ \t]{0,8}") {
        let fields = FormFields::new().with("last_name", spaces);
        let result = FormValidator::new().required(&["last_name"]).validate(&fields);
        prop_assert_eq!(result.errors.get("last_name"), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn min_length_threshold(name in "[a-z]{0,10}", min in 0usize..8) {
        let fields = FormFields::new().with("first_name", name.clone());
        let result = FormValidator::new().min_length("first_name", min).validate(&fields);
        prop_assert_eq!(result.valid, name.chars().count() >= min);
    }
}
