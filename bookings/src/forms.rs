//! Validation of submitted form fields.
//!
//! A [`FormValidator`] is an ordered list of [`FormRule`]s. Validation is
//! pure: every rule runs against the submitted [`FormFields`] and failures
//! accumulate into a field-keyed [`FormErrors`] set, with each field's
//! messages in the order the rules were registered.
//!
//! # Examples
//!
//! ```
//! use bookings::{FormFields, FormValidator};
//!
//! let validator = FormValidator::new()
//!     .required(&["first_name", "email"])
//!     .min_length("first_name", 3)
//!     .is_email("email");
//!
//! let fields = FormFields::new()
//!     .with("first_name", "")
//!     .with("email", "bad");
//!
//! let result = validator.validate(&fields);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors.get("first_name"), Some("This field cannot be blank"));
//! assert_eq!(result.errors.get("email"), Some("Invalid email address"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::reservation::ContactDetails;

/// Message recorded by [`FormRule::Required`].
pub const REQUIRED_MESSAGE: &str = "This field cannot be blank";

/// Message recorded by [`FormRule::IsEmail`].
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

/// Minimum first-name length used by the reservation form.
pub const DEFAULT_FIRST_NAME_MIN_LENGTH: usize = 3;

/// Submitted form values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// Creates an empty set of fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, returning the updated set.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field's value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Returns the field's value, or `""` when it was not submitted.
    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map_or("", String::as_str)
    }

    /// Returns `true` if the field was submitted with a non-empty value.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    /// Records a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns the first message recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Returns every message recorded for a field, in rule order.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[][..], Vec::as_slice)
    }

    /// Returns `true` if no field has errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over fields with errors, in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// A single validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRule {
    /// Each listed field must be non-blank after trimming.
    Required(Vec<String>),
    /// The field must contain at least `length` characters; a missing field
    /// has length zero.
    MinLength {
        /// Field to check.
        field: String,
        /// Minimum number of characters.
        length: usize,
    },
    /// The field must hold a syntactically valid email address.
    IsEmail(String),
}

impl FormRule {
    fn apply(&self, fields: &FormFields, errors: &mut FormErrors) {
        match self {
            Self::Required(names) => {
                for name in names {
                    if fields.get(name).trim().is_empty() {
                        errors.add(name.as_str(), REQUIRED_MESSAGE);
                    }
                }
            }
            Self::MinLength { field, length } => {
                if fields.get(field).chars().count() < *length {
                    errors.add(
                        field.as_str(),
                        format!("This field must be at least {length} characters long"),
                    );
                }
            }
            Self::IsEmail(field) => {
                let value = fields.get(field);
                if !value.validate_email() {
                    errors.add(field.as_str(), INVALID_EMAIL_MESSAGE);
                }
            }
        }
    }
}

/// Outcome of validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Messages per failing field.
    pub errors: FormErrors,
    /// `true` when no rule failed.
    pub valid: bool,
}

impl ValidationResult {
    /// Returns `true` when no rule failed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

/// An ordered set of validation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidator {
    rules: Vec<FormRule>,
}

impl FormValidator {
    /// Creates a validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules applied to the reservation contact form.
    ///
    /// First name, last name and email are required, the first name needs at
    /// least `first_name_min_length` characters and the email must be valid.
    #[must_use]
    pub fn reservation_form(first_name_min_length: usize) -> Self {
        Self::new()
            .required(&[
                ContactDetails::FIRST_NAME,
                ContactDetails::LAST_NAME,
                ContactDetails::EMAIL,
            ])
            .min_length(ContactDetails::FIRST_NAME, first_name_min_length)
            .is_email(ContactDetails::EMAIL)
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule(mut self, rule: FormRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Requires each of `fields` to be non-blank.
    #[must_use]
    pub fn required(self, fields: &[&str]) -> Self {
        self.rule(FormRule::Required(
            fields.iter().map(ToString::to_string).collect(),
        ))
    }

    /// Requires `field` to have at least `length` characters.
    #[must_use]
    pub fn min_length(self, field: &str, length: usize) -> Self {
        self.rule(FormRule::MinLength {
            field: field.to_string(),
            length,
        })
    }

    /// Requires `field` to be a valid email address.
    #[must_use]
    pub fn is_email(self, field: &str) -> Self {
        self.rule(FormRule::IsEmail(field.to_string()))
    }

    /// Returns the registered rules.
    #[must_use]
    pub fn rules(&self) -> &[FormRule] {
        &self.rules
    }

    /// Runs every rule against `fields`.
    #[must_use]
    pub fn validate(&self, fields: &FormFields) -> ValidationResult {
        let mut errors = FormErrors::default();
        for rule in &self.rules {
            rule.apply(fields, &mut errors);
        }
        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
