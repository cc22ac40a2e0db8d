//! Validation services for the sign-up form.
//!
//! This module provides the rule set applied to each field when the form is
//! submitted. Every field is checked independently; a failing field never
//! prevents the others from being checked.

use super::errors::{ValidationError, ValidationResult};
use super::models::{Field, FieldErrors, FormValues};
use regex::Regex;
use std::sync::LazyLock;

// Loose email shape: something, "@", something, ".", something.
// Unanchored, so it only has to occur somewhere in the value.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Length of a value as a browser text input reports it: characters
/// outside the Basic Multilingual Plane count twice.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Minimum lengths enforced by the validator, counted in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub name_min_len: usize,
    pub password_min_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_len: 3,
            password_min_len: 6,
        }
    }
}

/// Applies the sign-up rules to form values.
///
/// # Examples
///
/// ```
/// use signup_tui::domain::{Field, FormValidator, FormValues, ValidationError};
///
/// let validator = FormValidator::default();
/// let values = FormValues::new("Al", "alice@example.com", "");
/// let errors = validator.validate(&values);
///
/// assert_eq!(errors.get(Field::Name), Some(&ValidationError::NameTooShort(3)));
/// assert_eq!(errors.get(Field::Email), None);
/// assert_eq!(errors.get(Field::Password), Some(&ValidationError::PasswordRequired));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator {
    rules: ValidationRules,
}

impl FormValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Checks a single field value.
    ///
    /// The "required" check runs first; the shape or length check only runs
    /// on non-empty values. Whitespace counts as content.
    pub fn check_field(&self, field: Field, value: &str) -> ValidationResult<()> {
        match field {
            Field::Name => {
                if value.is_empty() {
                    Err(ValidationError::NameRequired)
                } else if text_len(value) < self.rules.name_min_len {
                    Err(ValidationError::NameTooShort(self.rules.name_min_len))
                } else {
                    Ok(())
                }
            }
            Field::Email => {
                if value.is_empty() {
                    Err(ValidationError::EmailRequired)
                } else if !EMAIL_REGEX.is_match(value) {
                    Err(ValidationError::InvalidEmail)
                } else {
                    Ok(())
                }
            }
            Field::Password => {
                if value.is_empty() {
                    Err(ValidationError::PasswordRequired)
                } else if text_len(value) < self.rules.password_min_len {
                    Err(ValidationError::PasswordTooShort(self.rules.password_min_len))
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn validate_field(&self, field: Field, value: &str) -> Option<ValidationError> {
        self.check_field(field, value).err()
    }

    /// Validates all three fields and collects every failure.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(error) = self.validate_field(field, values.get(field)) {
                errors.set(field, error);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(field: Field, value: &str) -> Option<ValidationError> {
        FormValidator::default().validate_field(field, value)
    }

    #[test]
    fn test_empty_fields_are_required() {
        assert_eq!(check(Field::Name, ""), Some(ValidationError::NameRequired));
        assert_eq!(check(Field::Email, ""), Some(ValidationError::EmailRequired));
        assert_eq!(check(Field::Password, ""), Some(ValidationError::PasswordRequired));
    }

    #[test]
    fn test_name_length() {
        assert_eq!(check(Field::Name, "A"), Some(ValidationError::NameTooShort(3)));
        assert_eq!(check(Field::Name, "Al"), Some(ValidationError::NameTooShort(3)));
        assert_eq!(check(Field::Name, "Ali"), None);
        assert_eq!(check(Field::Name, "Alice"), None);
    }

    #[test]
    fn test_name_counts_code_units_not_bytes() {
        // "Zoë" is four bytes but three code units
        assert_eq!(check(Field::Name, "Zoë"), None);
        assert_eq!(check(Field::Name, "ëë"), Some(ValidationError::NameTooShort(3)));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        assert_eq!(check(Field::Name, "😀a"), None);
        assert_eq!(check(Field::Name, "😀"), Some(ValidationError::NameTooShort(3)));
        assert_eq!(check(Field::Password, "😀😀😀"), None);
        assert_eq!(check(Field::Password, "😀😀a"), Some(ValidationError::PasswordTooShort(6)));
    }

    #[test]
    fn test_whitespace_is_content() {
        assert_eq!(check(Field::Name, "   "), None);
        assert_eq!(check(Field::Name, " "), Some(ValidationError::NameTooShort(3)));
    }

    #[test]
    fn test_email_format() {
        assert_eq!(check(Field::Email, "abc"), Some(ValidationError::InvalidEmail));
        assert_eq!(check(Field::Email, "a@b"), Some(ValidationError::InvalidEmail));
        assert_eq!(check(Field::Email, "a b@c.d"), None);
        assert_eq!(check(Field::Email, "@b.c"), Some(ValidationError::InvalidEmail));
        assert_eq!(check(Field::Email, "a@.c"), Some(ValidationError::InvalidEmail));
        assert_eq!(check(Field::Email, "a@b."), Some(ValidationError::InvalidEmail));
        assert_eq!(check(Field::Email, "a@b.c"), None);
        assert_eq!(check(Field::Email, "alice@example.com"), None);
    }

    #[test]
    fn test_password_length() {
        assert_eq!(check(Field::Password, "1"), Some(ValidationError::PasswordTooShort(6)));
        assert_eq!(check(Field::Password, "12345"), Some(ValidationError::PasswordTooShort(6)));
        assert_eq!(check(Field::Password, "123456"), None);
        assert_eq!(check(Field::Password, "secret1"), None);
    }

    #[test]
    fn test_validate_checks_every_field() {
        let errors = FormValidator::default().validate(&FormValues::default());
        assert_eq!(errors.len(), 3);

        let values = FormValues::new("Alice", "alice@example.com", "secret1");
        assert!(FormValidator::default().validate(&values).is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let validator = FormValidator::new(ValidationRules {
            name_min_len: 1,
            password_min_len: 10,
        });
        assert_eq!(validator.validate_field(Field::Name, "A"), None);
        assert_eq!(
            validator.validate_field(Field::Password, "secret1").map(|e| e.message()),
            Some("Password must be at least 10 characters".to_string())
        );
    }
}
