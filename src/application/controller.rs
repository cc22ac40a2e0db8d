//! Form controller: the sign-up form's state machine.
//!
//! The controller owns the field values, the per-field errors and the last
//! accepted snapshot. Renderers read it through the accessor methods and
//! drive it through [`FormController::set_field`], [`FormController::submit`]
//! and [`FormController::reset`].

use super::config::{FormConfig, StaleErrorPolicy};
use crate::domain::{
    Field, FieldErrors, FormValidator, FormValues, FormView, SubmittedSnapshot, ValidationError,
};
use tracing::{debug, info};

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; carries the snapshot that was just stored.
    /// The caller shows the acknowledgement once per accepted outcome.
    Accepted(SubmittedSnapshot),
    /// At least one field failed; carries the errors from this attempt only.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Owns the sign-up form state for one screen instance.
///
/// # Examples
///
/// ```
/// use signup_tui::application::{FormController, SubmitOutcome};
/// use signup_tui::domain::Field;
///
/// let mut form = FormController::default();
/// form.set_field(Field::Name, "Alice");
/// form.set_field(Field::Email, "alice@example.com");
/// form.set_field(Field::Password, "secret1");
///
/// assert!(form.submit().is_accepted());
/// assert_eq!(form.snapshot().map(|s| s.get(Field::Name)), Some("Alice"));
///
/// form.reset();
/// assert!(form.snapshot().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormController {
    values: FormValues,
    errors: FieldErrors,
    snapshot: Option<SubmittedSnapshot>,
    validator: FormValidator,
    config: FormConfig,
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            snapshot: None,
            validator: FormValidator::new(config.rules),
            config,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Overwrites one field value. Never validates.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(field = field.label(), len = value.chars().count(), "field changed");
        self.values.set(field, value);
    }

    /// Validates all three fields and either stores a new snapshot or
    /// records the failures.
    ///
    /// A rejected attempt never touches the snapshot.
    pub fn submit(&mut self) -> SubmitOutcome {
        let failures = self.validator.validate(&self.values);

        if failures.is_empty() {
            self.errors.clear();
            let snapshot = SubmittedSnapshot::capture(&self.values);
            self.snapshot = Some(snapshot.clone());
            info!("submission accepted");
            return SubmitOutcome::Accepted(snapshot);
        }

        if self.config.stale_errors == StaleErrorPolicy::Clear {
            self.errors.clear();
        }
        for (field, error) in failures.iter() {
            self.errors.set(field, *error);
        }
        debug!(errors = failures.len(), "submission rejected");
        SubmitOutcome::Rejected(failures)
    }

    /// Empties every field, drops all errors and forgets the snapshot.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.snapshot = None;
        info!("form reset");
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            values: &self.values,
            errors: &self.errors,
            submitted: self.snapshot.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut FormController, name: &str, email: &str, password: &str) {
        form.set_field(Field::Name, name);
        form.set_field(Field::Email, email);
        form.set_field(Field::Password, password);
    }

    fn valid_form() -> FormController {
        let mut form = FormController::default();
        fill(&mut form, "Alice", "alice@example.com", "secret1");
        form
    }

    #[test]
    fn test_default_state() {
        let form = FormController::default();
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert!(form.error(field).is_none());
        }
        assert!(form.snapshot().is_none());
        assert!(!form.has_errors());
    }

    #[test]
    fn test_set_field_does_not_validate() {
        let mut form = FormController::default();
        form.set_field(Field::Name, "A");
        assert_eq!(form.value(Field::Name), "A");
        assert!(!form.has_errors());
    }

    #[test]
    fn test_empty_submit_reports_every_required_error() {
        let mut form = FormController::default();
        let outcome = form.submit();

        assert!(!outcome.is_accepted());
        assert_eq!(form.error(Field::Name), Some(&ValidationError::NameRequired));
        assert_eq!(form.error(Field::Email), Some(&ValidationError::EmailRequired));
        assert_eq!(form.error(Field::Password), Some(&ValidationError::PasswordRequired));
        assert!(form.snapshot().is_none());
    }

    #[test]
    fn test_single_empty_field_yields_only_its_required_error() {
        let mut form = valid_form();
        form.set_field(Field::Email, "");
        let outcome = form.submit();

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.get(Field::Email), Some(&ValidationError::EmailRequired));
            }
            SubmitOutcome::Accepted(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_valid_submit_stores_snapshot() {
        let mut form = valid_form();
        let outcome = form.submit();

        let expected = FormValues::new("Alice", "alice@example.com", "secret1");
        assert_eq!(outcome, SubmitOutcome::Accepted(SubmittedSnapshot::capture(&expected)));
        assert_eq!(form.snapshot().map(|s| s.values()), Some(&expected));
        assert!(!form.has_errors());
    }

    #[test]
    fn test_snapshot_does_not_follow_later_edits() {
        let mut form = valid_form();
        form.submit();
        form.set_field(Field::Name, "Bob");

        assert_eq!(form.snapshot().map(|s| s.get(Field::Name)), Some("Alice"));
    }

    #[test]
    fn test_failed_submit_keeps_previous_snapshot() {
        let mut form = valid_form();
        form.submit();
        let before = form.snapshot().cloned();

        form.set_field(Field::Password, "123");
        let outcome = form.submit();

        assert!(!outcome.is_accepted());
        assert_eq!(form.snapshot().cloned(), before);
        assert_eq!(form.error(Field::Password), Some(&ValidationError::PasswordTooShort(6)));
    }

    #[test]
    fn test_second_success_replaces_snapshot() {
        let mut form = valid_form();
        form.submit();
        form.set_field(Field::Name, "Alicia");
        form.submit();

        assert_eq!(form.snapshot().map(|s| s.get(Field::Name)), Some("Alicia"));
    }

    #[test]
    fn test_success_clears_errors() {
        let mut form = FormController::default();
        form.submit();
        assert!(form.has_errors());

        fill(&mut form, "Alice", "alice@example.com", "secret1");
        form.submit();
        assert!(!form.has_errors());
    }

    #[test]
    fn test_clear_policy_drops_stale_errors() {
        let mut form = FormController::default();
        form.submit();

        form.set_field(Field::Name, "Alice");
        form.submit();

        assert!(form.error(Field::Name).is_none());
        assert_eq!(form.error(Field::Email), Some(&ValidationError::EmailRequired));
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn test_retain_policy_keeps_stale_errors() {
        let config = FormConfig::default().with_stale_errors(StaleErrorPolicy::Retain);
        let mut form = FormController::new(config);
        form.submit();

        form.set_field(Field::Name, "Alice");
        let outcome = form.submit();

        // the outcome reports only this attempt's failures
        match outcome {
            SubmitOutcome::Rejected(errors) => assert!(errors.get(Field::Name).is_none()),
            SubmitOutcome::Accepted(_) => panic!("expected rejection"),
        }
        assert_eq!(form.error(Field::Name), Some(&ValidationError::NameRequired));

        form.set_field(Field::Email, "alice@example.com");
        form.set_field(Field::Password, "secret1");
        form.submit();
        assert!(!form.has_errors());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = valid_form();
        form.submit();
        form.set_field(Field::Email, "broken");
        form.submit();

        form.reset();

        assert_eq!(form.values(), &FormValues::default());
        assert!(!form.has_errors());
        assert!(form.snapshot().is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = valid_form();
        once.submit();
        once.reset();

        let mut twice = valid_form();
        twice.submit();
        twice.reset();
        twice.reset();

        assert_eq!(once.values(), twice.values());
        assert_eq!(once.errors(), twice.errors());
        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_view_after_accepted_submit() {
        let mut form = valid_form();
        form.submit();

        let json = serde_json::to_value(form.view()).unwrap();
        let expected = serde_json::json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret1",
        });
        assert_eq!(json["submitted"], expected);
        assert_eq!(json["values"], expected);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_view_after_rejected_submit() {
        let mut form = FormController::default();
        form.set_field(Field::Email, "a@b");
        form.submit();

        let view = form.view();
        assert!(view.submitted.is_none());
        assert_eq!(view.errors.len(), 3);

        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["errors"]["email"], "Invalid email format");
        assert!(json.get("submitted").is_none());
    }

    #[test]
    fn test_custom_rules_flow_into_validation() {
        let rules = crate::domain::ValidationRules {
            name_min_len: 5,
            password_min_len: 6,
        };
        let mut form = FormController::new(FormConfig::default().with_rules(rules));
        fill(&mut form, "Ali", "ali@example.com", "secret1");
        form.submit();

        assert_eq!(form.error(Field::Name), Some(&ValidationError::NameTooShort(5)));
    }
}
