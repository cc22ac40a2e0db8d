//! Controller configuration.
//!
//! Everything has a default matching the stock sign-up screen; callers
//! override individual settings with the `with_*` builders.

use crate::domain::ValidationRules;

pub const DEFAULT_ACKNOWLEDGEMENT: &str = "Form submitted successfully!";

/// What a failed submission does with errors left over from the previous
/// attempt on fields that now pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleErrorPolicy {
    /// Every attempt starts from a clean slate; only fields failing this
    /// attempt carry an error afterwards.
    #[default]
    Clear,
    /// Errors on passing fields survive until a fully valid submission or a
    /// reset.
    Retain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub rules: ValidationRules,
    pub stale_errors: StaleErrorPolicy,
    pub acknowledgement: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            rules: ValidationRules::default(),
            stale_errors: StaleErrorPolicy::default(),
            acknowledgement: DEFAULT_ACKNOWLEDGEMENT.to_string(),
        }
    }
}

impl FormConfig {
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_stale_errors(mut self, policy: StaleErrorPolicy) -> Self {
        self.stale_errors = policy;
        self
    }

    pub fn with_acknowledgement(mut self, message: impl Into<String>) -> Self {
        self.acknowledgement = message.into();
        self
    }
}
