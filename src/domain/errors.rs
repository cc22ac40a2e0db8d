use thiserror::Error;

/// A validation failure attached to a single form field.
///
/// The display text of each variant is the message shown inline under the
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least {0} characters long")]
    NameTooShort(usize),
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

impl ValidationError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
