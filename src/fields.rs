//! Field validation - the error taxonomy and per-field checks.
//!
//! Every failure here is recoverable by user input; the caller re-renders
//! the field and leaves the form open for correction.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::rules::MIN_LENGTH;
use crate::strength::evaluate_password_strength;

/// Minimum strength score an acceptable password must reach.
pub const MIN_STRENGTH_SCORE: u8 = 40;

// Intentionally lenient local@domain.tld shape, not a full address grammar:
// no embedded whitespace, domain must contain a dot, final segment >= 2 chars.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("Failed to compile email regex")
});

/// The validated signup form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    Confirm,
    Terms,
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::Email => "Email is required",
        Field::Password => "Password is required",
        Field::Confirm => "Please confirm your password",
        Field::Terms => "You must accept the terms and conditions",
    }
}

/// Validation failure for a single field.
///
/// The display text is the message rendered next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{}", required_message(.0))]
    Required(Field),
    #[error("Please enter a valid email address")]
    InvalidFormat,
    #[error("Password must be at least {} characters", MIN_LENGTH)]
    TooShort,
    #[error("Please choose a stronger password")]
    TooWeak,
    #[error("Passwords do not match")]
    Mismatch,
    #[error("You must accept the terms and conditions")]
    Unaccepted,
}

/// Current value and validity of one form field.
#[derive(Debug)]
pub struct FieldState<T> {
    value: T,
    error: Option<FieldError>,
}

impl<T> FieldState<T> {
    pub(crate) fn new(value: T, result: Result<(), FieldError>) -> Self {
        FieldState {
            value,
            error: result.err(),
        }
    }

    pub(crate) fn revalidate(&mut self, result: Result<(), FieldError>) {
        self.error = result.err();
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Error text for rendering; empty when the field is valid.
    pub fn message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// Validates the email field.
///
/// The value is trimmed before checking. Empty input fails as required;
/// anything not matching the lenient address shape fails as invalid.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(FieldError::Required(Field::Email));
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

/// Validates the password field.
///
/// Checks run in a fixed order and report the first failure only:
/// required, then minimum length, then strength score.
pub fn validate_password(password: &SecretString) -> Result<(), FieldError> {
    let pwd = password.expose_secret();

    if pwd.is_empty() {
        return Err(FieldError::Required(Field::Password));
    }
    if pwd.len() < MIN_LENGTH {
        return Err(FieldError::TooShort);
    }
    if evaluate_password_strength(password).score().value() < MIN_STRENGTH_SCORE {
        return Err(FieldError::TooWeak);
    }
    Ok(())
}

/// Validates the confirm field against the current password.
///
/// Must be re-evaluated whenever either value changes.
pub fn validate_confirm(
    password: &SecretString,
    confirm: &SecretString,
) -> Result<(), FieldError> {
    if confirm.expose_secret().is_empty() {
        return Err(FieldError::Required(Field::Confirm));
    }
    if password.expose_secret() != confirm.expose_secret() {
        return Err(FieldError::Mismatch);
    }
    Ok(())
}

/// Validates the terms checkbox.
pub fn validate_terms(accepted: bool) -> Result<(), FieldError> {
    if !accepted {
        return Err(FieldError::Unaccepted);
    }
    Ok(())
}
