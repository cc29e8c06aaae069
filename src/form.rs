//! Form state - field synchronization and the submit-time snapshot.
//!
//! The UI layer maps its input/change events onto [`FormEvent`] values and
//! renders whatever the state reports back; the core owns the validation
//! decisions only and never touches the document.

use secrecy::{ExposeSecret, SecretString};

use crate::fields::{
    FieldState, validate_confirm, validate_email, validate_password, validate_terms,
};
use crate::strength::{StrengthReport, evaluate_password_strength};

/// A change reported by the UI layer.
#[derive(Debug)]
pub enum FormEvent {
    Fullname(String),
    Email(String),
    Password(SecretString),
    Confirm(SecretString),
    Terms(bool),
    Remember(bool),
}

/// Field values captured only at submit time.
#[derive(Debug)]
pub struct FormSnapshot {
    pub fullname: String,
    pub email: String,
    pub password: SecretString,
    pub remember: bool,
}

/// True iff all four field validations pass.
pub fn can_submit(
    email: &FieldState<String>,
    password: &FieldState<SecretString>,
    confirm: &FieldState<SecretString>,
    terms: &FieldState<bool>,
) -> bool {
    email.is_valid() && password.is_valid() && confirm.is_valid() && terms.is_valid()
}

/// In-memory state of the signup form. Transient; lives only for the
/// page session.
#[derive(Debug)]
pub struct FormState {
    fullname: String,
    email: FieldState<String>,
    password: FieldState<SecretString>,
    confirm: FieldState<SecretString>,
    terms: FieldState<bool>,
    remember: bool,
}

impl FormState {
    /// Creates an empty form. Every validated field starts invalid.
    pub fn new() -> Self {
        let email = FieldState::new(String::new(), validate_email(""));

        let password_value = SecretString::new(String::new().into());
        let password_error = validate_password(&password_value);
        let password = FieldState::new(password_value, password_error);

        let confirm_value = SecretString::new(String::new().into());
        let confirm_error = validate_confirm(password.value(), &confirm_value);
        let confirm = FieldState::new(confirm_value, confirm_error);

        FormState {
            fullname: String::new(),
            email,
            password,
            confirm,
            terms: FieldState::new(false, validate_terms(false)),
            remember: false,
        }
    }

    /// Applies one UI event, revalidating the fields it touches.
    ///
    /// A password change also revalidates the confirm field, since confirm
    /// validity depends on both values.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::Fullname(value) => self.fullname = value,
            FormEvent::Email(value) => {
                let result = validate_email(&value);
                self.email = FieldState::new(value, result);
            }
            FormEvent::Password(value) => {
                let result = validate_password(&value);
                self.password = FieldState::new(value, result);
                let confirm_result = validate_confirm(self.password.value(), self.confirm.value());
                self.confirm.revalidate(confirm_result);
            }
            FormEvent::Confirm(value) => {
                let result = validate_confirm(self.password.value(), &value);
                self.confirm = FieldState::new(value, result);
            }
            FormEvent::Terms(accepted) => {
                self.terms = FieldState::new(accepted, validate_terms(accepted));
            }
            FormEvent::Remember(enabled) => self.remember = enabled,
        }
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn email(&self) -> &FieldState<String> {
        &self.email
    }

    pub fn password(&self) -> &FieldState<SecretString> {
        &self.password
    }

    pub fn confirm(&self) -> &FieldState<SecretString> {
        &self.confirm
    }

    pub fn terms(&self) -> &FieldState<bool> {
        &self.terms
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    /// Strength report for the current password, for the meter, label and
    /// requirement hints.
    pub fn strength(&self) -> StrengthReport {
        evaluate_password_strength(self.password.value())
    }

    /// Gates the submit control.
    pub fn can_submit(&self) -> bool {
        can_submit(&self.email, &self.password, &self.confirm, &self.terms)
    }

    /// Captures the submit payload. Fullname and email are trimmed the way
    /// the form reads them.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fullname: self.fullname.trim().to_string(),
            email: self.email.value().trim().to_string(),
            password: SecretString::new(
                self.password.value().expose_secret().to_string().into(),
            ),
            remember: self.remember,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Field, FieldError};

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.apply(FormEvent::Email("user@example.com".to_string()));
        form.apply(FormEvent::Password(secret("Abc12345!")));
        form.apply(FormEvent::Confirm(secret("Abc12345!")));
        form.apply(FormEvent::Terms(true));
        form
    }

    #[test]
    fn test_new_form_is_not_submittable() {
        let form = FormState::new();

        assert!(!form.can_submit());
        assert_eq!(form.email().error(), Some(FieldError::Required(Field::Email)));
        assert_eq!(
            form.password().error(),
            Some(FieldError::Required(Field::Password))
        );
        assert_eq!(
            form.confirm().error(),
            Some(FieldError::Required(Field::Confirm))
        );
        assert_eq!(form.terms().error(), Some(FieldError::Unaccepted));
    }

    #[test]
    fn test_filled_form_is_submittable() {
        let form = filled_form();
        assert!(form.can_submit());
    }

    #[test]
    fn test_any_invalid_field_blocks_submission() {
        let mut form = filled_form();
        form.apply(FormEvent::Terms(false));
        assert!(!form.can_submit());

        let mut form = filled_form();
        form.apply(FormEvent::Email("not-an-email".to_string()));
        assert!(!form.can_submit());
        assert_eq!(form.email().message(), "Please enter a valid email address");

        let mut form = filled_form();
        form.apply(FormEvent::Password(secret("short1")));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_password_change_revalidates_confirm() {
        let mut form = filled_form();
        assert!(form.confirm().is_valid());

        form.apply(FormEvent::Password(secret("Xyz98765!")));

        assert_eq!(form.confirm().error(), Some(FieldError::Mismatch));
        assert_eq!(form.confirm().message(), "Passwords do not match");
        assert!(!form.can_submit());

        // Matching the confirm field again restores submittability.
        form.apply(FormEvent::Confirm(secret("Xyz98765!")));
        assert!(form.can_submit());
    }

    #[test]
    fn test_confirm_before_password() {
        let mut form = FormState::new();
        form.apply(FormEvent::Confirm(secret("Abc12345!")));
        assert_eq!(form.confirm().error(), Some(FieldError::Mismatch));

        form.apply(FormEvent::Password(secret("Abc12345!")));
        assert!(form.confirm().is_valid());
    }

    #[test]
    fn test_strength_follows_current_password() {
        use crate::strength::Strength;

        let mut form = FormState::new();
        assert_eq!(form.strength().score().value(), 0);

        form.apply(FormEvent::Password(secret("Abc12345!")));
        assert_eq!(form.strength().score().value(), 100);
        assert_eq!(form.strength().strength(), Strength::Strong);
    }

    #[test]
    fn test_snapshot_captures_trimmed_values() {
        let mut form = filled_form();
        form.apply(FormEvent::Fullname("  Ada Lovelace  ".to_string()));
        form.apply(FormEvent::Email("  user@example.com ".to_string()));
        form.apply(FormEvent::Remember(true));

        let snapshot = form.snapshot();

        assert_eq!(snapshot.fullname, "Ada Lovelace");
        assert_eq!(snapshot.email, "user@example.com");
        assert_eq!(snapshot.password.expose_secret(), "Abc12345!");
        assert!(snapshot.remember);
    }

    #[test]
    fn test_can_submit_over_field_states() {
        let form = filled_form();
        assert!(can_submit(
            form.email(),
            form.password(),
            form.confirm(),
            form.terms()
        ));

        let empty = FormState::new();
        assert!(!can_submit(
            empty.email(),
            empty.password(),
            empty.confirm(),
            empty.terms()
        ));
    }
}
