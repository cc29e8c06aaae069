//! Signup form validation library
//!
//! This library implements the validation and strength engine behind a
//! signup form: per-field validation, password strength scoring, and
//! submit gating around an injected asynchronous backend. The UI layer
//! supplies field values on each event and renders the results; the core
//! exposes typed functions only and never touches the document.
//!
//! # Features
//!
//! - `async` (default): Enables the submit flow with an injected backend
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SIGNUP_SUBMIT_DELAY_MS`: Simulated backend delay in milliseconds
//!   (default: `2000`)
//!
//! # Example
//!
//! ```rust
//! use signup_validation::{FormEvent, FormState};
//! use secrecy::SecretString;
//!
//! let mut form = FormState::new();
//! form.apply(FormEvent::Email("user@example.com".to_string()));
//! form.apply(FormEvent::Password(SecretString::new("Abc12345!".to_string().into())));
//! form.apply(FormEvent::Confirm(SecretString::new("Abc12345!".to_string().into())));
//! form.apply(FormEvent::Terms(true));
//!
//! let strength = form.strength();
//! println!("Score: {}", strength.score().value());
//! println!("{}", strength);
//!
//! assert!(form.can_submit());
//! ```

// Internal modules
mod fields;
mod form;
mod rules;
mod strength;

#[cfg(feature = "async")]
mod submit;

// Public API
pub use fields::{
    Field, FieldError, FieldState, MIN_STRENGTH_SCORE, validate_confirm, validate_email,
    validate_password, validate_terms,
};
pub use form::{FormEvent, FormSnapshot, FormState, can_submit};
pub use rules::{MIN_LENGTH, RuleId, RuleReport, evaluate_rules};
pub use strength::{Score, Strength, StrengthReport, evaluate_password_strength};

#[cfg(feature = "async")]
pub use submit::{
    SimulatedBackend, SubmitError, SubmitGate, SubmitOutcome, Submitter, submit_form,
    submit_form_tx,
};
