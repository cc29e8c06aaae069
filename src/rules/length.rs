//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Minimum password length, shared by the strength rule and field validity.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
pub fn has_min_length(password: &SecretString) -> bool {
    password.expose_secret().len() >= MIN_LENGTH
}
