//! Character class rules - uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

/// Checks if the password contains an uppercase character.
pub fn has_uppercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_uppercase())
}

/// Checks if the password contains a lowercase character.
pub fn has_lowercase(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_lowercase())
}

/// Checks if the password contains a digit.
pub fn has_digit(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains a special character.
pub fn has_symbol(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| !c.is_alphanumeric())
}
