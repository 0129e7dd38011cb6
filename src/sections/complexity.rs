//! Complexity section - checks for lowercase, uppercase, numbers, special chars.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use crate::types::ComplexityReport;

/// Classifies the password by four independent character-class predicates.
///
/// The special class is the fixed ASCII punctuation set.
pub fn complexity_section(password: &SecretString) -> ComplexityReport {
    let pwd = password.expose_secret();

    let has_lowercase = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_numbers = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| c.is_ascii_punctuation());
    let unique_chars = pwd.chars().collect::<HashSet<char>>().len();

    ComplexityReport {
        has_lowercase,
        has_uppercase,
        has_numbers,
        has_special,
        unique_chars,
    }
}
