//! Length section - measures length against minimum and recommended thresholds.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{MIN_LENGTH, RECOMMENDED_LENGTH};
use crate::types::LengthReport;

/// Measures password length in characters.
///
/// Length is counted in Unicode scalar values, not bytes. Empty input is
/// rejected before this section runs.
pub fn length_section(password: &SecretString) -> LengthReport {
    let length = password.expose_secret().chars().count();
    LengthReport {
        length,
        meets_minimum: length >= MIN_LENGTH,
        meets_recommended: length >= RECOMMENDED_LENGTH,
    }
}
