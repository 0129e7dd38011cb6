//! Pattern section - matches the password against the weak-pattern rule table.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::PATTERN_RULES;
use crate::types::PatternReport;

/// Evaluates every configured rule against the full password.
///
/// Matching is case-insensitive: the password is normalized to lowercase
/// once and handed to each rule. Matched rule names are reported in
/// rule-definition order, each at most once.
pub fn pattern_section(password: &SecretString) -> PatternReport {
    let lowered = password.expose_secret().to_lowercase();

    let patterns_found: Vec<&'static str> = PATTERN_RULES
        .iter()
        .filter(|rule| rule.matches(&lowered))
        .map(|rule| rule.name)
        .collect();

    PatternReport {
        has_patterns: !patterns_found.is_empty(),
        patterns_found,
    }
}
