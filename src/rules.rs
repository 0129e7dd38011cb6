//! Process-wide analysis configuration.
//!
//! Length thresholds and the weak-pattern rule table are constructed once
//! and never mutated, so any number of concurrent callers may read them
//! without synchronization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum acceptable password length (NIST SP 800-63B).
pub const MIN_LENGTH: usize = 8;

/// Recommended password length.
pub const RECOMMENDED_LENGTH: usize = 12;

/// A named weak-pattern matcher.
///
/// Rules are case-insensitive: the pattern section hands them the password
/// normalized to lowercase.
pub(crate) struct PatternRule {
    pub(crate) name: &'static str,
    matcher: Matcher,
}

enum Matcher {
    Regex(Regex),
    /// Any single character repeated `min_run` or more times consecutively.
    RepeatedRun(usize),
}

impl PatternRule {
    pub(crate) fn matches(&self, lowered: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(re) => re.is_match(lowered),
            Matcher::RepeatedRun(min_run) => has_repeated_run(lowered, *min_run),
        }
    }
}

/// The fixed, ordered rule table. Evaluation order is definition order.
pub(crate) static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule {
            name: "sequential",
            matcher: Matcher::Regex(Regex::new("abc|123|qwerty").unwrap()),
        },
        PatternRule {
            name: "repeated",
            matcher: Matcher::RepeatedRun(3),
        },
        PatternRule {
            name: "common",
            matcher: Matcher::Regex(Regex::new("password|admin").unwrap()),
        },
    ]
});

fn has_repeated_run(text: &str, min_run: usize) -> bool {
    let mut run = 1;
    let mut prev = None;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            run = 1;
            prev = Some(c);
        }
    }
    false
}
