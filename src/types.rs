//! Analysis result types.
//!
//! These are plain values: an [`AnalysisResult`] is created fresh for every
//! call and carries no identity beyond its fields.

use thiserror::Error;

use crate::rules::RECOMMENDED_LENGTH;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Password must not be empty")]
    InvalidInput,
}

/// Length adequacy of a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthReport {
    /// Character count (Unicode scalar values, not bytes).
    pub length: usize,
    pub meets_minimum: bool,
    pub meets_recommended: bool,
}

impl LengthReport {
    /// Normalized length sub-score, saturating at the recommended length.
    pub fn score(&self) -> f64 {
        (self.length as f64 / RECOMMENDED_LENGTH as f64).min(1.0)
    }
}

/// Character-class composition of a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityReport {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_special: bool,
    /// Number of distinct characters.
    pub unique_chars: usize,
}

impl ComplexityReport {
    /// Fraction of the four character classes present.
    pub fn score(&self) -> f64 {
        let present = [
            self.has_lowercase,
            self.has_uppercase,
            self.has_numbers,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count();
        present as f64 / 4.0
    }
}

/// Weak patterns detected in a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternReport {
    pub has_patterns: bool,
    /// Identifiers of matched rules, in rule-definition order, each at most once.
    pub patterns_found: Vec<&'static str>,
}

impl PatternReport {
    /// Sub-score with a 0.2 penalty per matched rule, floored at zero.
    pub fn score(&self) -> f64 {
        (1.0 - 0.2 * self.patterns_found.len() as f64).max(0.0)
    }
}

/// Coarse strength bucket derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "weak"),
            Strength::Medium => write!(f, "medium"),
            Strength::Strong => write!(f, "strong"),
        }
    }
}

/// Complete result of one password analysis.
///
/// Returned by [`analyze_password`](crate::analyze_password). All fields are
/// computed from the input alone; the analyzer holds no per-call state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub length: LengthReport,
    pub complexity: ComplexityReport,
    pub patterns: PatternReport,
    /// Shannon-entropy heuristic scaled by length. Not a cryptographic measure.
    pub entropy: f64,
    /// Normalized strength score, always in `[0.0, 1.0]`.
    pub score: f64,
    /// Ordered remediation suggestions; empty means no detected weaknesses.
    pub feedback: Vec<String>,
}

impl AnalysisResult {
    /// Buckets the score: `< 0.5` weak, `< 0.8` medium, otherwise strong.
    pub fn strength(&self) -> Strength {
        if self.score >= 0.8 {
            Strength::Strong
        } else if self.score >= 0.5 {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}
