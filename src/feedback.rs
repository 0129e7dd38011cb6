//! Feedback generation - converts failed checks into ordered suggestions.

use crate::rules::{MIN_LENGTH, RECOMMENDED_LENGTH};
use crate::types::{ComplexityReport, LengthReport, PatternReport};

/// Emits remediation suggestions in a fixed priority order: length first,
/// then missing character classes (lowercase, uppercase, numbers, special),
/// then a single generic pattern warning. An empty list means no weaknesses
/// were detected by the configured checks.
pub fn generate_feedback(
    length: &LengthReport,
    complexity: &ComplexityReport,
    patterns: &PatternReport,
) -> Vec<String> {
    let mut feedback = Vec::new();

    if !length.meets_minimum {
        feedback.push(format!(
            "Password must be at least {} characters long",
            MIN_LENGTH
        ));
    } else if !length.meets_recommended {
        feedback.push(format!(
            "Consider using at least {} characters",
            RECOMMENDED_LENGTH
        ));
    }

    if !complexity.has_lowercase {
        feedback.push("Add lowercase letters".to_string());
    }
    if !complexity.has_uppercase {
        feedback.push("Add uppercase letters".to_string());
    }
    if !complexity.has_numbers {
        feedback.push("Add numbers".to_string());
    }
    if !complexity.has_special {
        feedback.push("Add special characters".to_string());
    }

    if patterns.has_patterns {
        feedback.push("Avoid common patterns and sequences".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_report(length: usize) -> LengthReport {
        LengthReport {
            length,
            meets_minimum: length >= MIN_LENGTH,
            meets_recommended: length >= RECOMMENDED_LENGTH,
        }
    }

    fn full_complexity() -> ComplexityReport {
        ComplexityReport {
            has_lowercase: true,
            has_uppercase: true,
            has_numbers: true,
            has_special: true,
            unique_chars: 12,
        }
    }

    fn no_patterns() -> PatternReport {
        PatternReport {
            has_patterns: false,
            patterns_found: vec![],
        }
    }

    #[test]
    fn test_feedback_below_minimum_length() {
        let feedback = generate_feedback(&length_report(5), &full_complexity(), &no_patterns());
        assert_eq!(
            feedback,
            vec!["Password must be at least 8 characters long".to_string()]
        );
    }

    #[test]
    fn test_feedback_below_recommended_length() {
        let feedback = generate_feedback(&length_report(10), &full_complexity(), &no_patterns());
        assert_eq!(
            feedback,
            vec!["Consider using at least 12 characters".to_string()]
        );
    }

    #[test]
    fn test_feedback_priority_order() {
        let complexity = ComplexityReport {
            has_lowercase: false,
            has_uppercase: false,
            has_numbers: false,
            has_special: false,
            unique_chars: 1,
        };
        let patterns = PatternReport {
            has_patterns: true,
            patterns_found: vec!["repeated"],
        };
        let feedback = generate_feedback(&length_report(3), &complexity, &patterns);
        assert_eq!(
            feedback,
            vec![
                "Password must be at least 8 characters long".to_string(),
                "Add lowercase letters".to_string(),
                "Add uppercase letters".to_string(),
                "Add numbers".to_string(),
                "Add special characters".to_string(),
                "Avoid common patterns and sequences".to_string(),
            ]
        );
    }

    #[test]
    fn test_feedback_single_pattern_message_for_multiple_rules() {
        let patterns = PatternReport {
            has_patterns: true,
            patterns_found: vec!["sequential", "repeated", "common"],
        };
        let feedback = generate_feedback(&length_report(14), &full_complexity(), &patterns);
        assert_eq!(
            feedback,
            vec!["Avoid common patterns and sequences".to_string()]
        );
    }

    #[test]
    fn test_feedback_empty_for_clean_password() {
        let feedback = generate_feedback(&length_report(16), &full_complexity(), &no_patterns());
        assert!(feedback.is_empty());
    }
}
