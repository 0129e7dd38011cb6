//! Password analyzer - orchestration and score aggregation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::feedback::generate_feedback;
use crate::sections::{complexity_section, entropy_section, length_section, pattern_section};
use crate::types::{AnalysisResult, AnalyzerError, ComplexityReport, LengthReport, PatternReport};

/// Analyzes a password and returns a detailed result.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Errors
/// Returns [`AnalyzerError::InvalidInput`] if the password is empty. Every
/// non-empty input produces a valid [`AnalysisResult`].
pub fn analyze_password(password: &SecretString) -> Result<AnalysisResult, AnalyzerError> {
    if password.expose_secret().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("rejected empty password input");
        return Err(AnalyzerError::InvalidInput);
    }

    // Sections are independent of one another; order does not matter.
    let length = length_section(password);
    let complexity = complexity_section(password);
    let patterns = pattern_section(password);
    let entropy = entropy_section(password);

    let score = aggregate_score(&length, &complexity, &patterns, entropy);
    let feedback = generate_feedback(&length, &complexity, &patterns);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, entropy, "password analysis complete");

    Ok(AnalysisResult {
        length,
        complexity,
        patterns,
        entropy,
        score,
        feedback,
    })
}

/// Combines the section results into one normalized score.
///
/// Weights: length 30%, complexity 30%, pattern absence 20%, entropy 20%
/// (saturating at 50 bits). The result is clamped to `[0.0, 1.0]`.
fn aggregate_score(
    length: &LengthReport,
    complexity: &ComplexityReport,
    patterns: &PatternReport,
    entropy: f64,
) -> f64 {
    let raw = length.score() * 0.3
        + complexity.score() * 0.3
        + patterns.score() * 0.2
        + (entropy / 50.0).min(1.0) * 0.2;
    raw.clamp(0.0, 1.0)
}

/// Async version that sends the analysis result via channel.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    tx: mpsc::Sender<Result<AnalysisResult, AnalyzerError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let result = analyze_password(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
