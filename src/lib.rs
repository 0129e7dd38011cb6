//! Password strength analysis library
//!
//! This library scores a candidate password and returns structured,
//! actionable feedback: length adequacy, character-class complexity,
//! weak-pattern matches, an entropy estimate, one normalized strength
//! score and ordered improvement suggestions.
//!
//! The analyzer is a pure function of its input: no I/O, no shared mutable
//! state, safe to call from any number of threads.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based delivery of analysis results
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::analyze_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let analysis = analyze_password(&password).expect("password is not empty");
//!
//! println!("Score: {:.2}", analysis.score);
//! println!("Strength: {}", analysis.strength());
//! for suggestion in &analysis.feedback {
//!     println!("- {}", suggestion);
//! }
//! ```

// Internal modules
mod analyzer;
mod feedback;
mod rules;
mod sections;
mod types;

// Public API
pub use analyzer::analyze_password;
pub use rules::{MIN_LENGTH, RECOMMENDED_LENGTH};
pub use types::{
    AnalysisResult, AnalyzerError, ComplexityReport, LengthReport, PatternReport, Strength,
};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
