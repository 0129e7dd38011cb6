//! Password strength analyzer demonstration.
//!
//! Runs the analyzer over a fixed set of real-world examples and prints the
//! detailed results. Holds no analyzer state of its own.

use pwd_analyzer::analyze_password;
use secrecy::SecretString;

fn main() {
    println!("\n===== Password Strength Analyzer Demonstration =====");

    let test_cases = [
        ("password123", "Common weak password"),
        ("SecureP@ssw0rd123!", "Strong password with mixed characters"),
        ("abcdef123456", "Sequential pattern password"),
        ("Admin2024!", "Moderate strength with common word"),
    ];

    for (password, description) in test_cases {
        println!("\nTesting: {}", description);
        println!("Password: {}", password);
        println!("{}", "-".repeat(50));

        let secret = SecretString::new(password.to_string().into());
        let analysis = match analyze_password(&secret) {
            Ok(analysis) => analysis,
            Err(err) => {
                eprintln!("Analysis failed: {}", err);
                continue;
            }
        };

        println!(
            "\nStrength Score: {:.1}% ({})",
            analysis.score * 100.0,
            analysis.strength()
        );
        println!("Length: {} characters", analysis.length.length);
        println!("Entropy estimate: {:.1}", analysis.entropy);

        println!("\nComplexity Analysis:");
        let classes = [
            ("Lowercase", analysis.complexity.has_lowercase),
            ("Uppercase", analysis.complexity.has_uppercase),
            ("Numbers", analysis.complexity.has_numbers),
            ("Special", analysis.complexity.has_special),
        ];
        for (label, present) in classes {
            let status = if present { "✓" } else { "✗" };
            println!("  {} {}", status, label);
        }

        if analysis.patterns.has_patterns {
            println!("\nDetected Patterns:");
            for name in &analysis.patterns.patterns_found {
                println!("  ! {} pattern found", name);
            }
        }

        if !analysis.feedback.is_empty() {
            println!("\nImprovement Suggestions:");
            for suggestion in &analysis.feedback {
                println!("  - {}", suggestion);
            }
        }
    }

    println!();
}
