//! Entropy section - Shannon-entropy randomness estimate.

use std::collections::BTreeMap;

use secrecy::{ExposeSecret, SecretString};

/// Estimates randomness from the character-frequency distribution.
///
/// Computes per-character Shannon entropy and scales it by length: more
/// distinct characters relative to length, and longer passwords, both raise
/// the estimate. A heuristic, not a combinatorial entropy measure.
/// Undefined for empty input, which is rejected before this section runs.
pub fn entropy_section(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let mut freq: BTreeMap<char, usize> = BTreeMap::new();
    for c in pwd.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    let per_char: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / length as f64;
            -p * p.log2()
        })
        .sum();

    per_char * length as f64
}
