//! Shannon entropy of strings.

use std::collections::HashMap;

/// Computes the base-2 Shannon entropy of `s` over its character distribution.
///
/// `-Σ p(c)·log2(p(c))` where `p(c)` is the relative frequency of character
/// `c`. The entropy of an empty string is 0.
pub fn entropy(s: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
