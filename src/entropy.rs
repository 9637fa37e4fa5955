//! A coarse, explainable entropy estimate.

use std::collections::BTreeSet;

use crate::charset::CharacterClass;

/// Estimate the entropy of `password` in bits as `length * log2(charset size)`.
///
/// The charset size is the sum of the alphabet sizes of the classes actually present in the
/// password; characters outside every class add nothing to it but still count toward the length.
/// This is a brute-force-resistance proxy, not the Shannon entropy of how the password was made.
pub fn estimate_entropy(password: &str) -> f64 {
    let mut length = 0usize;
    let mut present = BTreeSet::new();
    for c in password.chars() {
        length += 1;
        if let Some(class) = CharacterClass::of(c) {
            present.insert(class);
        }
    }
    let charset_size: usize = present.iter().map(|class| class.size()).sum();
    if charset_size > 1 {
        length as f64 * (charset_size as f64).log2()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(estimate_entropy(""), 0.0);
    }

    #[test]
    fn unrecognized_only_is_zero() {
        assert_eq!(estimate_entropy("   ~~é"), 0.0);
    }

    #[test]
    fn single_class() {
        assert!(close(estimate_entropy("abcdefgh"), 8.0 * 26f64.log2()));
        assert!(close(estimate_entropy("0000"), 4.0 * 10f64.log2()));
    }

    #[test]
    fn all_classes() {
        assert!(close(estimate_entropy("Tr7$mK9!Lp2"), 11.0 * 85f64.log2()));
    }

    #[test]
    fn unrecognized_chars_count_toward_length_only() {
        assert!(close(estimate_entropy("ab cd"), 5.0 * 26f64.log2()));
    }

    #[test]
    fn doubling_doubles() {
        let s = "Xq3!pz";
        let doubled = format!("{s}{s}");
        assert!(close(estimate_entropy(&doubled) / estimate_entropy(s), 2.0));
    }
}
