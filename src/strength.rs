//! Rule-based password strength scoring.
//!
//! Scoring is a pure function of the password: a point score built from length, the classes
//! present and a handful of penalties, which is then bucketed into a [`StrengthLevel`] together
//! with the number of distinct classes present.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::charset::CharacterClass;

/// Passwords shorter than this are always [`StrengthLevel::Weak`].
pub const MIN_LENGTH: usize = 8;

const VERY_STRONG_THRESHOLD: i32 = 45;
const STRONG_THRESHOLD: i32 = 30;
const MEDIUM_THRESHOLD: i32 = 15;

static ALPHA_SEQUENCES: &[&str] = &[
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm", "lmn", "mno",
    "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz", "qwe", "wer",
    "ert", "rty", "tyu", "yui", "uio", "iop", "asd", "sdf", "dfg", "ghj", "hjk", "zxc", "xcv",
    "cvb", "vbn", "bnm",
];

static NUMERIC_SEQUENCES: &[&str] = &[
    "123", "234", "345", "456", "567", "678", "789", "890", "098", "987", "876", "765", "654",
    "543", "432", "321",
];

static WEAK_WORDS: &[&str] = &[
    "password", "pass", "admin", "administrator", "user", "username", "login", "logon", "guest",
    "test", "secret", "qwerty", "azerty", "12345", "123456", "1234567", "12345678", "123456789",
    "root", "support", "service", "welcome", "example", "demo", "changeme",
];

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    /// Only ever produced for empty input.
    Empty,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// The outcome of evaluating one password.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub level: StrengthLevel,
    pub entropy_bits: f64,
    /// The raw heuristic score. Computed even when `level` is forced to `Weak`.
    pub score: i32,
}

impl EvaluationResult {
    const EMPTY: EvaluationResult = EvaluationResult {
        level: StrengthLevel::Empty,
        entropy_bits: 0.0,
        score: 0,
    };
}

/// Evaluate a password that may be absent; `None` is treated like `""`.
pub fn evaluate_opt(password: Option<&str>) -> EvaluationResult {
    evaluate(password.unwrap_or_default())
}

/// Evaluate the strength of `password`. Never fails.
pub fn evaluate(password: &str) -> EvaluationResult {
    if password.is_empty() {
        return EvaluationResult::EMPTY;
    }

    let length = password.chars().count();
    let present = password
        .chars()
        .filter_map(CharacterClass::of)
        .collect::<BTreeSet<_>>();
    let types = present.len();

    let score = length_score(length)
        + present.iter().map(|class| presence_bonus(*class)).sum::<i32>()
        + types_bonus(types, length)
        - penalties(password, length);

    let level = if length < MIN_LENGTH || types == 0 {
        StrengthLevel::Weak
    } else if types == 4 && score >= VERY_STRONG_THRESHOLD {
        StrengthLevel::VeryStrong
    } else if types >= 3 && score >= STRONG_THRESHOLD {
        StrengthLevel::Strong
    } else if types >= 2 && score >= MEDIUM_THRESHOLD {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    };

    tracing::trace!(length, types, score, ?level, "evaluated password");
    EvaluationResult {
        level,
        entropy_bits: crate::entropy::estimate_entropy(password),
        score,
    }
}

fn length_score(length: usize) -> i32 {
    match length {
        0..=7 => 0,
        8..=9 => -5,
        10..=12 => 10,
        13..=15 => 15,
        16..=20 => 20,
        _ => 25,
    }
}

fn presence_bonus(class: CharacterClass) -> i32 {
    match class {
        CharacterClass::Lowercase => 5,
        CharacterClass::Uppercase => 8,
        CharacterClass::Digit => 8,
        CharacterClass::Symbol => 12,
    }
}

fn types_bonus(types: usize, length: usize) -> i32 {
    match types {
        1 if length >= MIN_LENGTH => -5,
        2 => 7,
        3 => 12,
        4 => 18,
        _ => 0,
    }
}

/// Total points to subtract for recognizable patterns.
fn penalties(password: &str, length: usize) -> i32 {
    let lower = password.to_lowercase();
    let mut penalty = 0;

    // Only one of the two sequence checks ever applies.
    if ALPHA_SEQUENCES.iter().any(|seq| lower.contains(seq))
        || NUMERIC_SEQUENCES.iter().any(|seq| password.contains(seq))
    {
        penalty += 7;
    }

    if WEAK_WORDS.iter().any(|word| lower.contains(word)) {
        penalty += 12;
    }

    let chars = password.chars().collect::<Vec<_>>();
    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        penalty += 6;
    }

    if length > 5 {
        let mut counts = HashMap::new();
        for c in &chars {
            *counts.entry(*c).or_insert(0usize) += 1;
        }
        let limit = length / 3;
        penalty += counts
            .values()
            .filter(|&&count| count > limit)
            .map(|&count| 3 * (count - limit) as i32)
            .sum::<i32>();
    }

    penalty
}
