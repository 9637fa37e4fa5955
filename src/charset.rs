//! The fixed character classes passwords are built from and scored against.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static DIGITS: &str = "0123456789";
static SYMBOLS: &str = "!@#$%^&*()_-+=<>?/{}[]|";

/// One of the four recognized kinds of character.
///
/// The declaration order is the order classes are visited while generating, which keeps a given
/// sequence of random draws reproducible.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed, ordered alphabet for this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Number of characters in the (unfiltered) alphabet.
    pub fn size(self) -> usize {
        self.alphabet().len()
    }

    /// Classify a single character. Only ASCII letters and digits, and the members of the fixed
    /// symbol alphabet, are recognized; everything else is `None`.
    pub fn of(c: char) -> Option<CharacterClass> {
        if c.is_ascii_lowercase() {
            Some(CharacterClass::Lowercase)
        } else if c.is_ascii_uppercase() {
            Some(CharacterClass::Uppercase)
        } else if c.is_ascii_digit() {
            Some(CharacterClass::Digit)
        } else if SYMBOLS.contains(c) {
            Some(CharacterClass::Symbol)
        } else {
            None
        }
    }

    /// The alphabet with every excluded character removed. May be empty.
    pub fn filtered(self, excluded: &BTreeSet<char>) -> Vec<char> {
        self.alphabet()
            .chars()
            .filter(|c| !excluded.contains(c))
            .collect()
    }

    fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "upper",
            CharacterClass::Lowercase => "lower",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown character class {0:?} (expected one of: upper, lower, digit, symbol)")]
pub struct UnknownCharacterClass(String);

impl FromStr for CharacterClass {
    type Err = UnknownCharacterClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            _ => Err(UnknownCharacterClass(s.to_owned())),
        }
    }
}

impl Serialize for CharacterClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CharacterClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharacterClass::Uppercase.size(), 26);
        assert_eq!(CharacterClass::Lowercase.size(), 26);
        assert_eq!(CharacterClass::Digit.size(), 10);
        assert_eq!(CharacterClass::Symbol.size(), 23);
    }

    #[test]
    fn classification_is_ascii_only() {
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::of('|'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of('~'), None);
        assert_eq!(CharacterClass::of(' '), None);
        assert_eq!(CharacterClass::of('é'), None);
        assert_eq!(CharacterClass::of('٣'), None);
    }

    #[test]
    fn every_alphabet_char_classifies_as_its_class() {
        for class in CharacterClass::ALL {
            for c in class.alphabet().chars() {
                assert_eq!(CharacterClass::of(c), Some(class), "{c:?}");
            }
        }
    }

    #[test]
    fn filtering_removes_excluded() {
        let excluded: BTreeSet<char> = "0Ol1".chars().collect();
        let digits = CharacterClass::Digit.filtered(&excluded);
        assert_eq!(digits.iter().collect::<String>(), "23456789");
        let all_digits: BTreeSet<char> = DIGITS.chars().collect();
        assert!(CharacterClass::Digit.filtered(&all_digits).is_empty());
    }

    #[test]
    fn parse_names() {
        assert_eq!("upper".parse::<CharacterClass>().unwrap(), CharacterClass::Uppercase);
        assert_eq!(" Symbols ".parse::<CharacterClass>().unwrap(), CharacterClass::Symbol);
        assert_eq!("numbers".parse::<CharacterClass>().unwrap(), CharacterClass::Digit);
        assert!("emoji".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn serde_uses_short_names() {
        let json = serde_json::to_string(&CharacterClass::ALL).unwrap();
        assert_eq!(json, r#"["upper","lower","digit","symbol"]"#);
        let back: Vec<CharacterClass> = serde_json::from_str(r#"["Uppercase","symbols"]"#).unwrap();
        assert_eq!(back, [CharacterClass::Uppercase, CharacterClass::Symbol]);
    }
}
