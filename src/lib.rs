//! A password engine: generate random passwords from character-class rules, and score arbitrary
//! passwords into a strength level plus an entropy estimate.
//!
//! The generator and the evaluator are independent. Both are pure apart from the generator's
//! draws from a cryptographically secure random source, which callers can supply themselves
//! (anything `Rng + CryptoRng`) or take from the process-wide [`SecureRandom`].
//!
//! ```
//! use passgen::{evaluate, generate, CharacterClass, GenerationRequest};
//!
//! let request = GenerationRequest::new(20)
//!     .with_classes(CharacterClass::ALL)
//!     .excluding("O0Il1".chars());
//! let password = generate(&request).unwrap();
//! let result = evaluate(password.as_str());
//! println!("{:?}, {:.1} bits", result.level, result.entropy_bits);
//! ```

use serde::{Deserialize, Serialize};

pub mod charset;
pub mod entropy;
pub mod password_generation;
mod random;
pub mod strength;

pub use charset::CharacterClass;
pub use entropy::estimate_entropy;
pub use password_generation::{generate, generate_password, GenerationError, GenerationRequest};
pub use random::SecureRandom;
pub use strength::{evaluate, evaluate_opt, EvaluationResult, StrengthLevel};

/// A generated password. Its `Debug` output never includes the password itself.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
