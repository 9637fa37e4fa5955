//! Utilities for generating passwords.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::charset::CharacterClass;

/// What to generate: a target length, the classes to draw from, and characters to never emit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
    pub excluded: BTreeSet<char>,
}

impl GenerationRequest {
    /// A request for `length` characters drawn from no classes yet.
    pub fn new(length: usize) -> GenerationRequest {
        GenerationRequest {
            length,
            classes: BTreeSet::new(),
            excluded: BTreeSet::new(),
        }
    }

    pub fn with_classes(mut self, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn excluding(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.excluded.extend(chars);
        self
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest::new(16).with_classes(CharacterClass::ALL)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("no character class is enabled")]
    NoClassEnabled,
    #[error("every character of every enabled class is excluded")]
    PoolExhausted,
}

/// Generate a password with the process-wide secure random source.
pub fn generate(request: &GenerationRequest) -> Result<crate::Secret, GenerationError> {
    generate_password(&mut crate::SecureRandom::new(), request)
}

/// Generate a password that honors `request`.
///
/// One character is drawn from each enabled class whose alphabet survives the exclusions, so the
/// result always covers every such class. The rest of the password is drawn uniformly from the
/// union of the filtered alphabets, and the whole thing is shuffled.
///
/// The length of the result is `max(request.length, <number of covered classes>)`: asking for two
/// characters from four classes yields four characters. Capping it at `request.length` would
/// break the coverage guarantee.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_password<R>(
    rng: &mut R,
    request: &GenerationRequest,
) -> Result<crate::Secret, GenerationError>
where
    R: Rng + CryptoRng,
{
    if request.classes.is_empty() {
        return Err(GenerationError::NoClassEnabled);
    }

    let alphabets = request
        .classes
        .iter()
        .map(|class| class.filtered(&request.excluded))
        .filter(|alphabet| !alphabet.is_empty())
        .collect::<Vec<_>>();
    let pool = alphabets.concat();
    if pool.is_empty() {
        return Err(GenerationError::PoolExhausted);
    }

    let length = std::cmp::max(request.length, alphabets.len());
    let mut chars = Vec::with_capacity(length);
    for alphabet in &alphabets {
        chars.push(pick(rng, alphabet));
    }
    for _ in alphabets.len()..length {
        chars.push(pick(rng, &pool));
    }
    chars.shuffle(rng);

    tracing::debug!(
        requested = request.length,
        length,
        required = alphabets.len(),
        pool = pool.len(),
        "generated password"
    );
    Ok(crate::Secret(chars.into_iter().collect()))
}

/// `alphabet` must be non-empty.
fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[char]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}
