//! Secret word bank
//!
//! Provides the embedded word bank compiled into the binary and the uniform
//! secret draw for new word games.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Materialize the embedded bank as validated `Word`s, preserving order
///
/// Invalid entries are skipped; the bank tests pin every entry as valid.
#[must_use]
pub fn secret_words() -> Vec<Word> {
    WORDS.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Draw a secret word uniformly from the bank
///
/// # Panics
/// Will not panic - the embedded bank is never empty.
pub fn random_secret<R: Rng + ?Sized>(rng: &mut R) -> Word {
    let words = secret_words();
    words
        .choose(rng)
        .cloned()
        .expect("embedded word bank is not empty")
}
