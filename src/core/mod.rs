//! Core domain types for the guessing games
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear observable properties.

mod feedback;
mod guess;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use guess::{Guess, GuessError};
pub use word::{WORD_LENGTH, Word, WordError};
