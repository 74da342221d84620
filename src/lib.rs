//! Terminal guessing games
//!
//! Two standalone interactive games: a number-guessing loop over 1-100 and a
//! five-letter word-guessing game with per-letter positional feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use guessing_games::core::{Feedback, Guess, Word};
//!
//! let secret = Word::new("apple").unwrap();
//! let guess = Guess::parse("table").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!(feedback.to_string(), "_a_LE");
//! ```

// Core domain types
pub mod core;

// Interactive game loops
pub mod games;

// Embedded secret word bank
pub mod wordbank;

// Terminal output formatting
pub mod output;
