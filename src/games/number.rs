//! Number guessing game
//!
//! The player hunts a secret integer in [1,100] with too-low/too-high
//! feedback. The loop is unbounded and only a correct guess ends it.
//! Unparseable input is re-prompted without charging an attempt; guesses
//! outside the range are accepted and compared normally.

use super::prompt_line;
use crate::output::{write_number_banner, write_number_win};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Lowest possible secret
pub const MIN_SECRET: i64 = 1;
/// Highest possible secret
pub const MAX_SECRET: i64 = 100;

/// Result of submitting one parsed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess is below the secret
    TooLow,
    /// Guess is above the secret
    TooHigh,
    /// Guess equals the secret; carries the winning attempt count
    Correct { attempts: u32 },
}

/// A single number guessing game
///
/// Holds the secret for the game's duration and counts valid guesses.
#[derive(Debug)]
pub struct NumberGame {
    secret: i64,
    attempts: u32,
}

impl NumberGame {
    /// Create a game with a known secret
    #[must_use]
    pub const fn new(secret: i64) -> Self {
        Self { secret, attempts: 0 }
    }

    /// Create a game with a secret drawn uniformly from [1,100]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random_range(MIN_SECRET..=MAX_SECRET))
    }

    /// Number of valid guesses submitted so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Submit one parsed guess and compare it to the secret
    ///
    /// Every call counts as an attempt; only parse failures (which never
    /// reach this method) go uncharged.
    pub fn submit(&mut self, guess: i64) -> GuessOutcome {
        self.attempts += 1;

        match guess.cmp(&self.secret) {
            std::cmp::Ordering::Less => GuessOutcome::TooLow,
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
            std::cmp::Ordering::Equal => GuessOutcome::Correct {
                attempts: self.attempts,
            },
        }
    }

    /// Run the interactive game loop to completion
    ///
    /// Returns the winning attempt count.
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails, including
    /// the input stream closing before a correct guess.
    pub fn play<R: BufRead, W: Write>(mut self, input: &mut R, output: &mut W) -> io::Result<u32> {
        write_number_banner(output)?;

        loop {
            let line = prompt_line(input, output, "Enter your guess: ")?;

            let Ok(guess) = line.parse::<i64>() else {
                writeln!(output, "Please enter a valid number.")?;
                continue;
            };

            match self.submit(guess) {
                GuessOutcome::TooLow => writeln!(output, "Too Low! Try again.")?,
                GuessOutcome::TooHigh => writeln!(output, "Too High! Try again.")?,
                GuessOutcome::Correct { attempts } => {
                    write_number_win(output, attempts)?;
                    return Ok(attempts);
                }
            }
        }
    }
}
