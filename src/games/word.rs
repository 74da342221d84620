//! Word guessing game
//!
//! The player has ten prompts to find a secret 5-letter word, with
//! per-letter feedback after every scored guess. Wrong-length input is
//! re-prompted but still consumes its prompt slot: exactly ten reads per
//! game, no loop extension.

use super::prompt_line;
use crate::core::{Feedback, Guess, Word};
use crate::output::{write_word_banner, write_word_loss, write_word_win};
use crate::wordbank;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Maximum number of prompts per game
pub const MAX_ATTEMPTS: usize = 10;

/// Terminal state of a finished word game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    /// Secret guessed exactly, on the given 1-based attempt
    Won { attempt: usize },
    /// All prompts consumed without an exact match
    Exhausted,
}

/// A single word guessing game
#[derive(Debug)]
pub struct WordGame {
    secret: Word,
}

impl WordGame {
    /// Create a game with a known secret word
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    /// Create a game with a secret drawn uniformly from the word bank
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(wordbank::random_secret(rng))
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Run the interactive game loop to completion
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails, including
    /// the input stream closing before the game finishes.
    pub fn play<R: BufRead, W: Write>(
        self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<WordOutcome> {
        write_word_banner(output, MAX_ATTEMPTS)?;

        let mut outcome = WordOutcome::Exhausted;

        for attempt in 1..=MAX_ATTEMPTS {
            let prompt = format!("Attempt {attempt}/{MAX_ATTEMPTS}: ");
            let line = prompt_line(input, output, &prompt)?;

            // Wrong-length input consumes the slot without being scored
            let Ok(guess) = Guess::parse(&line) else {
                writeln!(output, "Please enter a 5-letter word.")?;
                continue;
            };

            let feedback = Feedback::score(&guess, &self.secret);
            writeln!(output, "Feedback: {feedback}")?;

            if feedback.is_exact_match() {
                write_word_win(output, &self.secret, attempt)?;
                outcome = WordOutcome::Won { attempt };
                break;
            }
        }

        if outcome == WordOutcome::Exhausted {
            write_word_loss(output, &self.secret)?;
        }

        Ok(outcome)
    }
}
