//! Display functions for game banners and results
//!
//! Everything goes through a caller-supplied writer so full game transcripts
//! stay capturable in tests.

use crate::core::Word;
use colored::Colorize;
use std::io::{self, Write};

/// Print the number game welcome banner
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn write_number_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "{}",
        "Welcome to the Number Guessing Game".bright_cyan().bold()
    )?;
    writeln!(output, "I'm thinking of a number between 1 and 100.")?;
    writeln!(output, "Can you guess what it is?")
}

/// Print the number game win message with the attempt count
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn write_number_win<W: Write>(output: &mut W, attempts: u32) -> io::Result<()> {
    writeln!(
        output,
        "{}",
        format!("Congratulations! You guessed it in {attempts} attempts.")
            .bright_green()
            .bold()
    )
}

/// Print the word game welcome banner and feedback rules
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn write_word_banner<W: Write>(output: &mut W, max_attempts: usize) -> io::Result<()> {
    writeln!(
        output,
        "{}",
        "Welcome to the Word Guessing Game!".bright_cyan().bold()
    )?;
    writeln!(
        output,
        "I have chosen a 5-letter word. You have {max_attempts} attempts to guess it!"
    )?;
    writeln!(output, "Feedback will be provided after each guess:")?;
    writeln!(
        output,
        " - Correct letters in the right position will be shown in uppercase."
    )?;
    writeln!(
        output,
        " - Correct letters in the wrong position will be shown in lowercase."
    )?;
    writeln!(output, "Let's begin!")
}

/// Print the word game win message naming the secret and attempt index
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn write_word_win<W: Write>(output: &mut W, secret: &Word, attempt: usize) -> io::Result<()> {
    writeln!(
        output,
        "{}",
        format!("Congratulations! You guessed the word '{secret}' in {attempt} attempts!")
            .bright_green()
            .bold()
    )
}

/// Print the word game exhaustion message revealing the secret
///
/// # Errors
/// Returns an error if writing to the output fails.
pub fn write_word_loss<W: Write>(output: &mut W, secret: &Word) -> io::Result<()> {
    writeln!(
        output,
        "{}",
        format!("Sorry, you've run out of attempts. The word was '{secret}'.").yellow()
    )
}
