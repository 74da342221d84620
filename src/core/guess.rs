//! Player guess representation for the word game
//!
//! A Guess is looser than a [`Word`](super::Word): input is trimmed and
//! lowercased, and only the length is checked. Digits and punctuation are
//! legal guess characters and simply score as absent.

use super::word::WORD_LENGTH;
use std::fmt;

/// A normalized 5-character player guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength(usize),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Guess must be exactly 5 characters, got {len}")
            }
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    /// Parse a raw input line into a Guess
    ///
    /// The input is trimmed and lowercased before the length check.
    ///
    /// # Errors
    /// Returns `GuessError::WrongLength` if the normalized input is not
    /// exactly 5 characters.
    ///
    /// # Examples
    /// ```
    /// use guessing_games::core::Guess;
    ///
    /// let guess = Guess::parse("TABLE").unwrap();
    /// assert_eq!(guess.text(), "table");
    ///
    /// assert!(Guess::parse("pear").is_err());
    /// assert!(Guess::parse("melons").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let text = input.trim().to_lowercase();
        let chars: Vec<char> = text.chars().collect();

        let chars: [char; WORD_LENGTH] = chars
            .try_into()
            .map_err(|v: Vec<char>| GuessError::WrongLength(v.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the normalized guess as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the guess as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
