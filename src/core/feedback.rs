//! Per-letter feedback for a word-game guess
//!
//! Feedback scores each guess position against the secret word:
//! - Exact: the letter sits in the same position in the secret
//! - Present: the letter occurs anywhere in the secret
//! - Absent: the letter does not occur in the secret
//!
//! Presence is a plain membership test against the whole secret, with no
//! multiplicity accounting: a letter repeated in the guess can match the
//! same secret letter more than once. Rendered feedback shows exact hits
//! in uppercase, present letters in lowercase, and absent letters as `_`.

use super::guess::Guess;
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Score for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    /// Right letter, right position
    Exact,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter does not occur in the secret
    Absent,
}

/// Feedback for one guess against one secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    chars: [char; WORD_LENGTH],
    scores: [LetterScore; WORD_LENGTH],
}

impl Feedback {
    /// Score a guess against the secret word
    ///
    /// # Examples
    /// ```
    /// use guessing_games::core::{Feedback, Guess, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Guess::parse("table").unwrap();
    ///
    /// // t(absent) a(present) b(absent) l(exact) e(exact)
    /// let feedback = Feedback::score(&guess, &secret);
    /// assert_eq!(feedback.to_string(), "_a_LE");
    /// ```
    #[must_use]
    pub fn score(guess: &Guess, secret: &Word) -> Self {
        let chars = *guess.chars();
        let mut scores = [LetterScore::Absent; WORD_LENGTH];

        for (i, &c) in chars.iter().enumerate() {
            // Secret letters are ASCII, so a guess character that doesn't
            // fit in a byte can only be absent
            let Ok(letter) = u8::try_from(c) else {
                continue;
            };

            if secret.char_at(i) == letter {
                scores[i] = LetterScore::Exact;
            } else if secret.has_letter(letter) {
                scores[i] = LetterScore::Present;
            }
        }

        Self { chars, scores }
    }

    /// Get the per-position scores
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.scores
    }

    /// Check if every position is an exact match (a winning guess)
    #[must_use]
    pub fn is_exact_match(&self) -> bool {
        self.scores.iter().all(|&s| s == LetterScore::Exact)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&c, &score) in self.chars.iter().zip(&self.scores) {
            let symbol = match score {
                LetterScore::Exact => c.to_ascii_uppercase(),
                LetterScore::Present => c.to_ascii_lowercase(),
                LetterScore::Absent => '_',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        let secret = Word::new(secret).unwrap();
        let guess = Guess::parse(guess).unwrap();
        Feedback::score(&guess, &secret)
    }

    #[test]
    fn feedback_mixed_scores() {
        // t(absent) a(present, wrong position) b(absent) l(exact) e(exact)
        let fb = feedback("table", "apple");
        assert_eq!(fb.to_string(), "_a_LE");
        assert_eq!(
            fb.scores(),
            &[
                LetterScore::Absent,
                LetterScore::Present,
                LetterScore::Absent,
                LetterScore::Exact,
                LetterScore::Exact,
            ]
        );
        assert!(!fb.is_exact_match());
    }

    #[test]
    fn feedback_all_exact() {
        let fb = feedback("apple", "apple");
        assert_eq!(fb.to_string(), "APPLE");
        assert!(fb.is_exact_match());
    }

    #[test]
    fn feedback_all_absent() {
        let fb = feedback("dumbo", "flick");
        assert_eq!(fb.to_string(), "_____");
        assert!(!fb.is_exact_match());
    }

    #[test]
    fn feedback_uppercase_input_scores_like_lowercase() {
        let fb = feedback("TABLE", "apple");
        assert_eq!(fb.to_string(), "_a_LE");
    }

    #[test]
    fn feedback_repeated_guess_letter_no_consumption() {
        // Secret has a single e, yet every guessed e scores: membership is
        // tested against the whole word, never consumed
        let fb = feedback("geese", "flame");
        assert_eq!(fb.to_string(), "_ee_E");
    }

    #[test]
    fn feedback_exact_and_present_share_a_letter() {
        // chess: the s at position 3 is exact, and the other guessed s's
        // still score present off the same secret letters
        let fb = feedback("sassy", "chess");
        assert_eq!(fb.to_string(), "s_sS_");
    }

    #[test]
    fn feedback_non_letter_characters_are_absent() {
        let fb = feedback("ap1l!", "apple");
        assert_eq!(fb.to_string(), "AP_L_");
    }

    #[test]
    fn feedback_non_ascii_characters_are_absent() {
        // n(absent) a(present) ï(absent) v(absent) e(exact)
        let fb = feedback("naïve", "apple");
        assert_eq!(fb.to_string(), "_a__E");
    }

    #[test]
    fn feedback_exact_match_iff_words_equal() {
        for secret in ["apple", "chess", "print"] {
            for guess in ["apple", "chess", "print", "table"] {
                let fb = feedback(guess, secret);
                assert_eq!(fb.is_exact_match(), guess == secret);
            }
        }
    }
}
