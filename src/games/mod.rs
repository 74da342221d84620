//! Interactive game loops
//!
//! Both games are synchronous read-eval-print loops, generic over their
//! input and output streams so full transcripts are testable.

pub mod number;
pub mod word;

pub use number::{GuessOutcome, NumberGame};
pub use word::{MAX_ATTEMPTS, WordGame, WordOutcome};

use std::io::{self, BufRead, Write};

/// Prompt for and read one line of player input, trimmed
///
/// End-of-input is unrecoverable: a closed stream surfaces as
/// `UnexpectedEof` and aborts the game.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_line_trims_input() {
        let mut input = Cursor::new("  42  \n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Enter your guess: ").unwrap();

        assert_eq!(line, "42");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter your guess: ");
    }

    #[test]
    fn prompt_line_reads_one_line_per_call() {
        let mut input = Cursor::new("first\nsecond\n");
        let mut output = Vec::new();

        assert_eq!(prompt_line(&mut input, &mut output, "> ").unwrap(), "first");
        assert_eq!(
            prompt_line(&mut input, &mut output, "> ").unwrap(),
            "second"
        );
    }

    #[test]
    fn prompt_line_eof_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_line(&mut input, &mut output, "> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
