//! Word guessing game executable
//!
//! Fully interactive over stdin/stdout; no flags beyond --help/--version.

use anyhow::{Context, Result};
use clap::Parser;
use guessing_games::games::WordGame;
use std::io;

#[derive(Parser)]
#[command(
    name = "word-guess",
    about = "Guess the secret 5-letter word in ten attempts",
    version
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let game = WordGame::random(&mut rand::rng());

    let stdin = io::stdin();
    let stdout = io::stdout();
    game.play(&mut stdin.lock(), &mut stdout.lock())
        .context("game aborted")?;

    Ok(())
}
