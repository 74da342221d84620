//! Number guessing game executable
//!
//! Fully interactive over stdin/stdout; no flags beyond --help/--version.

use anyhow::{Context, Result};
use clap::Parser;
use guessing_games::games::NumberGame;
use std::io;

#[derive(Parser)]
#[command(
    name = "number-guess",
    about = "Guess the secret number between 1 and 100",
    version
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let game = NumberGame::random(&mut rand::rng());

    let stdin = io::stdin();
    let stdout = io::stdout();
    game.play(&mut stdin.lock(), &mut stdout.lock())
        .context("game aborted")?;

    Ok(())
}
