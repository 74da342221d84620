//! Terminal output formatting
//!
//! Banner and end-of-game writers for the interactive games.

pub mod display;

pub use display::{
    write_number_banner, write_number_win, write_word_banner, write_word_loss, write_word_win,
};
