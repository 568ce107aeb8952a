//! Core domain types for the game
//!
//! Words, tiles and the guess evaluator. Everything here is pure and has no I/O.

mod evaluation;
mod tile;
mod word;

pub use evaluation::{Evaluation, evaluate};
pub use tile::{Tile, TileState};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game
pub const MAX_GUESSES: usize = 6;
