//! Daily Word
//!
//! A daily five-letter word-guessing game: a guess evaluator, a game session state
//! machine, a terminal client and a small service that picks the word of the day.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{TileState, Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let solution = Word::new("slate").unwrap();
//!
//! let evaluation = evaluate(&guess, &solution);
//! assert_eq!(evaluation.states()[2], TileState::Correct);
//! println!("{}", evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game session, board and keyboard
pub mod game;

// Word lists
pub mod wordlists;

// Daily word service
pub mod server;

// Word service client
pub mod client;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
