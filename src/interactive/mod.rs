//! Interactive TUI game

pub mod app;
pub mod rendering;

pub use app::{App, REVEAL_STAGGER, run_tui};
