//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{EvaluateResult, evaluate_words};
pub use simple::{play_lines, run_simple};
