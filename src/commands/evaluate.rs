//! One-off guess evaluation
//!
//! Evaluates a guess against a given solution without playing a game.

use crate::core::{Evaluation, Word, evaluate};
use crate::wordlists::WordList;

/// Result of evaluating one guess
pub struct EvaluateResult {
    pub guess: Word,
    pub solution: Word,
    pub evaluation: Evaluation,
    /// Whether the guess would be accepted in a game
    pub accepted: bool,
}

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn evaluate_words(
    guess: &str,
    solution: &str,
    accepted: &WordList,
) -> Result<EvaluateResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let solution = Word::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;

    Ok(EvaluateResult {
        evaluation: evaluate(&guess, &solution),
        accepted: accepted.contains(&guess),
        guess,
        solution,
    })
}
