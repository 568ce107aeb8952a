//! Guess evaluation
//!
//! Compares a guess with the solution and classifies every letter as correct,
//! present or absent, with the usual duplicate-letter rules.

use super::{Tile, TileState, WORD_LENGTH, Word};

/// Per-letter result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation([Tile; WORD_LENGTH]);

/// Evaluate `guess` against `solution`
///
/// # Algorithm
/// 1. Every position starts absent
/// 2. First pass: exact matches are correct, and the letter is consumed in both words
/// 3. Second pass: left to right over the unconsumed guess letters, a letter still
///    present in the unconsumed solution letters is marked present and the leftmost
///    such solution letter is consumed
///
/// Excess duplicates in the guess therefore stay absent.
///
/// # Examples
/// ```
/// use wordle_daily::core::{TileState, Word, evaluate};
///
/// let guess = Word::new("speed").unwrap();
/// let solution = Word::new("erase").unwrap();
/// let states = evaluate(&guess, &solution).states();
///
/// assert_eq!(
///     states,
///     [
///         TileState::Present,
///         TileState::Absent,
///         TileState::Present,
///         TileState::Present,
///         TileState::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, solution: &Word) -> Evaluation {
    let mut states = [TileState::Absent; WORD_LENGTH];
    let mut guess_left = guess.letters().map(Some);
    let mut solution_left = solution.letters().map(Some);

    // First pass: exact position matches
    for i in 0..WORD_LENGTH {
        if guess_left[i] == solution_left[i] {
            states[i] = TileState::Correct;
            guess_left[i] = None;
            solution_left[i] = None;
        }
    }

    // Second pass: misplaced letters, consuming the leftmost unused match
    for (i, letter) in guess_left.iter().enumerate() {
        let Some(letter) = letter else { continue };
        if let Some(slot) = solution_left.iter_mut().find(|s| **s == Some(*letter)) {
            states[i] = TileState::Present;
            *slot = None;
        }
    }

    let mut tiles = [Tile::EMPTY; WORD_LENGTH];
    for (i, tile) in tiles.iter_mut().enumerate() {
        *tile = Tile::evaluated(guess.letter_at(i), states[i]);
    }

    Evaluation(tiles)
}

impl Evaluation {
    /// The evaluated tiles, in guess order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// Just the classifications
    #[must_use]
    pub fn states(&self) -> [TileState; WORD_LENGTH] {
        self.0.map(|tile| tile.state)
    }

    /// All five letters correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|tile| tile.state == TileState::Correct)
    }

    /// Number of tiles with the given state
    #[must_use]
    pub fn count(&self, state: TileState) -> usize {
        self.0.iter().filter(|tile| tile.state == state).count()
    }

    /// Share-grid line such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tile| tile.state.to_emoji()).collect()
    }
}

impl From<Evaluation> for [Tile; WORD_LENGTH] {
    fn from(evaluation: Evaluation) -> Self {
        evaluation.0
    }
}
