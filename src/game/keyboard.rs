//! On-screen keyboard: layout, input mapping and key highlighting

use super::{Board, Row};
use crate::core::TileState;
use rustc_hash::FxHashMap;

/// A key the player can press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Map a typed character to a key; anything but an ASCII letter is ignored
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then_some(Self::Letter(ch.to_ascii_uppercase()))
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Enter and backspace are drawn wider
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Enter | Self::Backspace)
    }
}

const fn letters<const N: usize>(row: [char; N]) -> [Key; N] {
    let mut keys = [Key::Enter; N];
    let mut i = 0;
    while i < N {
        keys[i] = Key::Letter(row[i]);
        i += 1;
    }
    keys
}

const TOP_ROW: [Key; 10] = letters(['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P']);
const MIDDLE_ROW: [Key; 9] = letters(['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L']);
const BOTTOM_ROW: [Key; 9] = [
    Key::Enter,
    Key::Letter('Z'),
    Key::Letter('X'),
    Key::Letter('C'),
    Key::Letter('V'),
    Key::Letter('B'),
    Key::Letter('N'),
    Key::Letter('M'),
    Key::Backspace,
];

/// QWERTY layout with ENTER and ⌫ on the bottom row
pub const KEYBOARD_ROWS: [&[Key]; 3] = [&TOP_ROW, &MIDDLE_ROW, &BOTTOM_ROW];

/// Best state ever observed for `letter` across the submitted rows
///
/// # Examples
/// ```
/// use wordle_daily::core::TileState;
/// use wordle_daily::game::{Board, key_state};
///
/// assert_eq!(key_state('A', &Board::new()), TileState::Empty);
/// ```
#[must_use]
pub fn key_state(letter: char, board: &Board) -> TileState {
    key_state_in(letter, board.submitted_rows())
}

/// Best state of `letter` across the given rows
#[must_use]
pub fn key_state_in<'r>(letter: char, rows: impl IntoIterator<Item = &'r Row>) -> TileState {
    rows.into_iter()
        .flat_map(|row| row.tiles().iter())
        .filter(|tile| tile.letter == Some(letter))
        .map(|tile| tile.state)
        .fold(TileState::Empty, |best, state| {
            if state.priority() > best.priority() {
                state
            } else {
                best
            }
        })
}

/// Highlight state for every letter seen on the board
#[must_use]
pub fn key_states(board: &Board) -> FxHashMap<char, TileState> {
    let mut states: FxHashMap<char, TileState> = FxHashMap::default();
    for tile in board.submitted_rows().flat_map(|row| row.tiles().iter()) {
        let Some(letter) = tile.letter else { continue };
        let best = states.entry(letter).or_default();
        if tile.state.priority() > best.priority() {
            *best = tile.state;
        }
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, Word, evaluate};

    fn board_with(guesses: &[&str], solution: &str) -> Board {
        let solution = Word::new(solution).unwrap();
        let mut board = Board::new();
        for (i, guess) in guesses.iter().enumerate() {
            board
                .row_mut(i)
                .submit(evaluate(&Word::new(guess).unwrap(), &solution).into());
        }
        board
    }

    #[test]
    fn from_char_accepts_letters_only() {
        assert_eq!(Key::from_char('a'), Some(Key::Letter('A')));
        assert_eq!(Key::from_char('Z'), Some(Key::Letter('Z')));
        assert_eq!(Key::from_char('1'), None);
        assert_eq!(Key::from_char(' '), None);
        assert_eq!(Key::from_char('é'), None);
    }

    #[test]
    fn layout_has_every_letter_once() {
        let mut seen: Vec<char> = KEYBOARD_ROWS
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|key| match key {
                Key::Letter(ch) => Some(*ch),
                _ => None,
            })
            .collect();
        seen.sort_unstable();
        let expected: Vec<char> = ('A'..='Z').collect();
        assert_eq!(seen, expected);
        assert_eq!(KEYBOARD_ROWS[2][0], Key::Enter);
        assert_eq!(KEYBOARD_ROWS[2][8], Key::Backspace);
    }

    #[test]
    fn labels() {
        assert_eq!(Key::Letter('Q').label(), "Q");
        assert_eq!(Key::Enter.label(), "ENTER");
        assert_eq!(Key::Backspace.label(), "⌫");
        assert!(Key::Enter.is_wide());
        assert!(!Key::Letter('Q').is_wide());
    }

    #[test]
    fn correct_beats_earlier_absent_and_present() {
        // SPEED vs ERASE: E present; then ERASE itself: E correct
        let board = board_with(&["speed", "erase"], "erase");
        assert_eq!(key_state('E', &board), TileState::Correct);
        assert_eq!(key_state('P', &board), TileState::Absent);
        assert_eq!(key_state('Z', &board), TileState::Empty);
    }

    #[test]
    fn present_not_downgraded_by_later_absent() {
        // EERIE's trailing E is absent, which must not downgrade earlier results
        let board = board_with(&["erase", "eerie"], "elder");
        assert_eq!(key_state('E', &board), TileState::Correct);
        assert_eq!(key_state('R', &board), TileState::Present);
        assert_eq!(key_state('I', &board), TileState::Absent);
    }

    #[test]
    fn unsubmitted_rows_are_ignored() {
        let mut board = Board::new();
        board.row_mut(0).set_tile(0, Tile::filled('A'));
        assert_eq!(key_state('A', &board), TileState::Empty);
        assert!(key_states(&board).is_empty());
    }

    #[test]
    fn key_states_agrees_with_key_state() {
        let board = board_with(&["speed", "robot", "crane"], "erase");
        let states = key_states(&board);
        for (letter, state) in &states {
            assert_eq!(*state, key_state(*letter, &board));
        }
        assert_eq!(states.get(&'S'), Some(&TileState::Present));
    }
}
