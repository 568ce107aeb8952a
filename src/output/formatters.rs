//! Formatting utilities for terminal output

use crate::core::{Tile, TileState};
use crate::game::{Board, KEYBOARD_ROWS, Key, key_states};
use colored::{ColoredString, Colorize};

/// A tile as a coloured, padded letter: green, yellow or grey background
#[must_use]
pub fn colored_tile(tile: &Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter.unwrap_or(' '));
    match tile.state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black().bold(),
        TileState::Filled => text.bold(),
        TileState::Empty => text.normal(),
    }
}

/// A whole row of tiles, separated by single spaces
#[must_use]
pub fn colored_row(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| colored_tile(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The letter keys of the keyboard, one line per row, coloured by best known state
#[must_use]
pub fn colored_keyboard(board: &Board) -> Vec<String> {
    let states = key_states(board);
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|key| match *key {
                    Key::Letter(letter) => {
                        let state = states.get(&letter).copied().unwrap_or_default();
                        Some(colored_tile(&Tile::evaluated(letter, state)).to_string())
                    }
                    Key::Enter | Key::Backspace => None,
                })
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    #[test]
    fn colored_row_keeps_letters() {
        colored::control::set_override(false);
        let evaluation = evaluate(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(colored_row(evaluation.tiles()), " C   R   A   N   E ");
    }

    #[test]
    fn keyboard_has_three_rows_of_letters() {
        colored::control::set_override(false);
        let lines = colored_keyboard(&Board::new());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], " Q  W  E  R  T  Y  U  I  O  P ");
        assert_eq!(lines[2], " Z  X  C  V  B  N  M ");
    }

    #[test]
    fn empty_tile_is_blank() {
        colored::control::set_override(false);
        assert_eq!(colored_tile(&Tile::EMPTY).to_string(), "   ");
    }
}
