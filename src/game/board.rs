//! The 6×5 guess board

use crate::core::{MAX_GUESSES, Tile, WORD_LENGTH};

/// One guess attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
    is_submitted: bool,
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    /// Letters entered so far, concatenated
    #[must_use]
    pub fn letters(&self) -> String {
        self.tiles.iter().filter_map(|tile| tile.letter).collect()
    }

    pub(crate) fn set_tile(&mut self, col: usize, tile: Tile) {
        self.tiles[col] = tile;
    }

    pub(crate) fn submit(&mut self, tiles: [Tile; WORD_LENGTH]) {
        self.tiles = tiles;
        self.is_submitted = true;
    }
}

/// All rows of one game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    rows: [Row; MAX_GUESSES],
}

impl Board {
    /// An empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// Get a row by index, `None` past the last row
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Submitted rows, in order
    pub fn submitted_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_submitted)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }

    /// Share grid of the submitted rows, one emoji line per guess
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.submitted_rows()
            .map(|row| row.tiles.iter().map(|tile| tile.state.to_emoji()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
