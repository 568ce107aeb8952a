//! Board tiles and their classification

/// Classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    /// No letter entered
    #[default]
    Empty,
    /// Letter entered, row not yet submitted
    Filled,
    /// Letter not in the solution at the remaining count
    Absent,
    /// Letter in the solution, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl TileState {
    /// Highlight priority used by the keyboard
    ///
    /// `Correct(3) > Present(2) > Absent(1) > Empty/Filled(0)`
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Filled => 0,
        }
    }

    /// Whether the state is a result of evaluation
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(self, Self::Absent | Self::Present | Self::Correct)
    }

    /// Share-grid square for this state
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Empty | Self::Filled => '⬜',
        }
    }
}

/// A single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
}

impl Tile {
    /// An empty tile
    pub const EMPTY: Self = Self {
        letter: None,
        state: TileState::Empty,
    };

    /// A tile holding an unevaluated letter
    #[must_use]
    pub const fn filled(letter: char) -> Self {
        Self {
            letter: Some(letter),
            state: TileState::Filled,
        }
    }

    /// A tile with an evaluated letter
    #[must_use]
    pub const fn evaluated(letter: char, state: TileState) -> Self {
        Self {
            letter: Some(letter),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(TileState::Correct.priority() > TileState::Present.priority());
        assert!(TileState::Present.priority() > TileState::Absent.priority());
        assert!(TileState::Absent.priority() > TileState::Filled.priority());
        assert_eq!(TileState::Filled.priority(), TileState::Empty.priority());
    }

    #[test]
    fn evaluated_states() {
        assert!(TileState::Correct.is_evaluated());
        assert!(TileState::Absent.is_evaluated());
        assert!(!TileState::Filled.is_evaluated());
        assert!(!TileState::Empty.is_evaluated());
    }

    #[test]
    fn tile_constructors() {
        assert_eq!(Tile::default(), Tile::EMPTY);
        assert_eq!(Tile::filled('A').state, TileState::Filled);
        assert_eq!(
            Tile::evaluated('B', TileState::Present),
            Tile {
                letter: Some('B'),
                state: TileState::Present
            }
        );
    }
}
