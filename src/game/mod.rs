//! Game session: board, state machine and the pieces the UI reads
//!
//! Transitions are plain methods on an explicit session object. UI layers render
//! from [`GameState`] and may subscribe to [`SessionEvent`]s.

mod board;
mod keyboard;
mod loading;
mod notice;
mod session;

pub use board::{Board, Row};
pub use keyboard::{KEYBOARD_ROWS, Key, key_state, key_state_in, key_states};
pub use loading::Loadable;
pub use notice::{NOTICE_TTL, Notice};
pub use session::{GameState, GameStatus, INVALID_WORD_NOTICE, Session, SessionEvent};
