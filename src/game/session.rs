//! Game session state machine
//!
//! [`GameState`] holds the board and cursor and implements the transitions.
//! [`Session`] wraps it with the accepted-word list, the transient validation
//! notice and the observers that UI layers subscribe with.

use super::keyboard::Key;
use super::notice::Notice;
use super::Board;
use crate::core::{Evaluation, MAX_GUESSES, Tile, WORD_LENGTH, Word, evaluate};
use crate::wordlists::WordList;
use std::fmt;
use std::time::Instant;

/// Text of the notice raised for a guess that is not in the word list
pub const INVALID_WORD_NOTICE: &str = "Not a valid word!";

/// Whether the game is in progress, won, or lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A change that happened to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LetterAdded { row: usize, col: usize, letter: char },
    LetterRemoved { row: usize, col: usize },
    /// Full row whose word is not accepted; nothing on the board changed
    GuessRejected { word: String },
    GuessEvaluated {
        row: usize,
        evaluation: Evaluation,
        status: GameStatus,
    },
    NoticeDismissed,
}

/// Everything the game needs to know at any moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_row: usize,
    current_col: usize,
    status: GameStatus,
    solution: Word,
}

impl GameState {
    /// A fresh board for `solution`
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            board: Board::new(),
            current_row: 0,
            current_col: 0,
            status: GameStatus::Playing,
            solution,
        }
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Place a letter on the next free tile of the active row
    ///
    /// Ignored when the game is over, the row is full, or `letter` is not an ASCII letter.
    pub fn add_letter(&mut self, letter: char) -> Option<SessionEvent> {
        if self.status.is_over() || self.current_col >= WORD_LENGTH {
            return None;
        }
        if !letter.is_ascii_alphabetic() {
            return None;
        }

        let letter = letter.to_ascii_uppercase();
        let (row, col) = (self.current_row, self.current_col);
        self.board.row_mut(row).set_tile(col, Tile::filled(letter));
        self.current_col += 1;

        Some(SessionEvent::LetterAdded { row, col, letter })
    }

    /// Clear the last letter of the active row
    ///
    /// The tile goes back to [`Tile::EMPTY`], letter and state alike.
    pub fn remove_letter(&mut self) -> Option<SessionEvent> {
        if self.status.is_over() || self.current_col == 0 {
            return None;
        }

        self.current_col -= 1;
        let (row, col) = (self.current_row, self.current_col);
        self.board.row_mut(row).set_tile(col, Tile::EMPTY);

        Some(SessionEvent::LetterRemoved { row, col })
    }

    /// Submit the active row
    ///
    /// Ignored unless the row is full. A word missing from `accepted` yields
    /// [`SessionEvent::GuessRejected`] and leaves the state untouched.
    pub fn submit_guess(&mut self, accepted: &WordList) -> Option<SessionEvent> {
        if self.status.is_over() || self.current_col < WORD_LENGTH {
            return None;
        }

        let row = self.current_row;
        let letters = self.board.rows()[row].letters();
        let guess = match Word::new(&letters) {
            Ok(guess) if accepted.contains(&guess) => guess,
            _ => return Some(SessionEvent::GuessRejected { word: letters }),
        };

        let evaluation = evaluate(&guess, &self.solution);
        self.board.row_mut(row).submit(evaluation.into());
        self.current_row += 1;
        self.current_col = 0;

        self.status = if evaluation.is_solved() {
            GameStatus::Won
        } else if row == MAX_GUESSES - 1 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        Some(SessionEvent::GuessEvaluated {
            row,
            evaluation,
            status: self.status,
        })
    }
}

type Observer<'a> = Box<dyn FnMut(&SessionEvent) + 'a>;

/// One game from solution fetch to win or loss
pub struct Session<'a> {
    state: GameState,
    accepted: &'a WordList,
    notice: Option<Notice>,
    observers: Vec<Observer<'a>>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(solution: Word, accepted: &'a WordList) -> Self {
        tracing::debug!(accepted = accepted.len(), "session created");
        Self {
            state: GameState::new(solution),
            accepted,
            notice: None,
            observers: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Register an observer that sees every event the session emits
    pub fn subscribe(&mut self, observer: impl FnMut(&SessionEvent) + 'a) {
        self.observers.push(Box::new(observer));
    }

    pub fn add_letter(&mut self, letter: char) -> Option<SessionEvent> {
        let event = self.state.add_letter(letter);
        self.emit(event)
    }

    pub fn remove_letter(&mut self) -> Option<SessionEvent> {
        let event = self.state.remove_letter();
        self.emit(event)
    }

    /// Submit the active row; a rejected word raises the validation notice
    pub fn submit_guess(&mut self, now: Instant) -> Option<SessionEvent> {
        let event = self.state.submit_guess(self.accepted);
        match &event {
            Some(SessionEvent::GuessRejected { word }) => {
                tracing::debug!(%word, "guess rejected");
                self.notice = Some(Notice::new(INVALID_WORD_NOTICE, now));
            }
            Some(SessionEvent::GuessEvaluated { row, status, .. }) => {
                tracing::debug!(row, ?status, "guess evaluated");
            }
            _ => {}
        }
        self.emit(event)
    }

    /// Dispatch a key press to the matching transition
    pub fn press(&mut self, key: Key, now: Instant) -> Option<SessionEvent> {
        match key {
            Key::Letter(letter) => self.add_letter(letter),
            Key::Backspace => self.remove_letter(),
            Key::Enter => self.submit_guess(now),
        }
    }

    /// The validation notice, if one is showing at `now`
    #[must_use]
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|notice| !notice.is_expired(now))
    }

    /// Drop the notice once it has expired
    pub fn tick(&mut self, now: Instant) -> Option<SessionEvent> {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now));
        if !expired {
            return None;
        }
        self.notice = None;
        self.emit(Some(SessionEvent::NoticeDismissed))
    }

    fn emit(&mut self, event: Option<SessionEvent>) -> Option<SessionEvent> {
        if let Some(event) = &event {
            for observer in &mut self.observers {
                observer(event);
            }
        }
        event
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("notice", &self.notice)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState;
    use crate::game::NOTICE_TTL;
    use std::cell::RefCell;
    use std::time::Duration;

    fn accepted() -> WordList {
        WordList::from_slice(&[
            "crane", "apple", "flint", "globe", "haunt", "brave", "chess", "dwarf", "elder",
            "frost",
        ])
    }

    fn type_word(state: &mut GameState, word: &str) {
        for ch in word.chars() {
            state.add_letter(ch);
        }
    }

    #[test]
    fn new_state_is_playing_on_empty_board() {
        let state = GameState::new(Word::new("crane").unwrap());
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!((state.current_row(), state.current_col()), (0, 0));
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.solution().text(), "CRANE");
    }

    #[test]
    fn add_letter_fills_tile_and_advances() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        let event = state.add_letter('c');

        assert_eq!(
            event,
            Some(SessionEvent::LetterAdded {
                row: 0,
                col: 0,
                letter: 'C'
            })
        );
        assert_eq!(state.current_col(), 1);
        assert_eq!(state.board().rows()[0].tiles()[0], Tile::filled('C'));
    }

    #[test]
    fn add_letter_on_full_row_is_noop() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        type_word(&mut state, "apple");
        let before = state.clone();

        assert_eq!(state.add_letter('X'), None);
        assert_eq!(state, before);
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        let before = state.clone();
        assert_eq!(state.add_letter('7'), None);
        assert_eq!(state, before);
    }

    #[test]
    fn remove_letter_at_start_is_noop() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        let before = state.clone();

        assert_eq!(state.remove_letter(), None);
        assert_eq!(state, before);
    }

    #[test]
    fn remove_letter_clears_tile() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        type_word(&mut state, "ap");

        assert_eq!(
            state.remove_letter(),
            Some(SessionEvent::LetterRemoved { row: 0, col: 1 })
        );
        assert_eq!(state.current_col(), 1);
        assert_eq!(state.board().rows()[0].tiles()[1], Tile::EMPTY);
        assert_eq!(state.board().rows()[0].letters(), "A");
    }

    #[test]
    fn add_then_remove_restores_board() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        let before = state.clone();
        state.add_letter('Q');
        state.remove_letter();
        assert_eq!(state, before);
    }

    #[test]
    fn submit_incomplete_row_is_noop() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        type_word(&mut state, "cran");
        let before = state.clone();

        assert_eq!(state.submit_guess(&accepted()), None);
        assert_eq!(state, before);
    }

    #[test]
    fn submit_unknown_word_is_rejected_without_changes() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        type_word(&mut state, "zzzzz");
        let before = state.clone();

        assert_eq!(
            state.submit_guess(&accepted()),
            Some(SessionEvent::GuessRejected {
                word: "ZZZZZ".to_string()
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn submit_wrong_word_advances_row() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        type_word(&mut state, "brave");

        let Some(SessionEvent::GuessEvaluated {
            row,
            evaluation,
            status,
        }) = state.submit_guess(&accepted())
        else {
            panic!("expected evaluation");
        };

        assert_eq!(row, 0);
        assert_eq!(status, GameStatus::Playing);
        assert_eq!(
            evaluation.states(),
            [
                TileState::Absent,
                TileState::Correct,
                TileState::Correct,
                TileState::Absent,
                TileState::Correct
            ]
        );
        assert_eq!((state.current_row(), state.current_col()), (1, 0));
        assert!(state.board().rows()[0].is_submitted());
        assert_eq!(state.board().rows()[0].tiles(), evaluation.tiles());
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let mut state = GameState::new(Word::new("crane").unwrap());
        type_word(&mut state, "frost");
        state.submit_guess(&accepted());
        type_word(&mut state, "crane");
        state.submit_guess(&accepted());

        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.current_row(), 2);
    }

    #[test]
    fn six_misses_lose() {
        let list = accepted();
        let mut state = GameState::new(Word::new("crane").unwrap());
        for word in ["apple", "flint", "globe", "haunt", "brave"] {
            type_word(&mut state, word);
            state.submit_guess(&list);
            assert_eq!(state.status(), GameStatus::Playing);
        }
        type_word(&mut state, "chess");
        state.submit_guess(&list);

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.current_row(), MAX_GUESSES);
        assert_eq!(state.board().submitted_rows().count(), MAX_GUESSES);
    }

    #[test]
    fn win_on_last_row_is_won() {
        let list = accepted();
        let mut state = GameState::new(Word::new("crane").unwrap());
        for word in ["apple", "flint", "globe", "haunt", "brave", "crane"] {
            type_word(&mut state, word);
            state.submit_guess(&list);
        }
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn finished_game_ignores_everything() {
        let list = accepted();
        let mut state = GameState::new(Word::new("crane").unwrap());
        type_word(&mut state, "crane");
        state.submit_guess(&list);
        let before = state.clone();

        assert_eq!(state.add_letter('A'), None);
        assert_eq!(state.remove_letter(), None);
        assert_eq!(state.submit_guess(&list), None);
        assert_eq!(state, before);
    }

    #[test]
    fn session_rejection_raises_notice_that_expires() {
        let list = accepted();
        let mut session = Session::new(Word::new("crane").unwrap(), &list);
        for ch in "xxxxx".chars() {
            session.add_letter(ch);
        }
        let before = session.state().clone();
        let start = Instant::now();

        session.submit_guess(start);

        assert_eq!(session.state(), &before);
        assert_eq!(
            session.notice(start).map(Notice::text),
            Some(INVALID_WORD_NOTICE)
        );
        assert!(session.notice(start + Duration::from_millis(1500)).is_some());
        assert!(session.notice(start + NOTICE_TTL).is_none());

        assert_eq!(session.tick(start + Duration::from_millis(100)), None);
        assert_eq!(
            session.tick(start + NOTICE_TTL),
            Some(SessionEvent::NoticeDismissed)
        );
        assert_eq!(session.tick(start + NOTICE_TTL), None);
    }

    #[test]
    fn session_press_dispatches_keys() {
        let list = accepted();
        let mut session = Session::new(Word::new("globe").unwrap(), &list);
        let now = Instant::now();

        for ch in "globx".chars() {
            session.press(Key::Letter(ch.to_ascii_uppercase()), now);
        }
        session.press(Key::Backspace, now);
        session.press(Key::Letter('E'), now);
        let event = session.press(Key::Enter, now);

        assert!(matches!(
            event,
            Some(SessionEvent::GuessEvaluated {
                status: GameStatus::Won,
                ..
            })
        ));
        assert!(session.state().status().is_over());
    }

    #[test]
    fn observers_see_emitted_events_only() {
        let list = accepted();
        let seen = RefCell::new(Vec::new());
        let mut session = Session::new(Word::new("crane").unwrap(), &list);
        session.subscribe(|event| seen.borrow_mut().push(event.clone()));

        session.remove_letter();
        session.add_letter('C');
        session.remove_letter();
        drop(session);

        assert_eq!(
            seen.into_inner(),
            vec![
                SessionEvent::LetterAdded {
                    row: 0,
                    col: 0,
                    letter: 'C'
                },
                SessionEvent::LetterRemoved { row: 0, col: 0 },
            ]
        );
    }
}
