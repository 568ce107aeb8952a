//! TUI application state and logic

use crate::client::{FetchError, SolutionSource};
use crate::core::{Tile, TileState, WORD_LENGTH, Word};
use crate::game::{GameStatus, Key, Loadable, Session, SessionEvent};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Delay between revealing consecutive tiles of a submitted row
pub const REVEAL_STAGGER: Duration = Duration::from_millis(300);

/// How often the UI redraws while idle
const TICK_RATE: Duration = Duration::from_millis(50);

/// Message shown when the solution cannot be fetched
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch daily word. Please try again.";

/// The row currently being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
}

impl Reveal {
    /// Number of tiles of the row already flipped at `now`
    #[must_use]
    pub fn revealed_cols(&self, now: Instant) -> usize {
        let elapsed = now.duration_since(self.started).as_millis();
        let stagger = REVEAL_STAGGER.as_millis();
        // The first tile flips immediately
        usize::try_from(elapsed / stagger + 1)
            .unwrap_or(WORD_LENGTH)
            .min(WORD_LENGTH)
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= REVEAL_STAGGER * (WORD_LENGTH as u32 - 1)
    }
}

fn new_session(solution: Word, accepted: &WordList) -> Session<'_> {
    let mut session = Session::new(solution, accepted);
    session.subscribe(|event| tracing::trace!(?event, "session event"));
    session
}

/// Application state
pub struct App<'a> {
    pub accepted: &'a WordList,
    pub source: SolutionSource,
    pub game: Loadable<Session<'a>>,
    pub reveal: Option<Reveal>,
    pub should_quit: bool,
    pending: Option<Receiver<Result<Word, FetchError>>>,
}

impl<'a> App<'a> {
    /// Create the app and start fetching the solution in the background
    #[must_use]
    pub fn new(source: SolutionSource, accepted: &'a WordList) -> Self {
        let mut app = Self {
            accepted,
            source,
            game: Loadable::Pending,
            reveal: None,
            should_quit: false,
            pending: None,
        };
        app.start_fetch();
        app
    }

    /// Create the app with a known solution, skipping the fetch
    #[must_use]
    pub fn with_solution(solution: Word, accepted: &'a WordList) -> Self {
        let mut app = Self {
            accepted,
            source: SolutionSource::Practice,
            game: Loadable::Pending,
            reveal: None,
            should_quit: false,
            pending: None,
        };
        app.start_session(solution);
        app
    }

    /// Spawn the one in-flight fetch; board input is ignored until it resolves
    pub fn start_fetch(&mut self) {
        let (tx, rx) = mpsc::channel();
        let source = self.source.clone();
        thread::spawn(move || {
            // Receiver gone means the app quit; nothing to report
            let _ = tx.send(source.resolve());
        });
        self.game = Loadable::Pending;
        self.reveal = None;
        self.pending = Some(rx);
    }

    /// Pick up the fetch result if it has arrived
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.pending else { return };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(FetchError::Runtime(io::Error::other(
                "fetch thread exited without a result",
            ))),
        };
        self.pending = None;

        if let Err(err) = &result {
            tracing::error!(%err, "failed to fetch daily word");
        }
        let accepted = self.accepted;
        self.game = Loadable::from(result.map_err(|_| LOAD_FAILED_MESSAGE))
            .map(|solution| new_session(solution, accepted));
        self.reveal = None;
    }

    fn start_session(&mut self, solution: Word) {
        self.game = Loadable::Ready(new_session(solution, self.accepted));
        self.reveal = None;
    }

    /// Periodic housekeeping: fetch result and notice expiry
    pub fn tick(&mut self, now: Instant) {
        self.poll_fetch();
        if let Some(session) = self.game.ready_mut() {
            session.tick(now);
        }
        if self.reveal.is_some_and(|reveal| reveal.is_done(now) && !self.is_over()) {
            self.reveal = None;
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<GameStatus> {
        self.game.ready().map(|session| session.state().status())
    }

    fn is_over(&self) -> bool {
        self.status().is_some_and(GameStatus::is_over)
    }

    /// The end-of-game modal is shown once the final row has finished revealing
    #[must_use]
    pub fn show_modal(&self, now: Instant) -> bool {
        self.is_over() && self.reveal.is_none_or(|reveal| reveal.is_done(now))
    }

    /// A tile as it should be drawn at `now`, hiding results still to be revealed
    #[must_use]
    pub fn display_tile(&self, row: usize, col: usize, tile: Tile, now: Instant) -> Tile {
        match self.reveal {
            Some(reveal) if reveal.row == row && col >= reveal.revealed_cols(now) => Tile {
                state: if tile.state.is_evaluated() {
                    TileState::Filled
                } else {
                    tile.state
                },
                ..tile
            },
            _ => tile,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if code == KeyCode::Esc
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.show_modal(now) {
            match code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.start_fetch(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if matches!(self.game, Loadable::Failed(_)) {
            if matches!(code, KeyCode::Char('q' | 'Q')) {
                self.should_quit = true;
            }
            return;
        }

        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }

        let key = match code {
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Char(ch) => match Key::from_char(ch) {
                Some(key) => key,
                None => return,
            },
            _ => return,
        };

        let Some(session) = self.game.ready_mut() else {
            return;
        };
        if let Some(SessionEvent::GuessEvaluated { row, .. }) = session.press(key, now) {
            self.reveal = Some(Reveal { row, started: now });
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers, Instant::now());
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
