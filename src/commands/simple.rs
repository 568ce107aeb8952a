//! Simple line-based mode
//!
//! Plays a game on stdin/stdout without the TUI: one guess per line.

use crate::client::SolutionSource;
use crate::core::{MAX_GUESSES, WORD_LENGTH, Word};
use crate::game::{GameState, INVALID_WORD_NOTICE, Key, Session, SessionEvent};
use crate::output::formatters::{colored_keyboard, colored_row};
use crate::output::write_game_summary;
use crate::wordlists::WordList;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the simple mode on the terminal
///
/// # Errors
///
/// Returns an error if the solution cannot be obtained or on an I/O error.
pub fn run_simple(source: &SolutionSource, accepted: &WordList) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║             Daily Word - Simple Mode             ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Loading today's word...");

    let solution = source
        .resolve()
        .map_err(|e| format!("Failed to fetch daily word: {e}"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(solution, accepted, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())?;
    Ok(())
}

/// Play one game reading guesses from `input`, one per line
///
/// Stops when the game ends, on `quit`, or at end of input, and returns the final state.
///
/// # Errors
///
/// Returns any I/O error from reading or writing.
pub fn play_lines<R: BufRead, W: Write>(
    solution: Word,
    accepted: &WordList,
    input: R,
    mut output: W,
) -> io::Result<GameState> {
    let mut session = Session::new(solution, accepted);

    writeln!(
        output,
        "Guess the word in {MAX_GUESSES} tries. Type 'quit' to give up.\n"
    )?;

    for line in input.lines() {
        let line = line?;
        let guess = line.trim();

        if matches!(guess.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(
                output,
                "\nThe word was {}.",
                session.state().solution().text()
            )?;
            break;
        }

        // The whole line is the guess; it must be exactly one word
        if guess.chars().count() < WORD_LENGTH {
            writeln!(output, "❌ Not enough letters")?;
            continue;
        }
        if Word::new(guess).is_err() {
            writeln!(output, "❌ {INVALID_WORD_NOTICE}")?;
            continue;
        }

        let now = Instant::now();
        for key in guess.chars().filter_map(Key::from_char) {
            session.press(key, now);
        }

        match session.press(Key::Enter, now) {
            Some(SessionEvent::GuessEvaluated { row, .. }) => {
                let state = session.state();
                writeln!(output, "{}", colored_row(state.board().rows()[row].tiles()))?;
                if state.status().is_over() {
                    write_game_summary(&mut output, state)?;
                    break;
                }
                writeln!(output)?;
                for keys in colored_keyboard(state.board()) {
                    writeln!(output, "  {keys}")?;
                }
                writeln!(
                    output,
                    "\n{} guesses left",
                    MAX_GUESSES - state.current_row()
                )?;
            }
            Some(SessionEvent::GuessRejected { .. }) => {
                if let Some(notice) = session.notice(now) {
                    writeln!(output, "❌ {}", notice.text())?;
                }
            }
            _ => {
                writeln!(output, "❌ Not enough letters")?;
            }
        }

        // A line is a complete attempt; anything left unsubmitted is discarded
        while session.remove_letter().is_some() {}
    }

    Ok(session.state().clone())
}
