//! Display functions for command results

use super::formatters::colored_row;
use crate::commands::EvaluateResult;
use crate::core::MAX_GUESSES;
use crate::game::{GameState, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Print an evaluation with coloured tiles and its share line
pub fn print_evaluate_result(result: &EvaluateResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_yellow().bold(),
        result.solution.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(result.evaluation.tiles()));
    println!("  {}", result.evaluation.to_emoji());

    if !result.accepted {
        println!(
            "\n{}",
            format!("⚠ {} is not in the accepted word list", result.guess.text()).yellow()
        );
    }
}

/// Write the end-of-game summary; nothing is written while the game is in progress
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_game_summary<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    let score = match state.status() {
        GameStatus::Won => {
            writeln!(
                out,
                "\n{}",
                "🎉 You Won! Great job, you guessed the word!".green().bold()
            )?;
            state.current_row().to_string()
        }
        GameStatus::Lost => {
            writeln!(
                out,
                "\n{} The word was {}",
                "Game Over.".red().bold(),
                state.solution().text().bright_yellow().bold()
            )?;
            "X".to_string()
        }
        GameStatus::Playing => return Ok(()),
    };

    writeln!(
        out,
        "\nWordle {score}/{MAX_GUESSES}\n{}",
        state.board().share_grid()
    )
}
