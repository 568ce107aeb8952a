//! TUI rendering with ratatui
//!
//! Board, keyboard, notice line and the end-of-game modal.

use super::app::App;
use crate::core::{MAX_GUESSES, Tile, TileState};
use crate::game::{GameStatus, KEYBOARD_ROWS, Key, Loadable, Session, key_state, key_state_in};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Notice
            Constraint::Min(10),   // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.game {
        Loadable::Pending => render_centered_text(f, chunks[2], "Loading...", Color::Gray),
        Loadable::Failed(message) => {
            render_centered_text(f, chunks[2], message, Color::Red);
        }
        Loadable::Ready(session) => {
            render_notice(f, session, chunks[1], now);
            render_board(f, app, session, chunks[2], now);
            render_keyboard(f, app, session, chunks[3], now);
            if app.show_modal(now) {
                let area = f.area();
                render_modal(f, session, area);
            }
        }
    }

    render_status(f, app, chunks[4], now);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(header, area);
}

fn render_centered_text(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, row);
}

fn render_notice(f: &mut Frame, session: &Session, area: Rect, now: Instant) {
    let Some(notice) = session.notice(now) else {
        return;
    };
    let paragraph = Paragraph::new(notice.text())
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Foreground and background colours for a tile state
#[must_use]
pub const fn tile_colors(state: TileState) -> (Color, Color) {
    match state {
        TileState::Correct => (Color::Black, Color::Green),
        TileState::Present => (Color::Black, Color::Yellow),
        TileState::Absent => (Color::White, Color::DarkGray),
        TileState::Filled => (Color::White, Color::Reset),
        TileState::Empty => (Color::DarkGray, Color::Reset),
    }
}

fn tile_span(tile: Tile) -> Span<'static> {
    let (fg, bg) = tile_colors(tile.state);
    let text = match tile.letter {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    };
    Span::styled(
        text,
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    )
}

fn render_board(f: &mut Frame, app: &App, session: &Session, area: Rect, now: Instant) {
    let board = session.state().board();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for (row_index, row) in board.rows().iter().enumerate() {
        let mut spans = Vec::new();
        for (col, tile) in row.tiles().iter().enumerate() {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile_span(app.display_tile(row_index, col, *tile, now)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [board_area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, board_area);
}

/// Keyboard colours must not run ahead of the reveal animation
fn visible_key_state(app: &App, session: &Session, key: Key, now: Instant) -> TileState {
    let Key::Letter(letter) = key else {
        return TileState::Empty;
    };
    match app.reveal {
        Some(reveal) if !reveal.is_done(now) => {
            let rows = session.state().board().submitted_rows();
            key_state_in(letter, rows.take(reveal.row))
        }
        _ => key_state(letter, session.state().board()),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, session: &Session, area: Rect, now: Instant) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (i, key) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let state = visible_key_state(app, session, *key, now);
                let (fg, bg) = match state {
                    TileState::Empty | TileState::Filled => (Color::White, Color::Gray),
                    evaluated => tile_colors(evaluated),
                };
                let label = if key.is_wide() {
                    format!("  {}  ", key.label())
                } else {
                    format!(" {} ", key.label())
                };
                spans.push(Span::styled(
                    label,
                    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        })
        .flat_map(|line| [line, Line::default()])
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_modal(f: &mut Frame, session: &Session, area: Rect) {
    let state = session.state();
    let (title, color) = match state.status() {
        GameStatus::Won => (" You Won! ".to_string(), Color::Green),
        _ => (" Game Over ".to_string(), Color::Red),
    };

    let mut content = Vec::new();
    match state.status() {
        GameStatus::Won => content.push(Line::from("Great job, you guessed the word!")),
        _ => content.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                state.solution().text().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])),
    }
    content.push(Line::default());
    for row in state.board().share_grid().lines() {
        content.push(Line::from(row.to_string()));
    }
    content.push(Line::default());
    content.push(Line::from(Span::styled(
        "Enter/n: Play Again | q: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let height = u16::try_from(content.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_rect(area, 40, height);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn render_status(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let help_text = match &app.game {
        Loadable::Pending => "Esc: Quit",
        Loadable::Failed(_) => "q/Esc: Quit",
        Loadable::Ready(_) if app.show_modal(now) => "Enter/n: Play Again | q: Quit",
        Loadable::Ready(_) => "Type to guess | Enter: Submit | Backspace: Delete | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
