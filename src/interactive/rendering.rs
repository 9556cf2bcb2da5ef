//! TUI rendering with ratatui
//!
//! Visualizations for the Mastermind board and its surrounding panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Combination, Pin};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn pin_color(pin: Pin) -> Color {
    match pin {
        Pin::Black => Color::DarkGray,
        Pin::Red => Color::Red,
        Pin::Green => Color::Green,
        Pin::Blue => Color::Blue,
        Pin::Yellow => Color::Yellow,
        Pin::White => Color::White,
    }
}

fn combination_spans(combination: Combination) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, &pin) in combination.pins().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("●", Style::default().fg(pin_color(pin))));
    }
    spans
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if app.config.reveal {
        let mut spans = vec![Span::styled(
            "Secret: ",
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend(combination_spans(app.game.secret()));
        spans.push(Span::styled(
            format!("  {}", app.game.secret()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    for (i, row) in app.game.rows().iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:>2}. ", i + 1),
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend(combination_spans(row.guess()));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            row.marking().pegs(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("  {}", row.guess()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }

    // Placeholder rows for the unspent turns
    for turn in app.game.rows().len()..app.config.turns {
        lines.push(Line::from(Span::styled(
            format!("{:>2}. · · · ·", turn + 1),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Color legend
            Constraint::Length(3), // Turns gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_legend(f, chunks[0]);
    render_turns_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = Pin::ALL
        .iter()
        .map(|&pin| {
            ListItem::new(Line::from(vec![
                Span::styled("●", Style::default().fg(pin_color(pin))),
                Span::raw(format!(" {} {}", pin.digit(), pin.name())),
            ]))
        })
        .collect();

    let legend = List::new(items).block(Block::default().title(" Colors ").borders(Borders::ALL));
    f.render_widget(legend, area);
}

fn render_turns_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.config.turns;
    let left = app.game.turns_left();
    let pct = ((left as f64 / total as f64) * 100.0) as u16;

    let color = if left * 2 >= total {
        Color::Cyan
    } else if left * 4 >= total {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct.min(100))
        .label(format!("{left}/{total} guesses left"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver => {
            if app.game.is_won() {
                (
                    " 🎉 CODE BROKEN! 🎉 | Press 'n' for new game or 'q' to quit ",
                    Color::Green,
                )
            } else {
                (
                    " GAME OVER | Press 'n' for new game or 'q' to quit ",
                    Color::Red,
                )
            }
        }
        InputMode::Guessing => (" Enter Guess (four digits, 0-5) ", Color::Yellow),
    };

    let mut spans: Vec<Span> = Vec::new();
    if app.input_mode == InputMode::Guessing {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        for slot in 0..Combination::SLOTS {
            if slot > 0 {
                spans.push(Span::raw(" "));
            }
            match typed.get(slot).copied().and_then(Pin::from_digit) {
                Some(pin) => {
                    spans.push(Span::styled("●", Style::default().fg(pin_color(pin))));
                }
                None => {
                    spans.push(Span::styled("·", Style::default().fg(Color::DarkGray)));
                }
            }
        }
        if !app.input_buffer.is_empty() {
            spans.push(Span::styled(
                format!("  {}", app.input_buffer),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
    }

    let input = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let games_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let games = Paragraph::new(games_text).alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let rate_text = format!(
        "Win Rate: {:.0}%",
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let rate = Paragraph::new(rate_text).alignment(Alignment::Center);
    f.render_widget(rate, chunks[1]);

    let turns_text = format!("Turns left: {}", app.game.turns_left());
    let turns = Paragraph::new(turns_text).alignment(Alignment::Center);
    f.render_widget(turns, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "q: Quit | n: New Game | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
