//! TUI application state and logic

use crate::commands::PlayConfig;
use crate::core::Combination;
use crate::game::{Game, Outcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: PlayConfig,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub win_distribution: [usize; 13],
}

impl App {
    #[must_use]
    pub fn new(config: PlayConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let game = Self::fresh_game(&config, &mut rng);

        Self {
            config,
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type four digits and press Enter to guess.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "● = right color, right slot. ○ = right color, wrong slot.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            rng,
        }
    }

    fn fresh_game(config: &PlayConfig, rng: &mut StdRng) -> Game {
        let code = config
            .code
            .unwrap_or_else(|| Combination::random(rng));
        Game::with_code(config.turns, code)
    }

    pub fn new_game(&mut self) {
        self.game = Self::fresh_game(&self.config, &mut self.rng);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Break the code.", MessageStyle::Info);
    }

    /// Feed one typed character into the guess buffer
    ///
    /// Anything outside '0'..='5' is dropped, as is anything past the
    /// fourth slot.
    pub fn push_digit(&mut self, ch: char) {
        if self.input_buffer.len() < Combination::SLOTS && ('0'..='5').contains(&ch) {
            self.input_buffer.push(ch);
        }
    }

    pub fn pop_digit(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the buffered guess to the game
    pub fn submit_guess(&mut self) {
        let token = self.input_buffer.clone();
        let guess = match Combination::parse(&token) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error);
                return;
            }
        };

        match self.game.submit_guess(guess) {
            Ok(marking) => {
                self.input_buffer.clear();
                if self.game.is_finished() {
                    self.finish_game();
                } else {
                    self.add_message(
                        &format!("{}  {marking}", marking.pegs()),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if self.game.outcome() == Some(Outcome::Won) {
            self.stats.games_won += 1;
            let used = self.game.rows().len();
            if used < self.stats.win_distribution.len() {
                self.stats.win_distribution[used] += 1;
            }

            let celebration = match used {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4..=6 => "👏 GREAT JOB! Sharp deduction! 👏",
                _ => "🎉 Code broken! Congratulations! 🎉",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("😞 Too bad, you lost ... the code was {}", self.game.secret()),
                MessageStyle::Error,
            );
        }

        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Between games, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(c) => {
                        app.push_digit(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_digit();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DEFAULT_TURNS;

    fn fixed_app(code: &str) -> App {
        let config = PlayConfig {
            code: Some(Combination::parse(code).unwrap()),
            ..PlayConfig::default()
        };
        App::new(config)
    }

    #[test]
    fn buffer_accepts_only_pin_digits() {
        let mut app = fixed_app("0123");
        for ch in ['0', '7', 'a', '3', '9', '5'] {
            app.push_digit(ch);
        }
        assert_eq!(app.input_buffer, "035");
    }

    #[test]
    fn buffer_caps_at_four_digits() {
        let mut app = fixed_app("0123");
        for ch in ['1', '2', '3', '4', '5'] {
            app.push_digit(ch);
        }
        assert_eq!(app.input_buffer, "1234");

        app.pop_digit();
        assert_eq!(app.input_buffer, "123");
    }

    #[test]
    fn submitting_a_short_buffer_reports_an_error() {
        let mut app = fixed_app("0123");
        app.push_digit('0');
        app.submit_guess();

        assert!(app.game.rows().is_empty());
        assert_eq!(app.input_buffer, "0");
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn submitting_a_guess_records_a_row_and_clears_the_buffer() {
        let mut app = fixed_app("0123");
        for ch in ['3', '1', '2', '0'] {
            app.push_digit(ch);
        }
        app.submit_guess();

        assert_eq!(app.game.rows().len(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn winning_switches_to_game_over_and_updates_stats() {
        let mut app = fixed_app("0123");
        for ch in ['0', '1', '2', '3'] {
            app.push_digit(ch);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.win_distribution[1], 1);
    }

    #[test]
    fn losing_switches_to_game_over_without_a_win() {
        let config = PlayConfig {
            turns: 1,
            code: Some(Combination::parse("0123").unwrap()),
            ..PlayConfig::default()
        };
        let mut app = App::new(config);
        for ch in ['4', '4', '4', '4'] {
            app.push_digit(ch);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_resets_the_session_but_keeps_stats() {
        let mut app = fixed_app("0123");
        for ch in ['0', '1', '2', '3'] {
            app.push_digit(ch);
        }
        app.submit_guess();
        app.new_game();

        assert!(app.game.rows().is_empty());
        assert_eq!(app.game.turns_left(), DEFAULT_TURNS);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn seeded_apps_play_identical_secrets() {
        let config = PlayConfig {
            seed: Some(99),
            ..PlayConfig::default()
        };
        let a = App::new(config);
        let b = App::new(config);
        assert_eq!(a.game.secret(), b.game.secret());
    }

    #[test]
    fn messages_keep_only_the_last_five() {
        let mut app = fixed_app("0123");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("message 9"));
    }
}
