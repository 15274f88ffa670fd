//! TUI application state and logic

use crate::core::{Feedback, MAX_ROUNDS, SolverError};
use crate::language::{Dictionary, LanguageProfile};
use crate::solver::{Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub profile: &'a LanguageProfile,
    pub dictionary: &'a Dictionary,
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ROUNDS + 1],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(profile: &'a LanguageProfile, dictionary: &'a Dictionary) -> Self {
        let mut app = Self {
            profile,
            dictionary,
            session: Session::new(profile, dictionary),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Feedback,
            should_quit: false,
        };

        app.add_message(
            "Welcome! Play the suggested word and type the colours you get back.",
            MessageStyle::Info,
        );
        app.add_message(
            "g=green o=orange r=gray, e.g. 'rrgor'. Empty Enter stops the game.",
            MessageStyle::Info,
        );
        app.start_round();
        app
    }

    /// Ask the session for this round's guess
    fn start_round(&mut self) {
        match self.session.select_guess() {
            Ok(guess) => debug!(guess, "Suggesting"),
            Err(SolverError::NoCandidates) => self.finish_game(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the typed colours for the current guess
    ///
    /// An empty buffer means the game gave no response and stops the session.
    pub fn submit_feedback(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let input = input.trim();

        if input.is_empty() {
            self.session.abort();
            self.finish_game();
            return;
        }

        match Feedback::parse(input).and_then(|feedback| self.session.submit_feedback(feedback)) {
            Ok(SessionState::AwaitingGuessSelection) => {
                self.start_round();
                if self.session.state() == SessionState::AwaitingFeedback {
                    let count = self.session.candidate_count();
                    self.add_message(&format!("{count} candidates remaining"), MessageStyle::Info);
                }
            }
            Ok(_) => self.finish_game(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// The game refused the suggested word: move on to the next candidate
    pub fn skip_guess(&mut self) {
        match self.session.skip_guess() {
            Ok(guess) => {
                let text = format!("Skipped, try '{}'", guess.to_uppercase());
                self.add_message(&text, MessageStyle::Info);
            }
            Err(SolverError::NoCandidates) => self.finish_game(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.stats.total_games += 1;

        let rounds = self.session.round();
        match self.session.state() {
            SessionState::Solved => {
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(rounds) {
                    *slot += 1;
                }

                let celebration = match rounds {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            SessionState::Exhausted => self.add_message("No words found", MessageStyle::Error),
            SessionState::Aborted if rounds >= self.session.max_rounds() => {
                self.add_message("Out of rounds", MessageStyle::Error);
            }
            _ => self.add_message("Game stopped", MessageStyle::Info),
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if !self.session.state().is_terminal() {
            self.session.abort();
            self.finish_game();
        }

        self.session = Session::new(self.profile, self.dictionary);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.start_round();
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            _ if self.input_mode == InputMode::GameOver => {}
            KeyCode::Tab => self.skip_guess(),
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < crate::core::WORD_LENGTH {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_feedback(),
            _ => {}
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn dictionary() -> Dictionary {
        ["those", "drain", "lumpy", "mucky"].into_iter().collect()
    }

    #[test]
    fn starts_with_first_opener() {
        let profile = LanguageProfile::english();
        let dictionary = dictionary();
        let app = App::new(&profile, &dictionary);

        assert_eq!(app.session.current_guess(), Some("those"));
        assert_eq!(app.input_mode, InputMode::Feedback);
    }

    #[test]
    fn typed_feedback_advances_rounds_until_solved() {
        let profile = LanguageProfile::english();
        let dictionary = dictionary();
        let mut app = App::new(&profile, &dictionary);

        type_line(&mut app, "rrrrr");
        assert_eq!(app.session.current_guess(), Some("drain"));

        type_line(&mut app, "rrrrr");
        assert_eq!(app.session.current_guess(), Some("lumpy"));

        type_line(&mut app, "rgorg");
        assert_eq!(app.session.current_guess(), Some("mucky"));

        type_line(&mut app, "ggggg");
        assert_eq!(app.session.state(), SessionState::Solved);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[4], 1);
    }

    #[test]
    fn invalid_feedback_keeps_the_round() {
        let profile = LanguageProfile::english();
        let dictionary = dictionary();
        let mut app = App::new(&profile, &dictionary);

        type_line(&mut app, "xyz");

        assert_eq!(app.session.round(), 0);
        assert_eq!(app.session.current_guess(), Some("those"));
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn empty_enter_stops_the_game() {
        let profile = LanguageProfile::english();
        let dictionary = dictionary();
        let mut app = App::new(&profile, &dictionary);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.state(), SessionState::Aborted);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn tab_skips_to_next_candidate() {
        let profile = LanguageProfile::english().with_openers(["zzzzz", "yyyyy"]);
        let dictionary = dictionary();
        let mut app = App::new(&profile, &dictionary);

        assert_eq!(app.session.current_guess(), Some("drain"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.current_guess(), Some("lumpy"));
    }

    #[test]
    fn buffer_is_capped_and_editable() {
        let profile = LanguageProfile::english();
        let dictionary = dictionary();
        let mut app = App::new(&profile, &dictionary);

        for c in "rrgorr".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "rrgor");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "rrgo");
    }

    #[test]
    fn game_over_ignores_typing_until_new_game() {
        let profile = LanguageProfile::english();
        let dictionary = dictionary();
        let mut app = App::new(&profile, &dictionary);

        type_line(&mut app, "ggggg");
        press(&mut app, KeyCode::Char('g'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.session.round(), 0);
        assert_eq!(app.session.current_guess(), Some("those"));
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn quit_keys() {
        let profile = LanguageProfile::english();
        let dictionary = dictionary();

        let mut app = App::new(&profile, &dictionary);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&profile, &dictionary);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn empty_dictionary_ends_immediately() {
        let profile = LanguageProfile::english();
        let dictionary = Dictionary::default();
        let app = App::new(&profile, &dictionary);

        assert_eq!(app.session.state(), SessionState::Exhausted);
        assert_eq!(app.input_mode, InputMode::GameOver);
    }
}
