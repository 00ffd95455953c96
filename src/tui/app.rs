//! Application state and key handling.

use crossterm::event::KeyCode;
use gridlock::{Coord, GameMode, GameOutcome, GameSession, GameSettings, Turn};
use tracing::{debug, warn};

use super::input::{clamp_cursor, move_cursor};

/// Main application state.
pub struct App {
    session: GameSession,
    /// Sidebar selection; applied when a new game starts.
    pending: GameSettings,
    cursor: Coord,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a game already started.
    pub fn new(settings: GameSettings) -> Self {
        let session = GameSession::start(settings);
        let mut app = Self {
            session,
            pending: settings,
            cursor: Coord::new(0, 0),
            status_message: String::new(),
            should_quit: false,
        };
        app.refresh_status();
        app
    }

    /// The running session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Settings that the next game will use.
    pub fn pending(&self) -> &GameSettings {
        &self.pending
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key");
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('m') => self.pending = self.pending.with_mode(self.pending.mode().toggle()),
            KeyCode::Char('s') => {
                self.pending = self
                    .pending
                    .with_board_size(self.pending.board_size().cycle())
            }
            KeyCode::Char('i') => {
                self.pending = self
                    .pending
                    .with_player_mark(self.pending.player_mark().opponent())
            }
            other => {
                self.cursor = move_cursor(self.cursor, other, self.session.board().size());
            }
        }
    }

    /// Starts a new game with the sidebar settings.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reconfigure(self.pending);
        self.cursor = clamp_cursor(self.cursor, self.session.board().size());
        self.refresh_status();
    }

    fn place(&mut self) {
        match self.session.play(self.cursor) {
            Ok(Turn::Occupied) => {
                self.status_message = format!("Cell {} is taken, pick another", self.cursor);
            }
            Ok(Turn::Moved { .. }) => self.refresh_status(),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status_message = format!("{} Press 'n' for a new game.", e);
            }
        }
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.session.outcome() {
            GameOutcome::InProgress => {
                let mark = *self.session.to_move();
                match self.session.settings().mode() {
                    GameMode::TwoPlayer => format!("Player {}'s Turn", mark),
                    GameMode::VersusComputer => format!("Your Turn ({})", mark),
                }
            }
            outcome => format!("{} Press 'n' for a new game or 'q' to quit.", outcome),
        };
    }
}
