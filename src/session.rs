//! Game session: the caller-owned state of one sitting at the board.
//!
//! The engine itself keeps nothing between calls. A [`GameSession`] holds
//! the board, whose turn it is, the settings the game was started with and
//! the running score, and drives the computer's replies.

use crate::games::tictactoe::{
    Board, BoardError, Coord, GameOutcome, Mark, Move, choose_move, evaluate,
};
use crate::settings::{GameMode, GameSettings};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Running tally of finished games against the computer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games the human won.
    player_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Games that ended in a tie.
    ties: u32,
}

impl Scoreboard {
    /// Records a finished game from the human's point of view.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome, player_mark: Mark) {
        match outcome {
            GameOutcome::Won(mark) if mark == player_mark => self.player_wins += 1,
            GameOutcome::Won(_) => self.computer_wins += 1,
            GameOutcome::Tie => self.ties += 1,
            GameOutcome::InProgress => warn!("Ignoring unfinished game"),
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }
}

/// What happened when a human asked to play a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The cell was taken; nothing changed and the same player is still to move.
    Occupied,
    /// The mark was placed.
    Moved {
        /// The computer's answering move, if one was played.
        reply: Option<Coord>,
        /// Board outcome after all placements.
        outcome: GameOutcome,
    },
}

/// Error returned by [`GameSession::play`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The game has already ended.
    #[display("Game is already over: {}", _0)]
    GameOver(GameOutcome),

    /// The board rejected the move.
    #[display("Invalid move: {}", _0)]
    Board(BoardError),
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::GameOver(_) => None,
            SessionError::Board(e) => Some(e),
        }
    }
}

/// One game in progress plus the session-wide score.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// Settings the current game was started with.
    settings: GameSettings,
    /// Current board.
    board: Board,
    /// Mark to play next.
    to_move: Mark,
    /// Moves of the current game, oldest first.
    history: Vec<Move>,
    /// Finished games in versus-computer mode.
    scoreboard: Scoreboard,
    #[getter(skip)]
    recorded: bool,
}

impl GameSession {
    /// Starts a session with a fresh game.
    ///
    /// In versus-computer mode with the human on O, the computer opens as X.
    #[instrument]
    pub fn start(settings: GameSettings) -> Self {
        let mut session = Self {
            settings,
            board: Board::new(*settings.board_size()),
            to_move: Mark::X,
            history: Vec::new(),
            scoreboard: Scoreboard::default(),
            recorded: false,
        };
        session.open();
        session
    }

    /// Current outcome, computed from the board.
    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    /// Whether the human whose turn it is may place a mark.
    pub fn awaiting_human(&self) -> bool {
        !self.outcome().is_terminal()
    }

    /// Places the current player's mark at `coord`.
    ///
    /// In versus-computer mode the computer answers immediately unless the
    /// game just ended.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] if the game has ended, or
    /// [`SessionError::Board`] if `coord` is off the board.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, coord: Coord) -> Result<Turn, SessionError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            warn!(%outcome, "Move attempted after game ended");
            return Err(SessionError::GameOver(outcome));
        }

        let mark = self.to_move;
        if !self.board.place_mark(coord, mark)? {
            debug!(%coord, "Cell already occupied");
            return Ok(Turn::Occupied);
        }
        self.history.push(Move::new(mark, coord));
        self.to_move = mark.opponent();
        info!(%mark, %coord, "Mark placed");

        let mut outcome = self.outcome();
        let mut reply = None;
        if !outcome.is_terminal() && self.settings.mode() == &GameMode::VersusComputer {
            reply = self.computer_turn();
            outcome = self.outcome();
        }

        self.finish_if_over(outcome);
        Ok(Turn::Moved { reply, outcome })
    }

    /// Starts a new game with the current settings, keeping the score.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.reconfigure(self.settings);
    }

    /// Starts a new game with different settings, keeping the score.
    #[instrument(skip(self))]
    pub fn reconfigure(&mut self, settings: GameSettings) {
        info!("Starting new game");
        self.settings = settings;
        self.board = Board::new(*settings.board_size());
        self.to_move = Mark::X;
        self.history.clear();
        self.recorded = false;
        self.open();
    }

    /// Lets the computer open when it holds X.
    fn open(&mut self) {
        if self.settings.mode() == &GameMode::VersusComputer
            && self.settings.computer_mark() == Mark::X
        {
            self.computer_turn();
        }
    }

    fn computer_turn(&mut self) -> Option<Coord> {
        let mark = self.to_move;
        let coord = choose_move(&mut self.board, mark)?;
        self.history.push(Move::new(mark, coord));
        self.to_move = mark.opponent();
        info!(%mark, %coord, "Computer played");
        Some(coord)
    }

    fn finish_if_over(&mut self, outcome: GameOutcome) {
        if !outcome.is_terminal() || self.recorded {
            return;
        }
        self.recorded = true;
        info!(%outcome, moves = self.history.len(), "Game over");
        if self.settings.mode() == &GameMode::VersusComputer {
            self.scoreboard.record(outcome, *self.settings.player_mark());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{BoardSize, Cell};

    fn versus(mark: Mark) -> GameSettings {
        GameSettings::new(BoardSize::Three, GameMode::VersusComputer, mark)
    }

    #[test]
    fn test_two_player_alternates() {
        let mut session = GameSession::start(GameSettings::default());
        assert_eq!(*session.to_move(), Mark::X);
        session.play(Coord::new(1, 1)).unwrap();
        assert_eq!(*session.to_move(), Mark::O);
        session.play(Coord::new(0, 0)).unwrap();
        assert_eq!(
            session.board().get(Coord::new(0, 0)),
            Some(Cell::Occupied(Mark::O))
        );
    }

    #[test]
    fn test_occupied_cell_does_not_advance() {
        let mut session = GameSession::start(GameSettings::default());
        session.play(Coord::new(1, 1)).unwrap();
        let turn = session.play(Coord::new(1, 1)).unwrap();
        assert_eq!(turn, Turn::Occupied);
        assert_eq!(*session.to_move(), Mark::O);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_computer_opens_when_human_is_o() {
        let session = GameSession::start(versus(Mark::O));
        assert_eq!(session.board().count(Mark::X), 1);
        assert_eq!(*session.to_move(), Mark::O);
    }

    #[test]
    fn test_computer_replies() {
        let mut session = GameSession::start(versus(Mark::X));
        assert_eq!(session.board().count(Mark::X), 0);
        let turn = session.play(Coord::new(1, 1)).unwrap();
        let Turn::Moved { reply, outcome } = turn else {
            panic!("expected a move");
        };
        assert!(reply.is_some());
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(session.board().count(Mark::O), 1);
        assert_eq!(*session.to_move(), Mark::X);
    }

    #[test]
    fn test_out_of_bounds_is_error() {
        let mut session = GameSession::start(GameSettings::default());
        let err = session.play(Coord::new(0, 3)).unwrap_err();
        assert!(matches!(err, SessionError::Board(BoardError::OutOfBounds { .. })));
    }

    #[test]
    fn test_play_after_game_over_is_error() {
        let mut session = GameSession::start(GameSettings::default());
        for coord in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.play(Coord::new(coord.0, coord.1)).unwrap();
        }
        assert_eq!(session.outcome(), GameOutcome::Won(Mark::X));
        let err = session.play(Coord::new(2, 2)).unwrap_err();
        assert_eq!(err, SessionError::GameOver(GameOutcome::Won(Mark::X)));
    }

    #[test]
    fn test_two_player_games_are_not_scored() {
        let mut session = GameSession::start(GameSettings::default());
        for coord in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.play(Coord::new(coord.0, coord.1)).unwrap();
        }
        assert_eq!(session.scoreboard().games(), 0);
    }

    #[test]
    fn test_new_game_keeps_score() {
        let mut session = GameSession::start(versus(Mark::X));
        // Keep playing the first empty cell until the game ends.
        while session.awaiting_human() {
            let coord = session.board().vacancies()[0];
            session.play(coord).unwrap();
        }
        assert_eq!(session.scoreboard().games(), 1);

        session.new_game();
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert!(session.history().is_empty());
        assert_eq!(session.scoreboard().games(), 1);
    }

    #[test]
    fn test_reconfigure_changes_size() {
        let mut session = GameSession::start(GameSettings::default());
        session.reconfigure(GameSettings::default().with_board_size(BoardSize::Five));
        assert_eq!(session.board().size(), BoardSize::Five);
        assert_eq!(session.board().vacancies().len(), 25);
    }

    #[test]
    fn test_scoreboard_record() {
        let mut score = Scoreboard::default();
        score.record(GameOutcome::Won(Mark::O), Mark::O);
        score.record(GameOutcome::Won(Mark::X), Mark::O);
        score.record(GameOutcome::Tie, Mark::O);
        score.record(GameOutcome::InProgress, Mark::O);
        assert_eq!(*score.player_wins(), 1);
        assert_eq!(*score.computer_wins(), 1);
        assert_eq!(*score.ties(), 1);
        assert_eq!(score.games(), 3);
    }
}
