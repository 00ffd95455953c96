//! Gridlock - tic-tac-toe on 3×3, 5×5 and 7×7 boards
//!
//! The engine is stateless: callers own a [`Board`], mutate it with
//! [`Board::place_mark`], ask [`evaluate`] for the outcome after every
//! placement, and let [`choose_move`] play the computer's turn.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`BoardSize`], [`Mark`], [`evaluate`]
//! - **Search**: immediate win, immediate block, then a three-ply
//!   alpha-beta search ([`choose_move`], [`decide`])
//! - **Session**: [`GameSession`] keeps turn order and the score for a
//!   presentation layer
//! - **Settings**: [`GameSettings`] loaded from TOML
//!
//! # Example
//!
//! ```
//! use gridlock::{Board, BoardSize, Coord, GameOutcome, Mark, choose_move, evaluate};
//!
//! let mut board = Board::new(BoardSize::Three);
//! assert!(board.place_mark(Coord::new(1, 1), Mark::X).unwrap());
//! assert_eq!(evaluate(&board), GameOutcome::InProgress);
//!
//! let reply = choose_move(&mut board, Mark::O).expect("board has empty cells");
//! assert_eq!(board.count(Mark::O), 1);
//! assert!(!board.is_vacant(reply));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod session;
mod settings;

// Crate-level exports - Board model
pub use games::tictactoe::{
    Board, BoardError, BoardSize, Cell, Coord, GameOutcome, Mark, Move, Probe, evaluate,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{check_winner, is_tie};

// Crate-level exports - Search
pub use games::tictactoe::search::{
    Decision, LOSS, MAX_DEPTH, NEUTRAL, Reason, SearchStats, WIN, choose_move, decide,
};

// Crate-level exports - Session management
pub use session::{GameSession, Scoreboard, SessionError, Turn};

// Crate-level exports - Settings
pub use settings::{ConfigError, GameMode, GameSettings};
