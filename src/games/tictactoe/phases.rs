//! Game outcome as seen by the caller.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Always recomputed from the board; nothing stores it between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No winning run yet and at least one empty cell.
    InProgress,
    /// The mark owns a winning run.
    Won(Mark),
    /// Every cell is occupied and nobody has a winning run.
    Tie,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Won(mark) => Some(*mark),
            GameOutcome::InProgress | GameOutcome::Tie => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won(mark) => write!(f, "Player {} Wins!", mark),
            GameOutcome::Tie => write!(f, "It's a Tie!"),
        }
    }
}
