//! Moves and board errors.

use super::{Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a coordinate.
///
/// Sessions record these to show the moves of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Error raised by board construction, parsing or mutation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Side length other than 3, 5 or 7.
    #[display("Unsupported board size {} (expected 3, 5 or 7)", _0)]
    UnsupportedSize(usize),

    /// Coordinate outside the grid.
    #[display("Cell ({row}, {col}) is outside a {side}x{side} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        side: usize,
    },

    /// Board text or serialized data does not describe a valid board.
    #[display("Invalid board: {}", _0)]
    Parse(String),
}

impl std::error::Error for BoardError {}
