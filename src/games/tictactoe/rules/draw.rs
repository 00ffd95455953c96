//! Tie detection.

use super::super::Board;
use super::win::check_winner;

/// Whether the board is full with no winning run.
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
