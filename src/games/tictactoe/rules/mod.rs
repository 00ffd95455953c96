//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here caches results, so an
//! evaluation always reflects the board exactly as it is.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::check_winner;

use super::{Board, GameOutcome};

/// Evaluates the board: a winner, a tie, or still in progress.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = check_winner(board) {
        GameOutcome::Won(mark)
    } else if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{BoardSize, Mark};
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_boards_in_progress() {
        for size in BoardSize::iter() {
            assert_eq!(evaluate(&Board::new(size)), GameOutcome::InProgress);
        }
    }

    #[test]
    fn test_evaluate_win_and_tie() {
        let won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(evaluate(&won), GameOutcome::Won(Mark::O));
        let tie: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&tie), GameOutcome::Tie);
    }
}
