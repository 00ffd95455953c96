//! Generalized tic-tac-toe on 3×3, 5×5 and 7×7 boards.

mod action;
mod phases;
mod probe;
pub mod rules;
pub mod search;
mod types;

pub use action::{BoardError, Move};
pub use phases::GameOutcome;
pub use probe::Probe;
pub use rules::evaluate;
pub use search::{Decision, Reason, SearchStats, choose_move, decide};
pub use types::{Board, BoardSize, Cell, Coord, Mark};
