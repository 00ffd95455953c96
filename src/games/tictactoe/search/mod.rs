//! Move selection for the computer player.
//!
//! A move is chosen in three stages, first match wins:
//!
//! 1. a cell that wins on the spot,
//! 2. a cell the opponent would win on next turn (taken to block),
//! 3. the best cell found by a [`MAX_DEPTH`]-ply alpha-beta search.
//!
//! Every stage explores by writing marks into the caller's board and
//! clearing them again; only the chosen move stays on the board.

mod minimax;

pub use minimax::{LOSS, MAX_DEPTH, NEUTRAL, SearchStats, WIN};

use super::probe::Probe;
use super::rules::evaluate;
use super::{Board, Coord, GameOutcome, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which stage produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// The move completes a winning run.
    Win,
    /// The move occupies the cell the opponent needed to win.
    Block,
    /// The move came out of the bounded search with this score.
    Minimax {
        /// Score from the mover's point of view.
        score: i32,
    },
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::Win => write!(f, "immediate win"),
            Reason::Block => write!(f, "block"),
            Reason::Minimax { score } => write!(f, "minimax (score {})", score),
        }
    }
}

/// A committed computer move and how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The cell that now holds the mover's mark.
    pub coord: Coord,
    /// The stage that selected it.
    pub reason: Reason,
    /// Search counters; zero unless the minimax stage ran.
    pub stats: SearchStats,
}

/// Chooses and commits a move for `mark`.
///
/// Returns the cell that was filled, or `None` if the board is already
/// decided or has no empty cell.
pub fn choose_move(board: &mut Board, mark: Mark) -> Option<Coord> {
    decide(board, mark).map(|decision| decision.coord)
}

/// Like [`choose_move`], but also reports which stage picked the move.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn decide(board: &mut Board, mark: Mark) -> Option<Decision> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        warn!(%outcome, "Search requested on a finished board");
        return None;
    }

    if let Some(coord) = take_winning_cell(board, mark) {
        debug!(%coord, "Completing a winning run");
        return Some(Decision {
            coord,
            reason: Reason::Win,
            stats: SearchStats::default(),
        });
    }

    if let Some(coord) = block_opponent(board, mark) {
        debug!(%coord, "Blocking opponent");
        return Some(Decision {
            coord,
            reason: Reason::Block,
            stats: SearchStats::default(),
        });
    }

    let mut stats = SearchStats::default();
    let (score, best) = minimax::search(board, mark, &mut stats);
    debug!(score, nodes = stats.nodes, cutoffs = stats.cutoffs, "Search finished");

    let coord = place_reply(board, best?, mark)?;
    Some(Decision {
        coord,
        reason: Reason::Minimax { score },
        stats,
    })
}

/// Commits the first cell, in row-major order, that wins for `mark`.
fn take_winning_cell(board: &mut Board, mark: Mark) -> Option<Coord> {
    for coord in board.size().coords() {
        let Some(probe) = Probe::place(board, coord, mark) else {
            continue;
        };
        if evaluate(&probe) == GameOutcome::Won(mark) {
            probe.commit();
            return Some(coord);
        }
    }
    None
}

/// Commits `mark` on the first cell where the opponent would win.
fn block_opponent(board: &mut Board, mark: Mark) -> Option<Coord> {
    let opponent = mark.opponent();
    for coord in board.size().coords() {
        let threat = match Probe::place(board, coord, opponent) {
            Some(probe) => evaluate(&probe) == GameOutcome::Won(opponent),
            None => continue,
        };
        if threat {
            return place_reply(board, coord, mark);
        }
    }
    None
}

/// Places the chosen reply, or `None` if the cell could not take it.
fn place_reply(board: &mut Board, coord: Coord, mark: Mark) -> Option<Coord> {
    match board.place_mark(coord, mark) {
        Ok(true) => Some(coord),
        Ok(false) => {
            warn!(%coord, "Chosen cell is already occupied");
            None
        }
        Err(e) => {
            warn!(error = %e, "Chosen cell is off the board");
            None
        }
    }
}
