//! Depth-bounded minimax with alpha-beta pruning.

use super::super::probe::Probe;
use super::super::rules::evaluate;
use super::super::{Board, Coord, GameOutcome, Mark};
use serde::{Deserialize, Serialize};

/// Plies explored below the root before a position is scored as neutral.
pub const MAX_DEPTH: u8 = 3;

/// Score of a position won by the searching player.
pub const WIN: i32 = 1;

/// Score of a position lost by the searching player.
pub const LOSS: i32 = -1;

/// Score of a tie, and of any undecided position at the depth cutoff.
pub const NEUTRAL: i32 = 0;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Fixed parameters of one search: whose point of view scores are from.
#[derive(Debug, Clone, Copy)]
struct Sides {
    player: Mark,
    opponent: Mark,
}

/// Runs the search from the root, maximizing for `player`.
///
/// Returns the best score and the move that achieves it. The board is
/// left exactly as it was passed in.
pub fn search(board: &mut Board, player: Mark, stats: &mut SearchStats) -> (i32, Option<Coord>) {
    let sides = Sides {
        player,
        opponent: player.opponent(),
    };
    alpha_beta(board, 0, i32::MIN, i32::MAX, true, sides, stats)
}

fn alpha_beta(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    sides: Sides,
    stats: &mut SearchStats,
) -> (i32, Option<Coord>) {
    stats.nodes += 1;

    match evaluate(board) {
        GameOutcome::Won(mark) if mark == sides.player => return (WIN, None),
        GameOutcome::Won(_) => return (LOSS, None),
        GameOutcome::Tie => return (NEUTRAL, None),
        GameOutcome::InProgress => {}
    }
    if depth == MAX_DEPTH {
        return (NEUTRAL, None);
    }

    let mover = if maximizing {
        sides.player
    } else {
        sides.opponent
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    // One flat row-major scan, so a cutoff ends the whole loop.
    for coord in board.size().coords() {
        let score = {
            let Some(mut probe) = Probe::place(board, coord, mover) else {
                continue;
            };
            alpha_beta(&mut probe, depth + 1, alpha, beta, !maximizing, sides, stats).0
        };

        if maximizing {
            if score > best {
                best = score;
                best_move = Some(coord);
            }
            alpha = alpha.max(score);
        } else {
            if score < best {
                best = score;
                best_move = Some(coord);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    (best, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid board text")
    }

    #[test]
    fn test_terminal_scores() {
        let mut stats = SearchStats::default();
        let mut won = board("XXX/OO./...");
        assert_eq!(search(&mut won, Mark::X, &mut stats), (WIN, None));
        assert_eq!(search(&mut won, Mark::O, &mut stats), (LOSS, None));
        let mut tie = board("XOX/XOO/OXX");
        assert_eq!(search(&mut tie, Mark::X, &mut stats), (NEUTRAL, None));
    }

    #[test]
    fn test_finds_forced_win() {
        // X plays (0,2): it completes the top row immediately.
        let mut b = board("XX./OO./...");
        let mut stats = SearchStats::default();
        let (score, best) = search(&mut b, Mark::X, &mut stats);
        assert_eq!(score, WIN);
        assert_eq!(best, Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut b = board("X../.O./...");
        let before = b.clone();
        let mut stats = SearchStats::default();
        let _ = search(&mut b, Mark::X, &mut stats);
        assert_eq!(b, before);
        assert!(stats.nodes > 1);
    }

    #[test]
    fn test_empty_board_is_neutral_and_picks_first_cell() {
        // Nothing is decided within three plies, so every root child scores
        // neutral and the earliest-scanned cell wins the tie.
        let mut b = Board::new(super::super::super::BoardSize::Three);
        let mut stats = SearchStats::default();
        let (score, best) = search(&mut b, Mark::X, &mut stats);
        assert_eq!(score, NEUTRAL);
        assert_eq!(best, Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let mut b = Board::new(super::super::super::BoardSize::Three);
        let mut stats = SearchStats::default();
        let _ = search(&mut b, Mark::X, &mut stats);
        // Full 3-ply tree is 1 + 9 + 72 + 504 nodes. The first root child
        // costs 23 nodes; every later one is cut after its first reply (9).
        assert_eq!(stats, SearchStats { nodes: 96, cutoffs: 15 });
    }

    #[test]
    fn test_cutoff_leaves_whole_scan() {
        // Cutoffs inside later rows only stay this cheap if the break
        // abandons every remaining cell, not just the rest of one row.
        let mut b = board("XO./.X./..O");
        let mut stats = SearchStats::default();
        let (score, best) = search(&mut b, Mark::X, &mut stats);
        assert_eq!((score, best), (WIN, Some(Coord::new(1, 0))));
        assert_eq!(stats, SearchStats { nodes: 44, cutoffs: 8 });
    }
}
