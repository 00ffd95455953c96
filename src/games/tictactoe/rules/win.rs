//! Win detection for N×N boards.

use super::super::{Board, Coord, Mark};

/// Scan directions as (row step, column step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Returns the first mark owning a winning run.
///
/// Cells are scanned in row-major order and each occupied cell is tested
/// in the order right, down, down-right, down-left. The first qualifying
/// run decides the result.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let run = board.size().win_run();
    for start in board.size().coords() {
        let Some(mark) = board.get(start).and_then(|cell| cell.mark()) else {
            continue;
        };
        if DIRECTIONS
            .iter()
            .any(|&(dr, dc)| run_from(board, start, dr, dc, run, mark))
        {
            return Some(mark);
        }
    }
    None
}

/// Whether `run` cells starting at `start` and stepping by `(dr, dc)` all hold `mark`.
fn run_from(board: &Board, start: Coord, dr: isize, dc: isize, run: usize, mark: Mark) -> bool {
    (0..run as isize).all(|k| {
        let row = start.row as isize + dr * k;
        let col = start.col as isize + dc * k;
        row >= 0
            && col >= 0
            && board
                .get(Coord::new(row as usize, col as usize))
                .and_then(|cell| cell.mark())
                == Some(mark)
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::BoardSize;
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid board text")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new(BoardSize::Seven)), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXX/OO./...")), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&board("XO./XO./.O.")), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&board("O.X/.OX/..O")), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("O.X/.XO/X..")), Some(Mark::X));
    }

    #[test]
    fn test_run_must_not_wrap_rows() {
        // Two at the end of row 0 and two at the start of row 1 are not a run.
        let b = board(
            "...XX/\
             XX.../\
             ...../\
             ...../\
             .....",
        );
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_five_by_five_needs_four() {
        let three = board("XXX../...../...../...../.....");
        assert_eq!(check_winner(&three), None);
        let four = board(".XXXX/...../...../...../.....");
        assert_eq!(check_winner(&four), Some(Mark::X));
    }

    #[test]
    fn test_seven_by_seven_vertical_five() {
        let mut b = Board::new(BoardSize::Seven);
        for row in 2..7 {
            b.place_mark(Coord::new(row, 6), Mark::O).unwrap();
        }
        assert_eq!(check_winner(&b), Some(Mark::O));
    }

    #[test]
    fn test_scan_order_breaks_ties() {
        // Both marks own a row; O's row is scanned first.
        assert_eq!(check_winner(&board("OOO/.../XXX")), Some(Mark::O));
    }
}
