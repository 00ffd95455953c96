//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use gridlock::{BoardSize, Coord};

/// Moves the cursor with arrow keys or `hjkl`, stopping at the board edge.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: BoardSize) -> Coord {
    let last = size.side() - 1;
    match key {
        KeyCode::Left | KeyCode::Char('h') => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Coord::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up | KeyCode::Char('k') => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down | KeyCode::Char('j') => Coord::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}

/// Pulls a cursor left over from a larger board back inside `size`.
pub fn clamp_cursor(cursor: Coord, size: BoardSize) -> Coord {
    let last = size.side() - 1;
    Coord::new(cursor.row.min(last), cursor.col.min(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_one_cell() {
        let center = Coord::new(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Left, BoardSize::Three), Coord::new(1, 0));
        assert_eq!(move_cursor(center, KeyCode::Right, BoardSize::Three), Coord::new(1, 2));
        assert_eq!(move_cursor(center, KeyCode::Char('k'), BoardSize::Three), Coord::new(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Char('j'), BoardSize::Three), Coord::new(2, 1));
    }

    #[test]
    fn test_edges_stop_cursor() {
        let corner = Coord::new(0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Up, BoardSize::Five), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left, BoardSize::Five), corner);
        let far = Coord::new(4, 4);
        assert_eq!(move_cursor(far, KeyCode::Down, BoardSize::Five), far);
    }

    #[test]
    fn test_clamp_after_shrinking() {
        assert_eq!(clamp_cursor(Coord::new(6, 5), BoardSize::Three), Coord::new(2, 2));
    }
}
