//! Scoped hypothetical placements.
//!
//! A [`Probe`] writes a mark into an empty cell and clears it again when
//! dropped, so search code can explore a position and return early from
//! any branch without leaving marks behind.

use super::{Board, Cell, Coord, Mark};
use std::ops::{Deref, DerefMut};

/// A mark placed for exploration, removed on drop unless committed.
#[derive(Debug)]
pub struct Probe<'a> {
    board: &'a mut Board,
    index: usize,
    committed: bool,
}

impl<'a> Probe<'a> {
    /// Places `mark` at `coord`.
    ///
    /// Returns `None` if the cell is outside the grid or already occupied.
    pub fn place(board: &'a mut Board, coord: Coord, mark: Mark) -> Option<Self> {
        let index = board.index(coord)?;
        if board.cells()[index] != Cell::Empty {
            return None;
        }
        board.set_at(index, Cell::Occupied(mark));
        Some(Self {
            board,
            index,
            committed: false,
        })
    }

    /// Keeps the placement on the board.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.set_at(self.index, Cell::Empty);
        }
    }
}
