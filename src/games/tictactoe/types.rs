//! Core domain types for N×N tic-tac-toe.

use super::action::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// Supported board dimensions.
///
/// The side length fixes the run length required to win: three in a row
/// on 3×3, four on 5×5 and five on 7×7.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// 3×3, three in a row wins.
    #[default]
    Three,
    /// 5×5, four in a row wins.
    Five,
    /// 7×7, five in a row wins.
    Seven,
}

impl BoardSize {
    /// Side length of the grid.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 5,
            BoardSize::Seven => 7,
        }
    }

    /// Number of consecutive marks needed to win.
    pub fn win_run(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 4,
            BoardSize::Seven => 5,
        }
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }

    /// Next size in the 3 → 5 → 7 → 3 cycle.
    pub fn cycle(self) -> Self {
        match self {
            BoardSize::Three => BoardSize::Five,
            BoardSize::Five => BoardSize::Seven,
            BoardSize::Seven => BoardSize::Three,
        }
    }

    /// Every coordinate of a board this size, in row-major order.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let side = self.side();
        (0..side * side).map(move |index| Coord::new(index / side, index % side))
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(self, coord: Coord) -> bool {
        coord.row < self.side() && coord.col < self.side()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            5 => Ok(BoardSize::Five),
            7 => Ok(BoardSize::Seven),
            other => Err(BoardError::UnsupportedSize(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Zero-based cell coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square N×N board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        if repr.cells.len() != repr.size.cell_count() {
            return Err(BoardError::Parse(format!(
                "{} board needs {} cells, got {}",
                repr.size,
                repr.size.cell_count(),
                repr.cells.len()
            )));
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell at `coord`, or `None` if it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|index| self.cells[index])
    }

    /// Whether the cell at `coord` exists and is empty.
    pub fn is_vacant(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Empty cells in row-major order.
    pub fn vacancies(&self) -> Vec<Coord> {
        self.size
            .coords()
            .filter(|coord| self.is_vacant(*coord))
            .collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Places `mark` at `coord` if the cell is empty.
    ///
    /// Returns `Ok(false)` without touching the board when the cell is
    /// already occupied.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `coord` is outside the grid.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn place_mark(&mut self, coord: Coord, mark: Mark) -> Result<bool, BoardError> {
        let index = self.index(coord).ok_or(BoardError::OutOfBounds {
            row: coord.row,
            col: coord.col,
            side: self.size.side(),
        })?;
        if self.cells[index] != Cell::Empty {
            return Ok(false);
        }
        self.cells[index] = Cell::Occupied(mark);
        Ok(true)
    }

    pub(crate) fn index(&self, coord: Coord) -> Option<usize> {
        self.size
            .contains(coord)
            .then(|| coord.row * self.size.side() + coord.col)
    }

    pub(crate) fn set_at(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.cells.chunks(self.size.side()).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = line.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses rows separated by `/` or newlines.
    ///
    /// `X` and `O` (any case) are marks; `.`, `_` and `-` are empty cells.
    /// Whitespace inside a row is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .split(['/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = BoardSize::try_from(rows.len())?;
        let mut board = Board::new(size);
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size.side() {
                return Err(BoardError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    chars.len(),
                    size.side()
                )));
            }
            for (col, c) in chars.iter().enumerate() {
                let cell = match c.to_ascii_uppercase() {
                    'X' => Cell::Occupied(Mark::X),
                    'O' => Cell::Occupied(Mark::O),
                    '.' | '_' | '-' => Cell::Empty,
                    other => {
                        return Err(BoardError::Parse(format!(
                            "unexpected character {:?} at ({}, {})",
                            other, row, col
                        )));
                    }
                };
                board.cells[row * size.side() + col] = cell;
            }
        }
        Ok(board)
    }
}
