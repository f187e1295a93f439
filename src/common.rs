//! Common types for the sea battle: cells, shot outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

const SIZE: i32 = BOARD_SIZE as i32;

/// Orthogonal neighbour offsets, in the order targeting strategies queue them.
const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A single in-bounds board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Returns `None` when `(x, y)` lies outside the board.
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_SIZE as usize && y < BOARD_SIZE as usize {
            Some(Cell {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if (0..SIZE).contains(&x) && (0..SIZE).contains(&y) {
            Cell::new(x as usize, y as usize)
        } else {
            None
        }
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }

    /// Every cell of the board, row by row.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell { x, y }))
    }

    /// In-bounds orthogonal neighbours: right, left, down, up.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Cell> {
        ORTHOGONAL
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Steps `n` cells along `orientation`, or `None` past the board edge.
    pub fn step(self, orientation: Orientation, n: usize) -> Option<Self> {
        let n = n as i32;
        match orientation {
            Orientation::Horizontal => self.offset(n, 0),
            Orientation::Vertical => self.offset(0, n),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Tag recorded in a board's shot log for every cell fired upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotOutcome {
    /// No ship occupies the cell.
    Miss,
    /// A ship segment was hit and the ship is still afloat.
    Hit,
    /// The shot destroyed the last intact segment of a ship.
    Sunk,
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// A ship needs at least one cell and may not list a cell twice.
    InvalidShip,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement is orthogonally or diagonally adjacent to another ship.
    ShipTouches,
    /// Random placement kept failing after every allowed restart.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidShip => write!(f, "Ship cells must be non-empty and unique"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipTouches => write!(f, "Ship placement touches another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
