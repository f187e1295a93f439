//! Ships as fixed cell runs with a growing hit set.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Orientation};
use crate::config::BOARD_SIZE;

type BB = BitBoard<u64, { BOARD_SIZE as usize }>;

/// A ship placed on the board, with hits tracked in a `BitBoard`.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Cell>,
    mask: BB,
    hits: BB,
}

impl Ship {
    /// Build a ship occupying `cells`.
    ///
    /// Cells keep the order given. Empty or duplicated cell lists are
    /// rejected with `BoardError::InvalidShip`.
    pub fn new(cells: Vec<Cell>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::InvalidShip);
        }
        let mask = BB::from_positions(cells.iter().map(|c| (c.x(), c.y())))?;
        if mask.count_ones() != cells.len() {
            return Err(BoardError::InvalidShip);
        }
        Ok(Ship {
            cells,
            mask,
            hits: BB::new(),
        })
    }

    /// Contiguous run of `length` cells starting at `anchor`, cut short at
    /// the board edge. Callers compare the returned length with `length`
    /// to reject runs that would leave the board.
    pub fn run(anchor: Cell, orientation: Orientation, length: usize) -> Vec<Cell> {
        (0..length)
            .map_while(|i| anchor.step(orientation, i))
            .collect()
    }

    /// Register a shot at `cell`. Returns `true` and records the hit if the
    /// cell belongs to this ship; otherwise nothing changes.
    pub fn is_hit(&mut self, cell: Cell) -> bool {
        self.contains(cell) && self.hits.set(cell.x(), cell.y()).is_ok()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.mask
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.mask.get(cell.x(), cell.y()).unwrap_or(false)
    }

    pub fn is_cell_hit(&self, cell: Cell) -> bool {
        self.hits.get(cell.x(), cell.y()).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ cells: {:?}, hits: {}, sunk: {} }}",
            self.cells,
            self.hits.count_ones(),
            self.is_sunk(),
        )
    }
}
