//! Board state: ship placement under adjacency exclusion and shot bookkeeping.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Orientation, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, MAX_PLACEMENT_RESTARTS};
use crate::ship::Ship;

type BB = BitBoard<u64, { BOARD_SIZE as usize }>;

/// What an observer may see at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Not fired upon (and no ship shown).
    Empty,
    Miss,
    Hit,
    Sunk,
    /// Unfired ship segment; only produced when ships are revealed.
    Ship,
}

impl From<ShotOutcome> for CellView {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Miss => CellView::Miss,
            ShotOutcome::Hit => CellView::Hit,
            ShotOutcome::Sunk => CellView::Sunk,
        }
    }
}

/// Every shot taken against a board, keyed by cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotLog {
    entries: BTreeMap<Cell, ShotOutcome>,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome for `cell`, replacing any earlier tag.
    pub fn record(&mut self, cell: Cell, outcome: ShotOutcome) {
        self.entries.insert(cell, outcome);
    }

    pub fn get(&self, cell: Cell) -> Option<ShotOutcome> {
        self.entries.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, ShotOutcome)> + '_ {
        self.entries.iter().map(|(c, o)| (*c, *o))
    }

    /// Fog-of-war projection: what the shooter knows about `cell`.
    pub fn view(&self, cell: Cell) -> CellView {
        self.get(cell).map_or(CellView::Empty, CellView::from)
    }
}

/// A player's own waters: the fleet plus the opponent's shots against it.
#[derive(Clone, Default)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: BB,
    shots: ShotLog,
}

impl Board {
    /// Create an empty board (no ships placed, no shots taken).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn shot_log(&self) -> &ShotLog {
        &self.shots
    }

    fn check_placement(&self, cells: &[Cell]) -> Result<(), BoardError> {
        let mask = BB::from_positions(cells.iter().map(|c| (c.x(), c.y())))?;
        if mask.intersects(&self.ship_map) {
            return Err(BoardError::ShipOverlaps);
        }
        if mask.intersects(&self.ship_map.dilate()) {
            return Err(BoardError::ShipTouches);
        }
        Ok(())
    }

    /// Returns `true` if no cell of `cells`, nor any of its eight
    /// neighbours, is occupied by a ship already on the board.
    pub fn can_place(&self, cells: &[Cell]) -> bool {
        self.check_placement(cells).is_ok()
    }

    /// Place a ship, enforcing the no-overlap and no-touch rules.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.check_placement(ship.cells())?;
        self.ship_map |= ship.mask();
        self.ships.push(ship);
        Ok(())
    }

    fn clear_ships(&mut self) {
        self.ships.clear();
        self.ship_map = BB::new();
    }

    /// Draws up to `MAX_PLACEMENT_ATTEMPTS` random anchors and orientations
    /// for a ship of `length` and returns the first legal one.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, BoardError> {
        let size = BOARD_SIZE as usize;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let Some(anchor) = Cell::new(rng.random_range(0..size), rng.random_range(0..size))
            else {
                continue;
            };
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let cells = Ship::run(anchor, orientation, length);
            if cells.len() == length && self.can_place(&cells) {
                return Ship::new(cells);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the standard fleet at random.
    ///
    /// When a ship cannot be placed within its attempt budget, every ship
    /// placed so far is discarded and the fleet starts over. After
    /// `MAX_PLACEMENT_RESTARTS` restarts the board is left empty and
    /// `BoardError::UnableToPlaceShip` is returned.
    pub fn auto_place_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        'restart: for restart in 0..=MAX_PLACEMENT_RESTARTS {
            self.clear_ships();
            for &length in FLEET.iter() {
                match self.random_placement(rng, length) {
                    Ok(ship) => self.place(ship)?,
                    Err(BoardError::UnableToPlaceShip) => {
                        debug!(
                            "no room for a ship of length {}, restarting fleet placement ({})",
                            length,
                            restart + 1
                        );
                        continue 'restart;
                    }
                    Err(e) => return Err(e),
                }
            }
            return Ok(());
        }
        self.clear_ships();
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve a shot at `cell` and log its outcome.
    ///
    /// Firing at a cell twice re-logs the same tag; ship state is unchanged
    /// the second time.
    pub fn receive_shot(&mut self, cell: Cell) -> ShotOutcome {
        let sunk = self
            .ships
            .iter_mut()
            .find_map(|ship| ship.is_hit(cell).then(|| ship.is_sunk()));
        let outcome = match sunk {
            Some(true) => ShotOutcome::Sunk,
            Some(false) => ShotOutcome::Hit,
            None => ShotOutcome::Miss,
        };
        self.shots.record(cell, outcome);
        outcome
    }

    /// Returns `true` when all ships are sunk (vacuously for an empty board).
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Projection of `cell` for display. Unfired ship segments are shown
    /// only when `reveal_ships` is set.
    pub fn view(&self, cell: Cell, reveal_ships: bool) -> CellView {
        let occupied = self.ship_map.get(cell.x(), cell.y()).unwrap_or(false);
        match self.shots.view(cell) {
            CellView::Empty if reveal_ships && occupied => CellView::Ship,
            seen => seen,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  shots: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.shots, self.ships
        )
    }
}
