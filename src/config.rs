/// Width and height of the square board.
pub const BOARD_SIZE: u8 = 6;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths placed at the start of every match, largest first.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random anchor/orientation draws tried for a single ship before the whole
/// fleet is discarded and placement starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Upper bound on whole-fleet restarts in `Board::auto_place_ships`.
pub const MAX_PLACEMENT_RESTARTS: usize = 1000;
