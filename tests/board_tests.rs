use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use seabattle::{Board, BoardError, Cell, CellView, Ship, ShotOutcome, FLEET, TOTAL_SHIP_CELLS};

fn cell(x: usize, y: usize) -> Cell {
    Cell::new(x, y).unwrap()
}

fn ship(cells: &[(usize, usize)]) -> Ship {
    Ship::new(cells.iter().map(|&(x, y)| cell(x, y)).collect()).unwrap()
}

#[test]
fn test_place_rejects_overlap_and_touching() {
    let mut board = Board::new();
    board.place(ship(&[(1, 1), (2, 1)])).unwrap();

    assert_eq!(
        board.place(ship(&[(2, 1), (2, 2)])).unwrap_err(),
        BoardError::ShipOverlaps
    );
    // orthogonal neighbour
    assert_eq!(
        board.place(ship(&[(3, 1)])).unwrap_err(),
        BoardError::ShipTouches
    );
    // diagonal neighbour
    assert_eq!(
        board.place(ship(&[(3, 2), (3, 3)])).unwrap_err(),
        BoardError::ShipTouches
    );
    assert!(!board.can_place(&[cell(0, 0)]));
    assert!(board.can_place(&[cell(4, 1)]));

    board.place(ship(&[(4, 1)])).unwrap();
    assert_eq!(board.ships().len(), 2);
    assert_eq!(board.ship_map().count_ones(), 3);
}

#[test]
fn test_receive_shot_logs_outcomes() {
    let mut board = Board::new();
    board.place(ship(&[(1, 1), (2, 1)])).unwrap();
    board.place(ship(&[(4, 4)])).unwrap();

    assert_eq!(board.receive_shot(cell(0, 0)), ShotOutcome::Miss);
    assert_eq!(board.receive_shot(cell(1, 1)), ShotOutcome::Hit);
    assert!(!board.all_ships_sunk());
    assert_eq!(board.receive_shot(cell(2, 1)), ShotOutcome::Sunk);
    assert_eq!(board.receive_shot(cell(4, 4)), ShotOutcome::Sunk);
    assert!(board.all_ships_sunk());

    let log = board.shot_log();
    assert_eq!(log.len(), 4);
    assert_eq!(log.get(cell(0, 0)), Some(ShotOutcome::Miss));
    assert_eq!(log.get(cell(1, 1)), Some(ShotOutcome::Hit));
    assert_eq!(log.get(cell(2, 1)), Some(ShotOutcome::Sunk));
    assert_eq!(log.get(cell(3, 3)), None);
}

#[test]
fn test_refire_does_not_change_ship_state() {
    let mut board = Board::new();
    board.place(ship(&[(1, 1), (2, 1)])).unwrap();

    assert_eq!(board.receive_shot(cell(1, 1)), ShotOutcome::Hit);
    let ships_before = board.ships().to_vec();
    assert_eq!(board.receive_shot(cell(1, 1)), ShotOutcome::Hit);
    assert_eq!(board.ships(), &ships_before[..]);
    assert_eq!(board.shot_log().len(), 1);
    assert!(!board.all_ships_sunk());

    board.receive_shot(cell(2, 1));
    // once sunk, every re-fire reports the sinking again
    assert_eq!(board.receive_shot(cell(1, 1)), ShotOutcome::Sunk);
    assert_eq!(board.shot_log().get(cell(1, 1)), Some(ShotOutcome::Sunk));
}

#[test]
fn test_empty_board_is_all_sunk() {
    let board = Board::new();
    assert!(board.all_ships_sunk());
}

#[test]
fn test_all_sunk_needs_every_ship() {
    let mut board = Board::new();
    board.place(ship(&[(0, 0)])).unwrap();
    board.place(ship(&[(5, 5)])).unwrap();
    board.receive_shot(cell(0, 0));
    assert!(board.ships()[0].is_sunk());
    assert!(!board.all_ships_sunk());
    board.receive_shot(cell(5, 5));
    assert!(board.all_ships_sunk());
}

#[test]
fn test_view_reveals_ships_on_request() {
    let mut board = Board::new();
    board.place(ship(&[(1, 1), (2, 1)])).unwrap();
    board.receive_shot(cell(1, 1));
    board.receive_shot(cell(0, 3));

    assert_eq!(board.view(cell(1, 1), false), CellView::Hit);
    assert_eq!(board.view(cell(0, 3), false), CellView::Miss);
    assert_eq!(board.view(cell(2, 1), false), CellView::Empty);
    assert_eq!(board.view(cell(2, 1), true), CellView::Ship);
    assert_eq!(board.view(cell(5, 5), true), CellView::Empty);

    board.receive_shot(cell(2, 1));
    assert_eq!(board.view(cell(2, 1), true), CellView::Sunk);
    assert_eq!(board.shot_log().view(cell(2, 1)), CellView::Sunk);
}

#[test]
fn test_auto_place_full_fleet() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.auto_place_ships(&mut rng).unwrap();

    let mut sizes: Vec<usize> = board.ships().iter().map(|s| s.len()).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(sizes, FLEET.to_vec());
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    assert!(board.shot_log().is_empty());
}

#[test]
fn test_auto_place_replaces_previous_fleet() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    board.auto_place_ships(&mut rng).unwrap();
    board.auto_place_ships(&mut rng).unwrap();
    assert_eq!(board.ships().len(), FLEET.len());
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_auto_place_reproducible_with_seed() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.auto_place_ships(&mut SmallRng::seed_from_u64(12345)).unwrap();
    b.auto_place_ships(&mut SmallRng::seed_from_u64(12345)).unwrap();
    assert_eq!(a.ships(), b.ships());
}

#[test]
fn test_random_placement_gives_up_on_full_board() {
    let mut board = Board::new();
    // single cells every other column and row leave no room for a length-2 run
    for y in (0..6).step_by(2) {
        for x in (0..6).step_by(2) {
            board.place(ship(&[(x, y)])).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.random_placement(&mut rng, 2).unwrap_err(),
        BoardError::UnableToPlaceShip
    );
}

/// Always yields zero: every anchor is (0, 0) and every ship vertical.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

#[test]
fn test_auto_place_gives_up_after_restarts_and_clears_fleet() {
    let mut board = Board::new();
    // the first ship always lands at (0, 0); the second never fits
    assert_eq!(
        board.auto_place_ships(&mut ZeroRng).unwrap_err(),
        BoardError::UnableToPlaceShip
    );
    assert!(board.ships().is_empty());
    assert_eq!(board.ship_map().count_ones(), 0);
}

#[test]
fn test_auto_place_discards_previous_fleet() {
    let mut board = Board::new();
    board.place(ship(&[(5, 5)])).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);
    board.auto_place_ships(&mut rng).unwrap();
    assert_eq!(board.ships().len(), FLEET.len());
    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
}
