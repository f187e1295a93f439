#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{Board, CellView, ShotLog},
    common::Cell,
    config::BOARD_SIZE,
};

/// Display character for a cell.
pub fn cell_symbol(view: CellView) -> char {
    match view {
        CellView::Empty => '.',
        CellView::Miss => 'o',
        CellView::Hit => 'X',
        CellView::Sunk => '#',
        CellView::Ship => '■',
    }
}

fn render_grid(view: impl Fn(Cell) -> CellView) -> String {
    let size = BOARD_SIZE as usize;
    let mut out = String::from(" ");
    for x in 0..size {
        let _ = write!(out, " {}", x);
    }
    out.push('\n');
    for y in 0..size {
        let _ = write!(out, "{}", y);
        for cell in (0..size).filter_map(|x| Cell::new(x, y)) {
            let _ = write!(out, " {}", cell_symbol(view(cell)));
        }
        out.push('\n');
    }
    out
}

/// Text grid of a board; unfired ship segments appear only with `reveal_ships`.
pub fn render_board(board: &Board, reveal_ships: bool) -> String {
    render_grid(|cell| board.view(cell, reveal_ships))
}

/// Text grid of what the shooter knows from its shots alone.
pub fn render_shot_log(shots: &ShotLog) -> String {
    render_grid(|cell| shots.view(cell))
}

/// Legend line matching the symbols above.
pub fn legend(reveal_ships: bool) -> &'static str {
    if reveal_ships {
        "Legend: ■=Ship  X=Hit  #=Sunk  o=Miss  .=Water"
    } else {
        "Legend: X=Hit  #=Sunk  o=Miss  .=Unknown"
    }
}
