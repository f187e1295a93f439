use core::fmt;

use crate::{
    board::{Board, ShotLog},
    common::{Cell, ShotOutcome},
};

/// Why a player could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// Every cell has already been fired upon.
    NoMovesLeft,
    /// The move input source reached end of input.
    InputClosed,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::NoMovesLeft => write!(f, "No untried cells left to fire at"),
            PlayerError::InputClosed => write!(f, "Move input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target given the shots already taken against the
    /// opponent's board.
    fn select_target(&mut self, enemy_shots: &ShotLog) -> Result<Cell, PlayerError>;

    /// Inform the player of the result of its last shot. `enemy_shots`
    /// already includes it.
    fn handle_shot_result(&mut self, _cell: Cell, _outcome: ShotOutcome, _enemy_shots: &ShotLog) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _cell: Cell, _outcome: ShotOutcome) {}

    /// Select a target, fire exactly once at `target`, and report the
    /// outcome back to the player.
    fn fire(&mut self, target: &mut Board) -> Result<(Cell, ShotOutcome), PlayerError> {
        let cell = self.select_target(target.shot_log())?;
        let outcome = target.receive_shot(cell);
        self.handle_shot_result(cell, outcome, target.shot_log());
        Ok((cell, outcome))
    }
}
