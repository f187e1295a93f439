use alloc::boxed::Box;

use rand::Rng;

use crate::{
    ai::{Difficulty, Strategy},
    board::ShotLog,
    common::{Cell, ShotOutcome},
    player::{Player, PlayerError},
};

/// Scripted player driven by a targeting strategy.
pub struct AiPlayer {
    strategy: Box<dyn Strategy>,
}

impl AiPlayer {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    pub fn with_difficulty<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::new(difficulty.strategy(rng))
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, enemy_shots: &ShotLog) -> Result<Cell, PlayerError> {
        self.strategy
            .select_move(enemy_shots)
            .ok_or(PlayerError::NoMovesLeft)
    }

    fn handle_shot_result(&mut self, cell: Cell, outcome: ShotOutcome, enemy_shots: &ShotLog) {
        self.strategy.observe(cell, outcome, enemy_shots);
    }
}
