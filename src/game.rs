//! Turn loop between two actors.

use alloc::boxed::Box;
use alloc::string::String;

use log::{debug, info};

use crate::{
    board::Board,
    common::{Cell, ShotOutcome},
    domain::MatchResult,
    player::{Player, PlayerError},
};

/// One side of a match: a named player and its own fleet.
pub struct Actor {
    name: String,
    board: Board,
    player: Box<dyn Player>,
}

impl Actor {
    pub fn new(name: impl Into<String>, board: Board, player: Box<dyn Player>) -> Self {
        Self {
            name: name.into(),
            board,
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// This actor's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Current status of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState {
    Ongoing,
    Finished(MatchResult),
}

/// A single shot taken during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    /// Index of the actor who fired, 0 or 1.
    pub shooter: usize,
    pub cell: Cell,
    pub outcome: ShotOutcome,
}

/// Alternates turns between two actors until one fleet is destroyed.
pub struct Match {
    actors: [Actor; 2],
    active: usize,
    ticks: usize,
    state: MatchState,
    last_shot: Option<Shot>,
}

impl Match {
    /// New match with `first` to move.
    pub fn new(first: Actor, second: Actor) -> Self {
        Self {
            actors: [first, second],
            active: 0,
            ticks: 0,
            state: MatchState::Ongoing,
            last_shot: None,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn actor(&self, index: usize) -> &Actor {
        &self.actors[index]
    }

    /// Index of the actor whose turn it is.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Completed ticks so far.
    pub fn moves(&self) -> usize {
        self.ticks
    }

    pub fn last_shot(&self) -> Option<Shot> {
        self.last_shot
    }

    /// Let the active actor fire one shot at the opponent.
    ///
    /// A finished match is returned unchanged. A player error leaves the
    /// turn with the same actor and the tick uncounted.
    pub fn tick(&mut self) -> Result<&MatchState, PlayerError> {
        if let MatchState::Finished(_) = self.state {
            return Ok(&self.state);
        }
        let [first, second] = &mut self.actors;
        let (attacker, defender) = if self.active == 0 {
            (first, second)
        } else {
            (second, first)
        };

        let (cell, outcome) = attacker.player.fire(&mut defender.board)?;
        defender.player.handle_opponent_shot(cell, outcome);
        self.ticks += 1;
        self.last_shot = Some(Shot {
            shooter: self.active,
            cell,
            outcome,
        });
        debug!("{} fires at {} -> {:?}", attacker.name, cell, outcome);

        if defender.board.all_ships_sunk() {
            info!("{} wins after {} moves", attacker.name, self.ticks);
            self.state = MatchState::Finished(MatchResult::new(attacker.name.clone(), self.ticks));
        } else {
            self.active = 1 - self.active;
        }
        Ok(&self.state)
    }

    /// Tick until the match is finished.
    pub fn run(&mut self) -> Result<MatchResult, PlayerError> {
        loop {
            if let MatchState::Finished(result) = self.tick()? {
                return Ok(result.clone());
            }
        }
    }
}
