// Scripted targeting for bot players.
//
// Three tiers share two building blocks: a shuffled pool of untried cells
// and a queue of follow-up candidates queued around hits.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::ShotLog;
use crate::common::{Cell, ShotOutcome};

/// Every board cell in a fixed draw order, popped without replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntriedPool {
    // Next cell to draw sits at the end.
    cells: Vec<Cell>,
}

impl UntriedPool {
    /// All board cells in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells: Vec<Cell> = Cell::all().collect();
        cells.shuffle(rng);
        Self { cells }
    }

    /// A pool that yields `order` front to back.
    pub fn from_order<I: IntoIterator<Item = Cell>>(order: I) -> Self {
        let mut cells: Vec<Cell> = order.into_iter().collect();
        cells.reverse();
        Self { cells }
    }

    /// Draw the next cell not yet present in `enemy_shots`.
    pub fn draw(&mut self, enemy_shots: &ShotLog) -> Option<Cell> {
        while let Some(cell) = self.cells.pop() {
            if !enemy_shots.contains(cell) {
                return Some(cell);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Order in which a `CandidateQueue` hands out follow-up cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Most recently queued first.
    Lifo,
    /// Oldest first.
    Fifo,
}

/// Follow-up cells queued around hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQueue {
    discipline: Discipline,
    cells: VecDeque<Cell>,
}

impl CandidateQueue {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            cells: VecDeque::new(),
        }
    }

    /// Queue the in-bounds orthogonal neighbours of `cell` that have not
    /// been fired upon yet.
    pub fn push_neighbors(&mut self, cell: Cell, enemy_shots: &ShotLog) {
        self.cells.extend(
            cell.orthogonal_neighbors()
                .filter(|n| !enemy_shots.contains(*n)),
        );
    }

    /// Take the next candidate not yet present in `enemy_shots`.
    ///
    /// A cell can be queued twice (it borders two hits) or fired upon from
    /// the pool after being queued; such stale entries are dropped here.
    pub fn take_next(&mut self, enemy_shots: &ShotLog) -> Option<Cell> {
        loop {
            let cell = match self.discipline {
                Discipline::Lifo => self.cells.pop_back(),
                Discipline::Fifo => self.cells.pop_front(),
            }?;
            if !enemy_shots.contains(cell) {
                return Some(cell);
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Queued cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

/// Move selection for a scripted opponent.
pub trait Strategy {
    /// Pick the next cell to fire at. `enemy_shots` is the opponent board's
    /// shot log; returned cells are never already present in it.
    fn select_move(&mut self, enemy_shots: &ShotLog) -> Option<Cell>;

    /// Update internal state after the shot at `cell` resolved to `outcome`.
    /// `enemy_shots` already contains that shot.
    fn observe(&mut self, cell: Cell, outcome: ShotOutcome, enemy_shots: &ShotLog);
}

/// Fires at untried cells in random order and ignores outcomes.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    pool: UntriedPool,
}

impl RandomStrategy {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_pool(UntriedPool::shuffled(rng))
    }

    pub fn with_pool(pool: UntriedPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &UntriedPool {
        &self.pool
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, enemy_shots: &ShotLog) -> Option<Cell> {
        self.pool.draw(enemy_shots)
    }

    fn observe(&mut self, _cell: Cell, _outcome: ShotOutcome, _enemy_shots: &ShotLog) {}
}

/// Random search that switches to probing neighbours after a hit.
///
/// Neighbours are tried most-recent first. The candidate stack survives a
/// sinking, so cells around a destroyed ship may still be probed later.
#[derive(Debug, Clone)]
pub struct HuntTargetStrategy {
    pool: UntriedPool,
    candidates: CandidateQueue,
}

impl HuntTargetStrategy {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_pool(UntriedPool::shuffled(rng))
    }

    pub fn with_pool(pool: UntriedPool) -> Self {
        Self {
            pool,
            candidates: CandidateQueue::new(Discipline::Lifo),
        }
    }

    pub fn candidates(&self) -> &CandidateQueue {
        &self.candidates
    }
}

impl Strategy for HuntTargetStrategy {
    fn select_move(&mut self, enemy_shots: &ShotLog) -> Option<Cell> {
        self.candidates
            .take_next(enemy_shots)
            .or_else(|| self.pool.draw(enemy_shots))
    }

    fn observe(&mut self, cell: Cell, outcome: ShotOutcome, enemy_shots: &ShotLog) {
        if outcome.is_hit() {
            self.candidates.push_neighbors(cell, enemy_shots);
        }
    }
}

/// Hunt-and-target that follows a hit streak oldest candidate first and
/// drops all candidates once a ship goes down.
#[derive(Debug, Clone)]
pub struct DirectionalHuntStrategy {
    pool: UntriedPool,
    candidates: CandidateQueue,
    last_hit: Option<Cell>,
}

impl DirectionalHuntStrategy {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_pool(UntriedPool::shuffled(rng))
    }

    pub fn with_pool(pool: UntriedPool) -> Self {
        Self {
            pool,
            candidates: CandidateQueue::new(Discipline::Fifo),
            last_hit: None,
        }
    }

    pub fn candidates(&self) -> &CandidateQueue {
        &self.candidates
    }

    /// Most recent shot that hit without sinking.
    pub fn last_hit(&self) -> Option<Cell> {
        self.last_hit
    }
}

impl Strategy for DirectionalHuntStrategy {
    fn select_move(&mut self, enemy_shots: &ShotLog) -> Option<Cell> {
        self.candidates
            .take_next(enemy_shots)
            .or_else(|| self.pool.draw(enemy_shots))
    }

    fn observe(&mut self, cell: Cell, outcome: ShotOutcome, enemy_shots: &ShotLog) {
        match outcome {
            ShotOutcome::Hit => {
                self.last_hit = Some(cell);
                self.candidates.push_neighbors(cell, enemy_shots);
            }
            ShotOutcome::Sunk => self.candidates.clear(),
            ShotOutcome::Miss => {}
        }
    }
}

/// Bot tiers, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tier for a menu choice of 1, 2 or 3.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Fresh strategy for this tier with its own shuffled pool.
    pub fn strategy<R: Rng + ?Sized>(self, rng: &mut R) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new(rng)),
            Difficulty::Medium => Box::new(HuntTargetStrategy::new(rng)),
            Difficulty::Hard => Box::new(DirectionalHuntStrategy::new(rng)),
        }
    }
}
