//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Actor, Board, Cell, Difficulty, Match, MatchResult, MatchState, Player, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, JsonLinesSink, MemorySink, ResultSink};
