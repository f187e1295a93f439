use alloc::string::String;

/// Final record of a finished match, handed to a result sink.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub winner: String,
    /// Total shots fired by both sides, the winning shot included.
    pub moves: usize,
}

impl MatchResult {
    pub fn new(winner: impl Into<String>, moves: usize) -> Self {
        Self {
            winner: winner.into(),
            moves,
        }
    }
}
