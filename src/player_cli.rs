#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::{
    board::ShotLog,
    common::{Cell, ShotOutcome},
    player::{Player, PlayerError},
    ui,
};

/// Reasons a typed move is rejected before it reaches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not two whitespace-separated integers.
    Malformed,
    OutOfBounds,
    /// The cell was fired upon earlier in this match.
    AlreadyFired,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed => write!(f, "Invalid input."),
            InputError::OutOfBounds => write!(f, "Coordinates are off the board."),
            InputError::AlreadyFired => {
                write!(f, "You have already fired at this cell. Try again.")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse an `"x y"` line into a board cell.
pub fn parse_move(input: &str) -> Result<Cell, InputError> {
    let mut parts = input.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed);
    };
    let x: i64 = x.parse().map_err(|_| InputError::Malformed)?;
    let y: i64 = y.parse().map_err(|_| InputError::Malformed)?;
    let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
        return Err(InputError::OutOfBounds);
    };
    Cell::new(x, y).ok_or(InputError::OutOfBounds)
}

/// Message printed after a shot resolves.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Hit!",
        ShotOutcome::Sunk => "Ship sunk!",
    }
}

/// Human player reading moves from a text source.
pub struct CliPlayer<I, O> {
    name: String,
    input: I,
    output: O,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from standard input and writing to standard output.
    ///
    /// Reads go through the process-wide stdin buffer, so lines left over
    /// when the player is dropped are still there for the next reader. The
    /// lock is held until then.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    fn read_move(&mut self, enemy_shots: &ShotLog) -> Result<Cell, PlayerError> {
        loop {
            let _ = write!(self.output, "{}, your move (format 'x y'): ", self.name);
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(PlayerError::InputClosed),
                Ok(_) => {}
            }
            let checked = parse_move(&line).and_then(|cell| {
                if enemy_shots.contains(cell) {
                    Err(InputError::AlreadyFired)
                } else {
                    Ok(cell)
                }
            });
            match checked {
                Ok(cell) => return Ok(cell),
                Err(e) => {
                    let _ = writeln!(self.output, "{}", e);
                }
            }
        }
    }
}

impl<I, O> Player for CliPlayer<I, O>
where
    I: BufRead,
    O: Write,
{
    fn select_target(&mut self, enemy_shots: &ShotLog) -> Result<Cell, PlayerError> {
        let _ = writeln!(
            self.output,
            "\nEnemy waters:\n{}{}",
            ui::render_shot_log(enemy_shots),
            ui::legend(false)
        );
        self.read_move(enemy_shots)
    }

    fn handle_shot_result(&mut self, _cell: Cell, outcome: ShotOutcome, _enemy_shots: &ShotLog) {
        let _ = writeln!(self.output, "{}", outcome_message(outcome));
    }

    fn handle_opponent_shot(&mut self, cell: Cell, outcome: ShotOutcome) {
        let _ = writeln!(
            self.output,
            "Opponent fired at {}: {}",
            cell,
            outcome_message(outcome)
        );
    }
}
