//! Persistence of finished matches.

#![cfg(feature = "std")]

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::vec::Vec;

use anyhow::Context;
use log::info;

use crate::domain::MatchResult;

/// Destination for finished match results.
pub trait ResultSink {
    fn record(&mut self, result: &MatchResult) -> anyhow::Result<()>;
}

/// Keeps results in memory, mostly for tests and the simulator.
#[derive(Debug, Default)]
pub struct MemorySink {
    results: Vec<MatchResult>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }
}

impl ResultSink for MemorySink {
    fn record(&mut self, result: &MatchResult) -> anyhow::Result<()> {
        self.results.push(result.clone());
        Ok(())
    }
}

/// Appends one JSON object per line to a file.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every result stored so far. A missing file holds none.
    pub fn load(&self) -> anyhow::Result<Vec<MatchResult>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        let mut results = Vec::new();
        for (n, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let result: MatchResult = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}: malformed result", self.path.display(), n + 1))?;
            results.push(result);
        }
        Ok(results)
    }
}

impl ResultSink for JsonLinesSink {
    fn record(&mut self, result: &MatchResult) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        let line = serde_json::to_string(result)?;
        writeln!(file, "{}", line)?;
        info!(
            "recorded win for {} in {} moves to {}",
            result.winner,
            result.moves,
            self.path.display()
        );
        Ok(())
    }
}
