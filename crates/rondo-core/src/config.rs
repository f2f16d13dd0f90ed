//! Validated parameters of a round.

use crate::ident::WorkerId;
use thiserror::Error;

/// A rejected construction attempt.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeqConfigError {
    /// A round needs at least one worker to take a turn.
    #[error("A round of {0} workers can't take turns")]
    NoWorkers(usize),
}

/// Parameters of a single round, immutable after validation.
///
/// Shared verbatim by both coordination strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqConfig {
    workers: usize,
    total: u64,
}

impl SeqConfig {
    /// Validates the parameters. No state is created on rejection.
    pub fn new(workers: usize, total: u64) -> Result<Self, SeqConfigError> {
        if workers == 0 {
            return Err(SeqConfigError::NoWorkers(workers));
        }
        Ok(Self { workers, total })
    }

    /// How many workers participate in the round.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The exclusive upper bound of emitted values.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The worker that owns the turn for `value`.
    pub fn owner(&self, value: u64) -> WorkerId {
        let index = (value % self.workers as u64) as usize;
        WorkerId::from(index)
    }
}
