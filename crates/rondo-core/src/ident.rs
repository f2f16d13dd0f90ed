//! Worker identity.

use derive_more::{Display, From, Into};

/// An index of a worker in a round, in `[0, workers)`.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, From, Into, Display)]
#[display("w{_0}")]
pub struct WorkerId(usize);

impl WorkerId {
    /// The plain index of the worker.
    pub fn index(&self) -> usize {
        self.0
    }
}
