//! The shared coordination state of one round.

use rondo_core::{ActiveFlag, SeqConfig};
use std::sync::{Condvar, Mutex};

/// The only shared mutable value: the next integer to emit.
#[derive(Debug)]
pub(crate) struct Cursor {
    pub current: u64,
}

/// Shared state of a single round.
///
/// Every read or write of the cursor happens under the lock. Workers
/// suspend on the condvar while the turn is not theirs; whoever advances
/// the cursor notifies all of them.
pub struct SeqShared {
    pub(crate) config: SeqConfig,
    pub(crate) cursor: Mutex<Cursor>,
    pub(crate) turn_changed: Condvar,
    pub(crate) active: ActiveFlag,
}

impl SeqShared {
    pub(crate) fn new(config: SeqConfig) -> Self {
        Self {
            config,
            cursor: Mutex::new(Cursor { current: 0 }),
            turn_changed: Condvar::new(),
            active: ActiveFlag::default(),
        }
    }

    pub fn config(&self) -> &SeqConfig {
        &self.config
    }

    /// Wakes every blocked worker.
    ///
    /// A single-target wake is not enough: the worker whose turn comes
    /// next is not in general the most recently blocked one.
    pub(crate) fn broadcast(&self) {
        self.turn_changed.notify_all();
    }
}
