//! Cooperative cancellation of a running round.

use crate::state::SeqShared;
use std::sync::Arc;

/// Clears the shared flag and wakes every blocked worker.
///
/// Stopping is idempotent; stopping a finished round is a no-op. Workers
/// return early and the collected sequence is the prefix emitted so far.
///
/// Must not be called from inside a synchronous observer callback: the
/// stopper takes the coordination lock, which the emitting worker is
/// holding during the callback.
#[derive(Clone)]
pub struct SeqStopper {
    pub(crate) shared: Arc<SeqShared>,
}

impl SeqStopper {
    pub fn stop(&self) {
        self.shared.active.deactivate();
        // Take the lock so that no worker is between its condition check
        // and its wait when the notification fires.
        let _guard = self.shared.cursor.lock();
        self.shared.broadcast();
    }
}
