//! Cooperative cancellation of a running ring.

use rondo_core::ActiveFlag;

/// Clears the shared flag; the baton's next lap unwinds the ring.
///
/// Lock-free, safe to call from anywhere, including observer callbacks.
/// Stopping is idempotent; stopping a finished ring is a no-op.
#[derive(Debug, Clone)]
pub struct RingStopper {
    pub(crate) active: ActiveFlag,
}

impl RingStopper {
    pub fn stop(&self) {
        self.active.deactivate();
    }
}
