//! The routine executed by every worker of a round.

use crate::state::SeqShared;
use rondo_core::WorkerId;
use rondo_emit::kit::{Emission, Emit, EmitHandle};
use std::sync::Arc;

pub(crate) struct Worker {
    id: WorkerId,
    shared: Arc<SeqShared>,
    emitter: EmitHandle<Emission>,
}

impl Worker {
    pub(crate) fn new(shared: Arc<SeqShared>, id: WorkerId, emitter: EmitHandle<Emission>) -> Self {
        Self {
            id,
            shared,
            emitter,
        }
    }

    /// Runs until the cursor reaches the total or the round is stopped.
    pub(crate) fn routine(&self) {
        let total = self.shared.config.total();
        log::debug!("Worker {} started", self.id);
        let mut cursor = match self.shared.cursor.lock() {
            Ok(guard) => guard,
            Err(_) => {
                log::error!("Worker {}: the shared cursor is poisoned", self.id);
                return;
            }
        };
        while self.shared.active.is_active() && cursor.current < total {
            if self.shared.config.owner(cursor.current) != self.id {
                // Not our turn. Wake-ups can be spurious, the conditions
                // are re-checked on every pass.
                cursor = match self.shared.turn_changed.wait(cursor) {
                    Ok(guard) => guard,
                    Err(_) => {
                        log::error!("Worker {}: the shared cursor is poisoned", self.id);
                        return;
                    }
                };
                continue;
            }
            let emission = Emission::new(self.id, cursor.current);
            log::trace!("Worker {} emits {}", self.id, emission.value);
            // The lock is held across the observer call: the observed
            // order is exactly the emission order.
            if let Err(err) = self.emitter.emit(emission) {
                log::error!("Worker {}: the observer failed: {err}", self.id);
            }
            cursor.current += 1;
            self.shared.broadcast();
        }
        drop(cursor);
        log::debug!("Worker {} finished", self.id);
    }
}
