//! One async worker of the ring.

use crate::baton::Baton;
use crate::observer::AsyncEmit;
use rondo_core::{mpsc, ActiveFlag, SeqConfig, WorkerId};
use rondo_emit::kit::Emission;
use std::sync::Arc;

pub(crate) struct RingWorker<E> {
    id: WorkerId,
    config: SeqConfig,
    active: ActiveFlag,
    rx: mpsc::Receiver<Baton>,
    tx: mpsc::Sender<Baton>,
    emitter: Arc<E>,
}

impl<E> RingWorker<E>
where
    E: AsyncEmit<Emission> + 'static,
{
    pub(crate) fn new(
        id: WorkerId,
        config: SeqConfig,
        active: ActiveFlag,
        rx: mpsc::Receiver<Baton>,
        tx: mpsc::Sender<Baton>,
        emitter: Arc<E>,
    ) -> Self {
        Self {
            id,
            config,
            active,
            rx,
            tx,
            emitter,
        }
    }

    /// Drains batons until termination makes its lap around the ring.
    pub(crate) async fn routine(mut self) {
        log::debug!("Ring worker {} started", self.id);
        while let Some(baton) = self.rx.recv().await {
            if baton.next >= self.config.total() || !self.active.is_active() {
                // Push the termination lap onward; the last forward finds
                // the next worker already gone.
                self.forward(baton).await;
                break;
            }
            let emission = Emission::new(self.id, baton.next);
            log::trace!("Ring worker {} emits {}", self.id, emission.value);
            if let Err(err) = self.emitter.emit(emission).await {
                log::error!("Ring worker {}: the observer failed: {err}", self.id);
            }
            let next = Baton {
                next: baton.next + 1,
            };
            self.forward(next).await;
        }
        log::debug!("Ring worker {} finished", self.id);
    }

    async fn forward(&self, baton: Baton) {
        if self.tx.send(baton).await.is_err() {
            log::trace!("Ring worker {}: the next worker is already gone", self.id);
        }
    }
}
