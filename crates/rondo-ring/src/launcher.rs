//! Wiring and launching the ring.

use crate::baton::Baton;
use crate::observer::{AsyncEmit, SyncBridge};
use crate::stopper::RingStopper;
use crate::worker::RingWorker;
use anyhow::{anyhow as err, Result};
use futures::future::try_join_all;
use rondo_core::{mpsc, spawn, ActiveFlag, SeqConfig, WorkerId};
use rondo_emit::kit::{Emission, SeqCollector};
use std::sync::Arc;

/// A configured ring of workers passing the turn baton.
pub struct Ring {
    config: SeqConfig,
    active: ActiveFlag,
}

impl Ring {
    pub fn new(config: SeqConfig) -> Self {
        Self {
            config,
            active: ActiveFlag::default(),
        }
    }

    pub fn config(&self) -> &SeqConfig {
        &self.config
    }

    /// A stopper for cooperative cancellation of this ring.
    pub fn stopper(&self) -> RingStopper {
        RingStopper {
            active: self.active.clone(),
        }
    }

    /// Spawns every worker, seeds the first one, and waits for the round.
    pub async fn launch<E>(&self, emitter: E) -> Result<()>
    where
        E: AsyncEmit<Emission> + 'static,
    {
        let workers = self.config.workers();
        log::debug!("Launching a ring of {workers} workers");
        let emitter = Arc::new(emitter);
        let mut txs = Vec::with_capacity(workers);
        let mut rxs = Vec::with_capacity(workers);
        for _ in 0..workers {
            // A single baton circulates: one slot per handoff is enough.
            let (tx, rx) = mpsc::channel(1);
            txs.push(tx);
            rxs.push(rx);
        }
        let seed = txs[0].clone();
        let mut handles = Vec::with_capacity(workers);
        for (index, rx) in rxs.into_iter().enumerate() {
            let tx = txs[(index + 1) % workers].clone();
            let worker = RingWorker::new(
                WorkerId::from(index),
                self.config,
                self.active.clone(),
                rx,
                tx,
                emitter.clone(),
            );
            handles.push(spawn(worker.routine()));
        }
        drop(txs);
        seed.send(Baton { next: 0 })
            .await
            .map_err(|_| err!("Can't seed the ring"))?;
        drop(seed);
        try_join_all(handles).await?;
        Ok(())
    }
}

/// One-call orchestration: runs the whole ring and returns the sequence.
pub async fn launch(workers: usize, total: u64) -> Result<Vec<Emission>> {
    let config = SeqConfig::new(workers, total)?;
    let collector = SeqCollector::new();
    let ring = Ring::new(config);
    ring.launch(SyncBridge::new(collector.clone())).await?;
    collector.take()
}
