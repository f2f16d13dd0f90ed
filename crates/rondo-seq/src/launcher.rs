//! Spawning and joining a full round of workers.

use crate::state::SeqShared;
use crate::stopper::SeqStopper;
use crate::worker::Worker;
use anyhow::{anyhow as err, Result};
use rondo_core::{SeqConfig, WorkerId};
use rondo_emit::kit::{Emission, EmitHandle, SeqCollector};
use std::sync::Arc;
use std::thread;

/// A handle to one configured round.
#[derive(Clone)]
pub struct Sequencer {
    shared: Arc<SeqShared>,
}

impl Sequencer {
    pub fn new(config: SeqConfig) -> Self {
        Self {
            shared: Arc::new(SeqShared::new(config)),
        }
    }

    pub fn config(&self) -> &SeqConfig {
        self.shared.config()
    }

    /// A stopper for cooperative cancellation of this round.
    pub fn stopper(&self) -> SeqStopper {
        SeqStopper {
            shared: self.shared.clone(),
        }
    }

    /// Runs one worker to completion on the calling thread.
    ///
    /// Blocks until the cursor reaches the total; every one of the
    /// configured workers has to run for the round to make progress.
    pub fn run(&self, worker: WorkerId, emitter: EmitHandle<Emission>) {
        Worker::new(self.shared.clone(), worker, emitter).routine();
    }

    /// Spawns one thread per worker and waits for the whole round.
    pub fn launch(&self, emitter: EmitHandle<Emission>) -> Result<()> {
        let workers = self.shared.config().workers();
        log::debug!("Launching a round of {workers} workers");
        let mut handles = Vec::with_capacity(workers);
        for index in 0..workers {
            let id = WorkerId::from(index);
            let worker = Worker::new(self.shared.clone(), id, emitter.clone());
            let handle = thread::Builder::new()
                .name(format!("rondo-{id}"))
                .spawn(move || worker.routine())?;
            handles.push(handle);
        }
        for handle in handles {
            handle
                .join()
                .map_err(|_| err!("A worker thread panicked"))?;
        }
        Ok(())
    }
}

/// One-call orchestration: runs the whole round and returns the sequence.
pub fn launch(workers: usize, total: u64) -> Result<Vec<Emission>> {
    let config = SeqConfig::new(workers, total)?;
    let collector = SeqCollector::new();
    let emitter = EmitHandle::new(collector.clone());
    Sequencer::new(config).launch(emitter)?;
    collector.take()
}
