//! A collecting emitter that records the full emission sequence.

use crate::emitter::Emit;
use anyhow::{anyhow as err, Result};
use rondo_core::{Slot, WorkerId};
use std::sync::{Arc, Mutex};

/// One recorded emission: which worker produced which value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission {
    pub worker: WorkerId,
    pub value: u64,
}

impl Emission {
    pub fn new(worker: WorkerId, value: u64) -> Self {
        Self { worker, value }
    }
}

/// Accumulates emissions in arrival order.
///
/// The recorded order matches the emission order as long as emitting is
/// serialized by the caller (both launchers guarantee that). The sequence
/// can be taken exactly once.
#[derive(Clone)]
pub struct SeqCollector {
    records: Arc<Mutex<Slot<Vec<Emission>>>>,
}

impl Default for SeqCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SeqCollector {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Slot::filled(Vec::new()))),
        }
    }

    /// Takes the collected sequence, leaving the collector drained.
    pub fn take(&self) -> Result<Vec<Emission>> {
        let mut slot = self
            .records
            .lock()
            .map_err(|_| err!("Can't get access to the emission log"))?;
        let records = slot.take()?;
        Ok(records)
    }
}

impl Emit<Emission> for SeqCollector {
    fn emit(&self, msg: Emission) -> Result<()> {
        let mut slot = self
            .records
            .lock()
            .map_err(|_| err!("Can't get access to the emission log"))?;
        slot.get_mut()?.push(msg);
        Ok(())
    }
}
