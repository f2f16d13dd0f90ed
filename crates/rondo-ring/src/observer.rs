//! The async observer seam of ring workers.

use anyhow::Result;
use async_trait::async_trait;
use rondo_core::Message;
use rondo_emit::kit::Emit;

/// An observer whose delivery may await.
#[async_trait]
pub trait AsyncEmit<M: Message>: Send + Sync {
    async fn emit(&self, msg: M) -> Result<()>;
}

/// Lifts a synchronous emitter into the async seam.
pub struct SyncBridge<E> {
    emitter: E,
}

impl<E> SyncBridge<E> {
    pub fn new(emitter: E) -> Self {
        Self { emitter }
    }
}

#[async_trait]
impl<E, M> AsyncEmit<M> for SyncBridge<E>
where
    E: Emit<M>,
    M: Message,
{
    async fn emit(&self, msg: M) -> Result<()> {
        self.emitter.emit(msg)
    }
}
