//! An abstract emitter and its basic implementations.

use anyhow::Result;
use std::fmt;
use std::sync::Arc;

/// An observer of emitted values.
pub trait Emit<M>: Send + Sync {
    /// Delivers one value to the observer.
    fn emit(&self, msg: M) -> Result<()>;
}

/// An emitter that silently drops values.
///
/// Useful when only the coordination matters, not the output.
#[derive(Debug, Default)]
pub struct EmptyEmit;

impl<M> Emit<M> for EmptyEmit {
    fn emit(&self, _msg: M) -> Result<()> {
        Ok(())
    }
}

/// A wrapper to convert any function to an emitter.
pub struct FuncEmit<F>(pub F);

impl<F, M> Emit<M> for FuncEmit<F>
where
    F: Fn(M) -> Result<()>,
    F: Send + Sync,
{
    fn emit(&self, msg: M) -> Result<()> {
        (self.0)(msg)
    }
}

/// A universal cloneable handle to a shared emitter.
pub struct EmitHandle<M> {
    observer: Arc<dyn Emit<M>>,
}

impl<M> Clone for EmitHandle<M> {
    fn clone(&self) -> Self {
        Self {
            observer: self.observer.clone(),
        }
    }
}

impl<M> Emit<M> for EmitHandle<M> {
    fn emit(&self, msg: M) -> Result<()> {
        self.observer.emit(msg)
    }
}

impl<M> fmt::Debug for EmitHandle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmitHandle")
    }
}

impl<M> EmitHandle<M> {
    /// Wraps an emitter with a reference counter.
    pub fn new<E>(emitter: E) -> Self
    where
        E: Emit<M> + 'static,
    {
        Self {
            observer: Arc::new(emitter),
        }
    }

    /// Changes the handle to accept another message type.
    pub fn reform<F, IN>(&self, func: F) -> EmitHandle<IN>
    where
        F: Fn(IN) -> M,
        F: Send + Sync + 'static,
        M: 'static,
    {
        let observer = self.observer.clone();
        let func_emit = FuncEmit(move |input| {
            let output = func(input);
            observer.emit(output)
        });
        EmitHandle::new(func_emit)
    }
}
