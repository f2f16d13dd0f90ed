//! The observer seam: how sequenced values reach the outside.
//!
//! Implementations keep their own specific errors behind `anyhow::Result`
//! instead of a crate-wide emit-error type that would hide the details.

pub mod collector;
pub mod emitter;

pub mod kit {
    pub use crate::collector::*;
    pub use crate::emitter::*;
}
