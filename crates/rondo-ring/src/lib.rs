//! The token-ring round-robin strategy over async tasks.
//!
//! No shared counter and no lock: a baton circulates through a ring of
//! single-slot channels, and holding the baton is the permission to emit.

pub mod baton;
pub mod launcher;
pub mod observer;
pub mod stopper;
mod worker;

pub mod kit {
    pub use crate::baton::*;
    pub use crate::launcher::*;
    pub use crate::observer::*;
    pub use crate::stopper::*;
}
