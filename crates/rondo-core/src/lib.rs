//! Core types shared by the rondo crates.

pub mod config;
pub mod flag;
pub mod ident;
pub mod runtime;
pub mod slot;
pub mod types;

pub use config::{SeqConfig, SeqConfigError};
pub use flag::ActiveFlag;
pub use ident::WorkerId;
pub use runtime::{mpsc, spawn};
pub use slot::{Slot, SlotError};
pub use types::Message;
