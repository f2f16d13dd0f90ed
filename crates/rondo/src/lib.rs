//! Rondo: round-robin coordination blocks.

pub mod core {
    pub use rondo_core::*;
}

pub mod emit {
    pub use rondo_emit::kit::*;
}

pub mod ring {
    pub use rondo_ring::kit::*;
}

pub mod seq {
    pub use rondo_seq::kit::*;
}
