//! Generic trait aliases for message bounds.

/// A value that can be handed to another execution unit.
pub trait Message: Send + 'static {}

impl<M> Message for M where M: Send + 'static {}
