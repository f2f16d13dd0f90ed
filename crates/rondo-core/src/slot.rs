//! An `Option` wrapper that turns wrong-state access into errors.

use std::any::type_name;
use thiserror::Error;

/// A slot interaction that found the slot in the wrong state.
#[derive(Error, Debug)]
pub enum SlotError {
    /// The slot has no value.
    #[error("Slot [{0}] is empty")]
    Empty(&'static str),
    /// The slot already holds a value.
    #[error("Slot [{0}] is occupied")]
    Occupied(&'static str),
}

/// An `Option` that reports an error when the expected state is missing.
pub struct Slot<T> {
    label: &'static str,
    value: Option<T>,
}

impl<T> Slot<T> {
    /// Creates an empty slot.
    pub fn empty() -> Self {
        Self {
            label: type_name::<T>(),
            value: None,
        }
    }

    /// Creates a slot holding a value.
    pub fn filled(value: T) -> Self {
        Self {
            label: type_name::<T>(),
            value: Some(value),
        }
    }

    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Puts a value into the slot.
    pub fn fill(&mut self, value: T) -> Result<(), SlotError> {
        if self.value.is_some() {
            Err(SlotError::Occupied(self.label))
        } else {
            self.value = Some(value);
            Ok(())
        }
    }

    /// Borrows the held value mutably.
    pub fn get_mut(&mut self) -> Result<&mut T, SlotError> {
        self.value.as_mut().ok_or(SlotError::Empty(self.label))
    }

    /// Takes the value out, leaving the slot empty.
    pub fn take(&mut self) -> Result<T, SlotError> {
        self.value.take().ok_or(SlotError::Empty(self.label))
    }
}
