//! Nullable clock — deterministic heights for testing.

use emblem_types::Height;
use std::cell::Cell;

/// A deterministic height source for testing.
///
/// The height only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial: u64) -> Self {
        Self {
            current: Cell::new(initial),
        }
    }

    /// Get the current height.
    pub fn now(&self) -> Height {
        Height::new(self.current.get())
    }

    /// Advance the height by a number of steps.
    pub fn advance(&self, steps: u64) {
        self.current.set(self.current.get() + steps);
    }

    /// Set the height to a specific value.
    pub fn set(&self, height: u64) {
        self.current.set(height);
    }
}
