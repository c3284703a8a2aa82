//! Nullable clock — deterministic time for testing.

use std::cell::Cell;
use weft_types::Timestamp;

/// A clock that only moves when told to.
///
/// The engine takes `now` as an argument everywhere; tests read it from
/// here so time is part of the test script.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get() + secs);
    }
}
