//! Timestamp type used throughout the protocol.
//!
//! Timestamps are Unix epoch seconds (UTC). The bridge engine never reads a
//! clock itself — callers pass `now` explicitly, which keeps every operation
//! deterministic and testable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// This timestamp shifted forward by `secs`, saturating at the maximum.
    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_secs_saturates() {
        let t = Timestamp::new(u64::MAX - 1);
        assert_eq!(t.plus_secs(10), Timestamp::new(u64::MAX));
    }

    #[test]
    fn ordering_follows_seconds() {
        assert!(Timestamp::new(99) < Timestamp::new(100));
        assert!(Timestamp::new(100) <= Timestamp::new(100));
    }
}
