//! Height type used throughout the ledger.
//!
//! A height is the external monotonically non-decreasing counter supplied by
//! the execution environment. It serves both as a timestamp for audit fields
//! and as the reference point for expiry comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monotonic counter value from the execution environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(u64);

impl Height {
    /// Height zero (before any operation).
    pub const GENESIS: Self = Self(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Heights elapsed since this one (relative to `now`).
    pub fn elapsed_since(&self, now: Height) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether a deadline at this height has been reached at `now`.
    ///
    /// A deadline is reached the moment `now` equals it, matching the
    /// expiry predicate `now >= expires_at`.
    pub fn reached_by(&self, now: Height) -> bool {
        now.0 >= self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}
