//! Monotonic entity identifiers for badges and rewards.
//!
//! Ids are allocated strictly increasing from [`BadgeId::FIRST`] /
//! [`RewardId::FIRST`] and are never reused, even after revocation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BadgeId(u64);

impl BadgeId {
    /// The id assigned to the first badge ever issued.
    pub const FIRST: Self = Self(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The next id in allocation order, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "badge#{}", self.0)
    }
}

/// Unique identifier of a reward definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RewardId(u64);

impl RewardId {
    /// The id assigned to the first reward ever created.
    pub const FIRST: Self = Self(1);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The next id in allocation order, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RewardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reward#{}", self.0)
    }
}
