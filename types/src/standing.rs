//! Derived badge standing.
//!
//! A badge stores only the monotone `revoked` flag; "expired" is a predicate
//! of the current height against the optional `expires_at` field, evaluated
//! at query time and never persisted. `BadgeStanding` combines both into the
//! single view read paths reason about.

use crate::height::Height;
use serde::{Deserialize, Serialize};

/// The standing of a badge at a particular height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeStanding {
    /// Neither revoked nor past its expiry height.
    Active,
    /// Past its expiry height but not revoked. Still transferable.
    Expired,
    /// Revoked by its issuer or an administrator. Terminal.
    Revoked,
}

impl BadgeStanding {
    /// Compute standing from the stored flag, the optional expiry height,
    /// and the current height. Revocation dominates expiry.
    pub fn of(revoked: bool, expires_at: Option<Height>, now: Height) -> Self {
        if revoked {
            Self::Revoked
        } else if expires_at.is_some_and(|e| e.reached_by(now)) {
            Self::Expired
        } else {
            Self::Active
        }
    }

    /// Whether ownership of the badge may change hands.
    ///
    /// Transfer legality depends only on revocation; an expired badge still
    /// transfers.
    pub fn can_transfer(&self) -> bool {
        matches!(self, Self::Active | Self::Expired)
    }

    /// Whether the badge currently attests anything.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Active)
    }
}
