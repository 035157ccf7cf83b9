//! Badge storage trait.

use crate::StoreError;
use emblem_types::{BadgeId, BadgeStanding, Height, Identity, VerificationHash};
use serde::{Deserialize, Serialize};

/// A single credential record. Created once at issuance, never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRecord {
    pub id: BadgeId,
    /// Current holder. Changes only through transfer.
    pub owner: Identity,
    /// The identity that issued the badge. Never changes.
    pub issuer: Identity,
    pub badge_type: String,
    pub title: String,
    pub description: String,
    pub metadata_uri: String,
    pub issued_at: Height,
    /// Expiry height, if the badge expires at all. "Expired" is derived
    /// from this at query time, never stored.
    pub expires_at: Option<Height>,
    /// Monotone flag: false -> true is the only legal transition.
    pub revoked: bool,
    /// Content hash binding the badge to off-ledger evidence.
    pub verification_hash: VerificationHash,
}

impl BadgeRecord {
    /// Whether the badge's expiry height has been reached at `now`.
    pub fn is_expired(&self, now: Height) -> bool {
        self.expires_at.is_some_and(|e| e.reached_by(now))
    }

    /// The derived standing of this badge at `now`.
    pub fn standing(&self, now: Height) -> BadgeStanding {
        BadgeStanding::of(self.revoked, self.expires_at, now)
    }
}

/// Trait for badge storage operations.
pub trait BadgeStore {
    fn get_badge(&self, id: BadgeId) -> Result<Option<BadgeRecord>, StoreError>;
    fn put_badge(&self, record: &BadgeRecord) -> Result<(), StoreError>;
    fn badge_exists(&self, id: BadgeId) -> Result<bool, StoreError> {
        self.get_badge(id).map(|b| b.is_some())
    }
    fn badge_count(&self) -> Result<u64, StoreError>;
}
