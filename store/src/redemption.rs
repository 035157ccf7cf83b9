//! Redemption log storage trait.

use crate::StoreError;
use emblem_types::{Height, Identity, PointsAmount, RewardId};
use serde::{Deserialize, Serialize};

/// One completed redemption, keyed by `(user, reward_id, redeemed_at)`.
/// Append-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRecord {
    pub user: Identity,
    pub reward_id: RewardId,
    pub points_spent: PointsAmount,
    pub redeemed_at: Height,
}

/// Trait for redemption log storage operations.
pub trait RedemptionStore {
    fn put_redemption(&self, record: &RedemptionRecord) -> Result<(), StoreError>;

    /// All redemptions by one user, ordered by height.
    fn get_redemptions(&self, user: &Identity) -> Result<Vec<RedemptionRecord>, StoreError>;

    fn redemption_count(&self) -> Result<u64, StoreError>;
}
