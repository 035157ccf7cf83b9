//! Reward catalog storage trait.

use crate::StoreError;
use emblem_types::{Identity, PointsAmount, RewardId};
use serde::{Deserialize, Serialize};

/// A redeemable reward definition with bounded inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecord {
    pub id: RewardId,
    pub name: String,
    pub description: String,
    /// Points debited per redemption.
    pub cost: PointsAmount,
    /// Remaining inventory; each redemption decrements by exactly 1.
    pub available_quantity: u64,
    pub active: bool,
    pub created_by: Identity,
}

/// Trait for reward storage operations.
pub trait RewardStore {
    fn get_reward(&self, id: RewardId) -> Result<Option<RewardRecord>, StoreError>;
    fn put_reward(&self, record: &RewardRecord) -> Result<(), StoreError>;
    fn reward_count(&self) -> Result<u64, StoreError>;
}
