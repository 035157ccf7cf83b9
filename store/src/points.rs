//! Points account storage trait.

use crate::StoreError;
use emblem_types::{Height, Identity, PointsAmount};
use serde::{Deserialize, Serialize};

/// Per-identity balance and activity statistics.
///
/// Created lazily on the first award or transfer-in; a missing account
/// reads as the zero-valued record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsAccount {
    pub identity: Identity,
    pub balance: PointsAmount,
    pub total_earned: PointsAmount,
    pub total_spent: PointsAmount,
    pub rewards_redeemed: u64,
    pub last_activity: Height,
}

impl PointsAccount {
    /// The zero-valued record a missing account resolves to.
    pub fn empty(identity: Identity) -> Self {
        Self {
            identity,
            balance: PointsAmount::ZERO,
            total_earned: PointsAmount::ZERO,
            total_spent: PointsAmount::ZERO,
            rewards_redeemed: 0,
            last_activity: Height::GENESIS,
        }
    }
}

/// Global conservation counters. Only award, deduct, and redemption move
/// them; transfers are balance-neutral.
///
/// Invariant: `sum(balance) == issued - deducted - redeemed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub issued: PointsAmount,
    pub deducted: PointsAmount,
    pub redeemed: PointsAmount,
}

/// Trait for points account storage operations.
pub trait PointsStore {
    fn get_account(&self, identity: &Identity) -> Result<Option<PointsAccount>, StoreError>;
    fn put_account(&self, account: &PointsAccount) -> Result<(), StoreError>;
    fn account_count(&self) -> Result<u64, StoreError>;
    fn iter_accounts(&self) -> Result<Vec<PointsAccount>, StoreError>;

    fn get_totals(&self) -> Result<LedgerTotals, StoreError>;
    fn put_totals(&self, totals: &LedgerTotals) -> Result<(), StoreError>;
}
