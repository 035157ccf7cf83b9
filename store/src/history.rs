//! Ownership history storage trait.

use crate::StoreError;
use emblem_types::{BadgeId, Height, Identity};
use serde::{Deserialize, Serialize};

/// One transfer of a badge, keyed by `(badge_id, transferred_at)`.
///
/// Appended only by the badge registry's transfer operation. Two transfers
/// of the same badge at the same height share a key and the later write
/// wins; callers that need every hop must not batch transfers within one
/// height.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipEntry {
    pub previous_owner: Identity,
    pub new_owner: Identity,
    pub transferred_at: Height,
}

/// Trait for ownership history storage operations.
pub trait HistoryStore {
    fn put_history_entry(&self, badge: BadgeId, entry: &OwnershipEntry) -> Result<(), StoreError>;

    /// All recorded transfers of a badge, ordered by height.
    fn get_history(&self, badge: BadgeId) -> Result<Vec<OwnershipEntry>, StoreError>;

    fn history_len(&self, badge: BadgeId) -> Result<u64, StoreError> {
        self.get_history(badge).map(|v| v.len() as u64)
    }
}
