//! Metadata storage trait.

use crate::StoreError;

/// Named monotonic counters that don't belong to any domain store: the
/// next badge id and the next reward id.
pub trait MetaStore {
    /// Read a counter. Unset counters read as 0.
    fn get_counter(&self, key: &str) -> Result<u64, StoreError>;

    /// Overwrite a counter.
    fn put_counter(&self, key: &str, value: u64) -> Result<(), StoreError>;
}

/// Counter key for the next badge id to allocate.
pub const NEXT_BADGE_ID: &str = "next_badge_id";

/// Counter key for the next reward id to allocate.
pub const NEXT_REWARD_ID: &str = "next_reward_id";
