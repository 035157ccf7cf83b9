//! Nullable store — thread-safe in-memory storage for testing.

use emblem_store::{
    BadgeRecord, BadgeStore, HistoryStore, IssuerRecord, IssuerStore, LedgerTotals, MetaStore,
    OwnershipEntry, PointsAccount, PointsStore, RedemptionRecord, RedemptionStore, RequestStore,
    RewardRecord, RewardStore, StoreError, VerificationRequest,
};
use emblem_types::{BadgeId, Identity, RequestId, RewardId};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// An in-memory implementation of every Emblem storage trait.
///
/// Cloning is cheap and every clone views the same state, so several
/// engines can be wired over one store in a test.
#[derive(Clone)]
pub struct NullStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    badges: Mutex<BTreeMap<u64, BadgeRecord>>,
    history: Mutex<BTreeMap<(u64, u64), OwnershipEntry>>,
    issuers: Mutex<HashMap<String, IssuerRecord>>,
    accounts: Mutex<HashMap<String, PointsAccount>>,
    totals: Mutex<LedgerTotals>,
    rewards: Mutex<BTreeMap<u64, RewardRecord>>,
    redemptions: Mutex<BTreeMap<(String, u64, u64), RedemptionRecord>>,
    requests: Mutex<HashMap<[u8; 32], VerificationRequest>>,
    counters: Mutex<HashMap<String, u64>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner::default()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeStore for NullStore {
    fn get_badge(&self, id: BadgeId) -> Result<Option<BadgeRecord>, StoreError> {
        Ok(self.inner.badges.lock().unwrap().get(&id.raw()).cloned())
    }

    fn put_badge(&self, record: &BadgeRecord) -> Result<(), StoreError> {
        self.inner
            .badges
            .lock()
            .unwrap()
            .insert(record.id.raw(), record.clone());
        Ok(())
    }

    fn badge_count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.badges.lock().unwrap().len() as u64)
    }
}

impl HistoryStore for NullStore {
    fn put_history_entry(&self, badge: BadgeId, entry: &OwnershipEntry) -> Result<(), StoreError> {
        self.inner
            .history
            .lock()
            .unwrap()
            .insert((badge.raw(), entry.transferred_at.raw()), entry.clone());
        Ok(())
    }

    fn get_history(&self, badge: BadgeId) -> Result<Vec<OwnershipEntry>, StoreError> {
        let history = self.inner.history.lock().unwrap();
        Ok(history
            .range((badge.raw(), 0)..=(badge.raw(), u64::MAX))
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}

impl IssuerStore for NullStore {
    fn get_issuer(&self, identity: &Identity) -> Result<Option<IssuerRecord>, StoreError> {
        Ok(self
            .inner
            .issuers
            .lock()
            .unwrap()
            .get(identity.as_str())
            .cloned())
    }

    fn put_issuer(&self, record: &IssuerRecord) -> Result<(), StoreError> {
        self.inner
            .issuers
            .lock()
            .unwrap()
            .insert(record.identity.as_str().to_string(), record.clone());
        Ok(())
    }

    fn issuer_count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.issuers.lock().unwrap().len() as u64)
    }
}

impl PointsStore for NullStore {
    fn get_account(&self, identity: &Identity) -> Result<Option<PointsAccount>, StoreError> {
        Ok(self
            .inner
            .accounts
            .lock()
            .unwrap()
            .get(identity.as_str())
            .cloned())
    }

    fn put_account(&self, account: &PointsAccount) -> Result<(), StoreError> {
        self.inner
            .accounts
            .lock()
            .unwrap()
            .insert(account.identity.as_str().to_string(), account.clone());
        Ok(())
    }

    fn account_count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.accounts.lock().unwrap().len() as u64)
    }

    fn iter_accounts(&self) -> Result<Vec<PointsAccount>, StoreError> {
        Ok(self.inner.accounts.lock().unwrap().values().cloned().collect())
    }

    fn get_totals(&self) -> Result<LedgerTotals, StoreError> {
        Ok(*self.inner.totals.lock().unwrap())
    }

    fn put_totals(&self, totals: &LedgerTotals) -> Result<(), StoreError> {
        *self.inner.totals.lock().unwrap() = *totals;
        Ok(())
    }
}

impl RewardStore for NullStore {
    fn get_reward(&self, id: RewardId) -> Result<Option<RewardRecord>, StoreError> {
        Ok(self.inner.rewards.lock().unwrap().get(&id.raw()).cloned())
    }

    fn put_reward(&self, record: &RewardRecord) -> Result<(), StoreError> {
        self.inner
            .rewards
            .lock()
            .unwrap()
            .insert(record.id.raw(), record.clone());
        Ok(())
    }

    fn reward_count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.rewards.lock().unwrap().len() as u64)
    }
}

impl RedemptionStore for NullStore {
    fn put_redemption(&self, record: &RedemptionRecord) -> Result<(), StoreError> {
        self.inner.redemptions.lock().unwrap().insert(
            (
                record.user.as_str().to_string(),
                record.reward_id.raw(),
                record.redeemed_at.raw(),
            ),
            record.clone(),
        );
        Ok(())
    }

    fn get_redemptions(&self, user: &Identity) -> Result<Vec<RedemptionRecord>, StoreError> {
        let redemptions = self.inner.redemptions.lock().unwrap();
        let mut out: Vec<RedemptionRecord> = redemptions
            .values()
            .filter(|r| &r.user == user)
            .cloned()
            .collect();
        out.sort_by_key(|r| r.redeemed_at);
        Ok(out)
    }

    fn redemption_count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.redemptions.lock().unwrap().len() as u64)
    }
}

impl RequestStore for NullStore {
    fn get_request(&self, id: RequestId) -> Result<Option<VerificationRequest>, StoreError> {
        Ok(self
            .inner
            .requests
            .lock()
            .unwrap()
            .get(id.as_bytes())
            .cloned())
    }

    fn put_request(&self, record: &VerificationRequest) -> Result<(), StoreError> {
        self.inner
            .requests
            .lock()
            .unwrap()
            .insert(*record.id.as_bytes(), record.clone());
        Ok(())
    }

    fn request_count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.requests.lock().unwrap().len() as u64)
    }
}

impl MetaStore for NullStore {
    fn get_counter(&self, key: &str) -> Result<u64, StoreError> {
        Ok(self
            .inner
            .counters
            .lock()
            .unwrap()
            .get(key)
            .copied()
            .unwrap_or(0))
    }

    fn put_counter(&self, key: &str, value: u64) -> Result<(), StoreError> {
        self.inner
            .counters
            .lock()
            .unwrap()
            .insert(key.to_string(), value);
        Ok(())
    }
}
