//! Redemption engine — points for inventory, atomically.
//!
//! A redemption touches three owners' state at once: the caller's points
//! account, the reward's inventory, and the redemption log. All
//! preconditions are checked in a fixed order against a consistent read —
//! reward exists, reward active, inventory remaining, balance sufficient —
//! and the first failure wins. Only after the last check do the staged
//! writes go out, so a failed redemption leaves every record untouched.

use crate::error::RewardError;
use emblem_store::{PointsAccount, PointsStore, RedemptionRecord, RedemptionStore, RewardStore};
use emblem_types::{CallContext, Identity, RewardId};

/// The redemption engine. Mutates reward inventory and points accounts as
/// one logical operation.
pub struct RedemptionEngine<S: RewardStore + RedemptionStore + PointsStore> {
    store: S,
}

impl<S: RewardStore + RedemptionStore + PointsStore> RedemptionEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Redeem one unit of `reward_id`, paying from the caller's balance.
    pub fn redeem(
        &self,
        ctx: &CallContext,
        reward_id: RewardId,
    ) -> Result<RedemptionRecord, RewardError> {
        let mut reward = self
            .store
            .get_reward(reward_id)?
            .ok_or(RewardError::NotFound(reward_id))?;
        if !reward.active {
            return Err(RewardError::RewardUnavailable {
                id: reward_id,
                reason: "reward is inactive".into(),
            });
        }
        if reward.available_quantity == 0 {
            return Err(RewardError::RewardUnavailable {
                id: reward_id,
                reason: "out of stock".into(),
            });
        }
        let mut account = self
            .store
            .get_account(&ctx.caller)?
            .unwrap_or_else(|| PointsAccount::empty(ctx.caller.clone()));
        account.balance = account.balance.checked_sub(reward.cost).ok_or(
            RewardError::InsufficientBalance {
                needed: reward.cost.raw(),
                available: account.balance.raw(),
            },
        )?;

        // Every check has passed; stage the remaining record updates.
        account.total_spent = account
            .total_spent
            .checked_add(reward.cost)
            .ok_or(RewardError::Overflow)?;
        account.rewards_redeemed += 1;
        account.last_activity = ctx.now;
        reward.available_quantity -= 1;
        let mut totals = self.store.get_totals()?;
        totals.redeemed = totals
            .redeemed
            .checked_add(reward.cost)
            .ok_or(RewardError::Overflow)?;
        let record = RedemptionRecord {
            user: ctx.caller.clone(),
            reward_id,
            points_spent: reward.cost,
            redeemed_at: ctx.now,
        };

        self.store.put_account(&account)?;
        self.store.put_reward(&reward)?;
        self.store.put_totals(&totals)?;
        self.store.put_redemption(&record)?;
        tracing::info!(
            user = %record.user,
            reward = %reward_id,
            spent = %record.points_spent,
            "reward redeemed"
        );
        Ok(record)
    }

    /// All redemptions by one user, ordered by height.
    pub fn redemptions_of(&self, user: &Identity) -> Result<Vec<RedemptionRecord>, RewardError> {
        Ok(self.store.get_redemptions(user)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RewardCatalog;
    use emblem_nullables::NullStore;
    use emblem_points::PointsLedger;
    use emblem_registry::AuthorizationRegistry;
    use emblem_types::{Height, Identity, PointsAmount, RegistryParams};

    fn test_identity(n: u8) -> Identity {
        Identity::new(format!("principal_{n}"))
    }

    fn ctx(caller: u8, height: u64) -> CallContext {
        CallContext::new(test_identity(caller), Height::new(height))
    }

    struct Fixture {
        auth: AuthorizationRegistry<NullStore>,
        ledger: PointsLedger<NullStore>,
        catalog: RewardCatalog<NullStore>,
        engine: RedemptionEngine<NullStore>,
    }

    /// Root is principal_0; principal_1 holds `balance` points.
    fn setup(balance: u64) -> Fixture {
        let store = NullStore::new();
        let auth = AuthorizationRegistry::new(test_identity(0), store.clone());
        let ledger = PointsLedger::new(store.clone());
        if balance > 0 {
            ledger
                .award(&auth, &ctx(0, 1), &test_identity(1), PointsAmount::new(balance))
                .unwrap();
        }
        Fixture {
            auth,
            ledger,
            catalog: RewardCatalog::new(store.clone()),
            engine: RedemptionEngine::new(store),
        }
    }

    fn sticker(f: &Fixture, cost: u64, quantity: u64) -> RewardId {
        f.catalog
            .create_reward(
                &f.auth,
                &RegistryParams::default(),
                &ctx(0, 2),
                "Sticker".into(),
                String::new(),
                PointsAmount::new(cost),
                quantity,
            )
            .unwrap()
    }

    #[test]
    fn test_redeem_debits_decrements_and_logs() {
        let f = setup(100);
        let reward = sticker(&f, 60, 3);

        let record = f.engine.redeem(&ctx(1, 10), reward).unwrap();
        assert_eq!(record.points_spent, PointsAmount::new(60));
        assert_eq!(record.redeemed_at, Height::new(10));

        assert_eq!(f.ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(40));
        assert_eq!(f.catalog.get_reward(reward).unwrap().unwrap().available_quantity, 2);
        assert_eq!(f.ledger.totals().unwrap().redeemed, PointsAmount::new(60));

        let stats = f.ledger.stats_of(&test_identity(1)).unwrap();
        assert_eq!(stats.rewards_redeemed, 1);
        assert_eq!(stats.total_spent, PointsAmount::new(60));

        let log = f.engine.redemptions_of(&test_identity(1)).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].reward_id, reward);
    }

    #[test]
    fn test_redeem_missing_reward_is_not_found() {
        let f = setup(100);
        let result = f.engine.redeem(&ctx(1, 10), RewardId::new(9));
        assert!(matches!(result, Err(RewardError::NotFound(_))));
    }

    #[test]
    fn test_redeem_inactive_reward_is_unavailable() {
        let f = setup(100);
        let reward = sticker(&f, 60, 3);
        f.catalog.set_active(&f.auth, &ctx(0, 5), reward, false).unwrap();

        let result = f.engine.redeem(&ctx(1, 10), reward);
        assert!(matches!(result, Err(RewardError::RewardUnavailable { .. })));
        // Nothing moved.
        assert_eq!(f.ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(100));
        assert_eq!(f.catalog.get_reward(reward).unwrap().unwrap().available_quantity, 3);
    }

    #[test]
    fn test_redeem_with_insufficient_balance_is_a_noop() {
        let f = setup(30);
        let reward = sticker(&f, 60, 3);

        let result = f.engine.redeem(&ctx(1, 10), reward);
        match result {
            Err(RewardError::InsufficientBalance { needed, available }) => {
                assert_eq!(needed, 60);
                assert_eq!(available, 30);
            }
            other => panic!("expected InsufficientBalance, got {other:?}"),
        }
        assert_eq!(f.ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(30));
        assert_eq!(f.catalog.get_reward(reward).unwrap().unwrap().available_quantity, 3);
        assert_eq!(f.ledger.totals().unwrap().redeemed, PointsAmount::ZERO);
        assert!(f.engine.redemptions_of(&test_identity(1)).unwrap().is_empty());
    }

    #[test]
    fn test_inactive_outranks_insufficient_balance() {
        // First failure wins: an inactive reward reports unavailability
        // even when the caller could not pay either.
        let f = setup(1);
        let reward = sticker(&f, 60, 3);
        f.catalog.set_active(&f.auth, &ctx(0, 5), reward, false).unwrap();
        let result = f.engine.redeem(&ctx(1, 10), reward);
        assert!(matches!(result, Err(RewardError::RewardUnavailable { .. })));
    }

    #[test]
    fn test_depleted_inventory_rejects_further_redemptions() {
        let f = setup(200);
        let reward = sticker(&f, 50, 1);

        f.engine.redeem(&ctx(1, 10), reward).unwrap();
        let result = f.engine.redeem(&ctx(1, 11), reward);
        assert!(matches!(result, Err(RewardError::RewardUnavailable { .. })));
        // The failed attempt spent nothing.
        assert_eq!(f.ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(150));
        assert_eq!(f.catalog.get_reward(reward).unwrap().unwrap().available_quantity, 0);
    }
}
