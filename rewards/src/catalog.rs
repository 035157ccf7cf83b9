//! Reward catalog — definitions with bounded inventory.

use crate::error::RewardError;
use emblem_registry::AuthorizationRegistry;
use emblem_store::{IssuerStore, MetaStore, RewardRecord, RewardStore, NEXT_REWARD_ID};
use emblem_types::{CallContext, PointsAmount, RegistryParams, RewardId};

/// The reward catalog — sole owner of reward definitions. Inventory is
/// decremented only through the redemption engine.
pub struct RewardCatalog<S: RewardStore + MetaStore> {
    store: S,
}

impl<S: RewardStore + MetaStore> RewardCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Define a new reward. Admin only; cost and quantity must both be
    /// positive.
    pub fn create_reward<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        params: &RegistryParams,
        ctx: &CallContext,
        name: String,
        description: String,
        cost: PointsAmount,
        quantity: u64,
    ) -> Result<RewardId, RewardError> {
        if !auth.is_admin(&ctx.caller)? {
            return Err(RewardError::Unauthorized(format!(
                "{} may not create rewards",
                ctx.caller
            )));
        }
        if cost.is_zero() {
            return Err(RewardError::InvalidInput("cost must be non-zero".into()));
        }
        if quantity == 0 {
            return Err(RewardError::InvalidInput("quantity must be non-zero".into()));
        }
        if name.len() > params.max_reward_name_len {
            return Err(RewardError::InvalidInput(format!(
                "reward name exceeds {} bytes",
                params.max_reward_name_len
            )));
        }
        if description.len() > params.max_reward_description_len {
            return Err(RewardError::InvalidInput(format!(
                "reward description exceeds {} bytes",
                params.max_reward_description_len
            )));
        }

        let id = self.peek_next_id()?;
        let next = id.next().ok_or(RewardError::IdExhausted)?;

        let record = RewardRecord {
            id,
            name,
            description,
            cost,
            available_quantity: quantity,
            active: true,
            created_by: ctx.caller.clone(),
        };
        self.store.put_reward(&record)?;
        self.store.put_counter(NEXT_REWARD_ID, next.raw())?;
        tracing::info!(reward = %id, cost = %cost, quantity, "reward created");
        Ok(id)
    }

    /// Enable or disable a reward for redemption. Admin only.
    pub fn set_active<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        ctx: &CallContext,
        reward_id: RewardId,
        active: bool,
    ) -> Result<(), RewardError> {
        if !auth.is_admin(&ctx.caller)? {
            return Err(RewardError::Unauthorized(format!(
                "{} may not update rewards",
                ctx.caller
            )));
        }
        let mut reward = self
            .store
            .get_reward(reward_id)?
            .ok_or(RewardError::NotFound(reward_id))?;
        reward.active = active;
        self.store.put_reward(&reward)?;
        Ok(())
    }

    /// The stored record for a reward, if one exists.
    pub fn get_reward(&self, reward_id: RewardId) -> Result<Option<RewardRecord>, RewardError> {
        Ok(self.store.get_reward(reward_id)?)
    }

    /// Number of rewards ever defined.
    pub fn reward_count(&self) -> Result<u64, RewardError> {
        Ok(self.store.reward_count()?)
    }

    fn peek_next_id(&self) -> Result<RewardId, RewardError> {
        let raw = self.store.get_counter(NEXT_REWARD_ID)?;
        if raw == 0 {
            Ok(RewardId::FIRST)
        } else {
            Ok(RewardId::new(raw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emblem_nullables::NullStore;
    use emblem_types::{Height, Identity};

    fn test_identity(n: u8) -> Identity {
        Identity::new(format!("principal_{n}"))
    }

    fn ctx(caller: u8, height: u64) -> CallContext {
        CallContext::new(test_identity(caller), Height::new(height))
    }

    fn setup() -> (AuthorizationRegistry<NullStore>, RewardCatalog<NullStore>) {
        let store = NullStore::new();
        let auth = AuthorizationRegistry::new(test_identity(0), store.clone());
        (auth, RewardCatalog::new(store))
    }

    #[test]
    fn test_create_reward_assigns_monotonic_ids() {
        let (auth, catalog) = setup();
        let params = RegistryParams::default();
        let a = catalog
            .create_reward(
                &auth,
                &params,
                &ctx(0, 10),
                "Sticker".into(),
                String::new(),
                PointsAmount::new(100),
                5,
            )
            .unwrap();
        let b = catalog
            .create_reward(
                &auth,
                &params,
                &ctx(0, 11),
                "Mug".into(),
                String::new(),
                PointsAmount::new(250),
                2,
            )
            .unwrap();
        assert_eq!(a, RewardId::new(1));
        assert_eq!(b, RewardId::new(2));

        let reward = catalog.get_reward(a).unwrap().unwrap();
        assert!(reward.active);
        assert_eq!(reward.available_quantity, 5);
        assert_eq!(reward.created_by, test_identity(0));
    }

    #[test]
    fn test_create_reward_requires_admin() {
        let (auth, catalog) = setup();
        let params = RegistryParams::default();
        let result = catalog.create_reward(
            &auth,
            &params,
            &ctx(3, 10),
            "Sticker".into(),
            String::new(),
            PointsAmount::new(100),
            5,
        );
        assert!(matches!(result, Err(RewardError::Unauthorized(_))));
        assert_eq!(catalog.reward_count().unwrap(), 0);
    }

    #[test]
    fn test_create_reward_rejects_zero_cost_or_quantity() {
        let (auth, catalog) = setup();
        let params = RegistryParams::default();
        let zero_cost = catalog.create_reward(
            &auth,
            &params,
            &ctx(0, 10),
            "Free".into(),
            String::new(),
            PointsAmount::ZERO,
            5,
        );
        assert!(matches!(zero_cost, Err(RewardError::InvalidInput(_))));

        let zero_quantity = catalog.create_reward(
            &auth,
            &params,
            &ctx(0, 10),
            "Ghost".into(),
            String::new(),
            PointsAmount::new(10),
            0,
        );
        assert!(matches!(zero_quantity, Err(RewardError::InvalidInput(_))));
    }

    #[test]
    fn test_set_active_toggles() {
        let (auth, catalog) = setup();
        let params = RegistryParams::default();
        let id = catalog
            .create_reward(
                &auth,
                &params,
                &ctx(0, 10),
                "Sticker".into(),
                String::new(),
                PointsAmount::new(100),
                5,
            )
            .unwrap();
        catalog.set_active(&auth, &ctx(0, 11), id, false).unwrap();
        assert!(!catalog.get_reward(id).unwrap().unwrap().active);
        catalog.set_active(&auth, &ctx(0, 12), id, true).unwrap();
        assert!(catalog.get_reward(id).unwrap().unwrap().active);
    }

    #[test]
    fn test_set_active_on_missing_reward_is_not_found() {
        let (auth, catalog) = setup();
        let result = catalog.set_active(&auth, &ctx(0, 10), RewardId::new(9), false);
        assert!(matches!(result, Err(RewardError::NotFound(_))));
    }
}
