//! The points ledger engine.
//!
//! Conservation invariant: `sum(balance) == totals.issued − totals.deducted
//! − totals.redeemed` at every point. Award and deduct move the totals;
//! transfers are balance-neutral. Redemption debits are applied by the
//! redemption engine as part of its atomic commit, against the same
//! accounts and totals.
//!
//! Every command validates all preconditions against a consistent read,
//! then writes; the first violated precondition returns before the first
//! `put`.

use crate::error::PointsError;
use emblem_registry::AuthorizationRegistry;
use emblem_store::{IssuerStore, LedgerTotals, PointsAccount, PointsStore};
use emblem_types::{CallContext, Identity, PointsAmount};

/// The points ledger — sole owner of points accounts.
pub struct PointsLedger<S: PointsStore> {
    store: S,
}

impl<S: PointsStore> PointsLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Mint `amount` new points into `recipient`'s balance. Admin only.
    ///
    /// Creates the account lazily; raises the global issued total.
    pub fn award<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        ctx: &CallContext,
        recipient: &Identity,
        amount: PointsAmount,
    ) -> Result<(), PointsError> {
        if !auth.is_admin(&ctx.caller)? {
            return Err(PointsError::Unauthorized(format!(
                "{} may not award points",
                ctx.caller
            )));
        }
        if amount.is_zero() {
            return Err(PointsError::ZeroAmount);
        }
        let mut account = self.account_or_empty(recipient)?;
        let mut totals = self.store.get_totals()?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;
        account.total_earned = account
            .total_earned
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;
        account.last_activity = ctx.now;
        totals.issued = totals
            .issued
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;

        self.store.put_account(&account)?;
        self.store.put_totals(&totals)?;
        tracing::info!(recipient = %recipient, %amount, "points awarded");
        Ok(())
    }

    /// Burn `amount` points from `user`'s balance. Admin only.
    ///
    /// Fails if the balance cannot cover the deduction; a missing account
    /// has balance zero.
    pub fn deduct<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        ctx: &CallContext,
        user: &Identity,
        amount: PointsAmount,
    ) -> Result<(), PointsError> {
        if !auth.is_admin(&ctx.caller)? {
            return Err(PointsError::Unauthorized(format!(
                "{} may not deduct points",
                ctx.caller
            )));
        }
        if amount.is_zero() {
            return Err(PointsError::ZeroAmount);
        }
        let mut account = self.account_or_empty(user)?;
        let mut totals = self.store.get_totals()?;
        account.balance =
            account
                .balance
                .checked_sub(amount)
                .ok_or(PointsError::InsufficientBalance {
                    needed: amount.raw(),
                    available: account.balance.raw(),
                })?;
        account.total_spent = account
            .total_spent
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;
        account.last_activity = ctx.now;
        totals.deducted = totals
            .deducted
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;

        self.store.put_account(&account)?;
        self.store.put_totals(&totals)?;
        tracing::info!(user = %user, %amount, "points deducted");
        Ok(())
    }

    /// Move `amount` points from the caller's balance to `recipient`.
    ///
    /// Open to any caller; balance-neutral, so the conservation totals are
    /// untouched. Self-transfers are rejected.
    pub fn transfer(
        &self,
        ctx: &CallContext,
        recipient: &Identity,
        amount: PointsAmount,
    ) -> Result<(), PointsError> {
        if amount.is_zero() {
            return Err(PointsError::ZeroAmount);
        }
        if *recipient == ctx.caller {
            return Err(PointsError::SelfTransfer);
        }
        let mut sender = self.account_or_empty(&ctx.caller)?;
        let mut receiver = self.account_or_empty(recipient)?;
        sender.balance =
            sender
                .balance
                .checked_sub(amount)
                .ok_or(PointsError::InsufficientBalance {
                    needed: amount.raw(),
                    available: sender.balance.raw(),
                })?;
        sender.total_spent = sender
            .total_spent
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;
        sender.last_activity = ctx.now;
        receiver.balance = receiver
            .balance
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;
        receiver.total_earned = receiver
            .total_earned
            .checked_add(amount)
            .ok_or(PointsError::Overflow)?;
        receiver.last_activity = ctx.now;

        self.store.put_account(&sender)?;
        self.store.put_account(&receiver)?;
        tracing::debug!(from = %ctx.caller, to = %recipient, %amount, "points transferred");
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Current balance; a missing account reads as zero.
    pub fn balance_of(&self, identity: &Identity) -> Result<PointsAmount, PointsError> {
        Ok(self
            .store
            .get_account(identity)?
            .map(|a| a.balance)
            .unwrap_or(PointsAmount::ZERO))
    }

    /// Full activity record; a missing account reads as the zero-valued
    /// record.
    pub fn stats_of(&self, identity: &Identity) -> Result<PointsAccount, PointsError> {
        self.account_or_empty(identity)
    }

    /// The global conservation counters.
    pub fn totals(&self) -> Result<LedgerTotals, PointsError> {
        Ok(self.store.get_totals()?)
    }

    fn account_or_empty(&self, identity: &Identity) -> Result<PointsAccount, PointsError> {
        Ok(self
            .store
            .get_account(identity)?
            .unwrap_or_else(|| PointsAccount::empty(identity.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emblem_nullables::NullStore;
    use emblem_types::{Height, RegistryParams};

    fn test_identity(n: u8) -> Identity {
        Identity::new(format!("principal_{n}"))
    }

    fn ctx(caller: u8, height: u64) -> CallContext {
        CallContext::new(test_identity(caller), Height::new(height))
    }

    /// Root is principal_0 and acts as the points admin.
    fn setup() -> (AuthorizationRegistry<NullStore>, PointsLedger<NullStore>) {
        let store = NullStore::new();
        let auth = AuthorizationRegistry::new(test_identity(0), store.clone());
        (auth, PointsLedger::new(store))
    }

    #[test]
    fn test_award_creates_account_and_updates_stats() {
        let (auth, ledger) = setup();
        ledger
            .award(&auth, &ctx(0, 10), &test_identity(1), PointsAmount::new(100))
            .unwrap();
        let stats = ledger.stats_of(&test_identity(1)).unwrap();
        assert_eq!(stats.balance, PointsAmount::new(100));
        assert_eq!(stats.total_earned, PointsAmount::new(100));
        assert_eq!(stats.total_spent, PointsAmount::ZERO);
        assert_eq!(stats.last_activity, Height::new(10));
        assert_eq!(ledger.totals().unwrap().issued, PointsAmount::new(100));
    }

    #[test]
    fn test_award_requires_admin() {
        let (auth, ledger) = setup();
        let result = ledger.award(&auth, &ctx(5, 10), &test_identity(1), PointsAmount::new(100));
        assert!(matches!(result, Err(PointsError::Unauthorized(_))));
        assert_eq!(ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::ZERO);
    }

    #[test]
    fn test_award_rejects_zero_amount() {
        let (auth, ledger) = setup();
        let result = ledger.award(&auth, &ctx(0, 10), &test_identity(1), PointsAmount::ZERO);
        assert!(matches!(result, Err(PointsError::ZeroAmount)));
    }

    #[test]
    fn test_deduct_below_balance_fails_and_changes_nothing() {
        let (auth, ledger) = setup();
        ledger
            .award(&auth, &ctx(0, 10), &test_identity(1), PointsAmount::new(30))
            .unwrap();
        let result = ledger.deduct(&auth, &ctx(0, 20), &test_identity(1), PointsAmount::new(50));
        match result {
            Err(PointsError::InsufficientBalance { needed, available }) => {
                assert_eq!(needed, 50);
                assert_eq!(available, 30);
            }
            other => panic!("expected InsufficientBalance, got {other:?}"),
        }
        // The failed deduct is a no-op.
        let stats = ledger.stats_of(&test_identity(1)).unwrap();
        assert_eq!(stats.balance, PointsAmount::new(30));
        assert_eq!(stats.total_spent, PointsAmount::ZERO);
        assert_eq!(stats.last_activity, Height::new(10));
        assert_eq!(ledger.totals().unwrap().deducted, PointsAmount::ZERO);
    }

    #[test]
    fn test_deduct_moves_the_global_total() {
        let (auth, ledger) = setup();
        ledger
            .award(&auth, &ctx(0, 10), &test_identity(1), PointsAmount::new(100))
            .unwrap();
        ledger
            .deduct(&auth, &ctx(0, 20), &test_identity(1), PointsAmount::new(40))
            .unwrap();
        assert_eq!(ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(60));
        let totals = ledger.totals().unwrap();
        assert_eq!(totals.issued, PointsAmount::new(100));
        assert_eq!(totals.deducted, PointsAmount::new(40));
    }

    #[test]
    fn test_deduct_from_missing_account_is_insufficient() {
        let (auth, ledger) = setup();
        let result = ledger.deduct(&auth, &ctx(0, 10), &test_identity(9), PointsAmount::new(1));
        assert!(matches!(
            result,
            Err(PointsError::InsufficientBalance { available: 0, .. })
        ));
    }

    #[test]
    fn test_transfer_is_balance_neutral() {
        let (auth, ledger) = setup();
        ledger
            .award(&auth, &ctx(0, 10), &test_identity(1), PointsAmount::new(100))
            .unwrap();
        ledger
            .transfer(&ctx(1, 20), &test_identity(2), PointsAmount::new(35))
            .unwrap();

        assert_eq!(ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(65));
        assert_eq!(ledger.balance_of(&test_identity(2)).unwrap(), PointsAmount::new(35));
        // Only award moved the issued total; the transfer left it alone.
        let totals = ledger.totals().unwrap();
        assert_eq!(totals.issued, PointsAmount::new(100));
        assert_eq!(totals.deducted, PointsAmount::ZERO);

        let sender = ledger.stats_of(&test_identity(1)).unwrap();
        let receiver = ledger.stats_of(&test_identity(2)).unwrap();
        assert_eq!(sender.total_spent, PointsAmount::new(35));
        assert_eq!(receiver.total_earned, PointsAmount::new(35));
        assert_eq!(receiver.last_activity, Height::new(20));
    }

    #[test]
    fn test_transfer_to_self_is_rejected() {
        let (auth, ledger) = setup();
        ledger
            .award(&auth, &ctx(0, 10), &test_identity(1), PointsAmount::new(100))
            .unwrap();
        let result = ledger.transfer(&ctx(1, 20), &test_identity(1), PointsAmount::new(10));
        assert!(matches!(result, Err(PointsError::SelfTransfer)));
        assert_eq!(ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(100));
    }

    #[test]
    fn test_transfer_beyond_balance_is_rejected() {
        let (auth, ledger) = setup();
        ledger
            .award(&auth, &ctx(0, 10), &test_identity(1), PointsAmount::new(20))
            .unwrap();
        let result = ledger.transfer(&ctx(1, 20), &test_identity(2), PointsAmount::new(21));
        assert!(matches!(result, Err(PointsError::InsufficientBalance { .. })));
        assert_eq!(ledger.balance_of(&test_identity(1)).unwrap(), PointsAmount::new(20));
        assert_eq!(ledger.balance_of(&test_identity(2)).unwrap(), PointsAmount::ZERO);
    }

    #[test]
    fn test_missing_account_reads_as_zero_record() {
        let (_, ledger) = setup();
        let stats = ledger.stats_of(&test_identity(7)).unwrap();
        assert_eq!(stats, PointsAccount::empty(test_identity(7)));
        assert_eq!(ledger.balance_of(&test_identity(7)).unwrap(), PointsAmount::ZERO);
    }
}
