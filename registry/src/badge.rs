//! Badge registry — issuance, transfer, revocation, expiry updates.
//!
//! The stored state machine has exactly one transition: Active → Revoked,
//! reached only through [`BadgeRegistry::revoke`]. Expiry is a derived
//! predicate of the current height and is evaluated wherever validity is
//! asked, never persisted — a badge can be Active in storage and expired
//! in every read view at the same time.
//!
//! Every command validates all preconditions against a consistent read of
//! the store, then writes; the first violated precondition returns before
//! the first `put`.

use crate::authorization::AuthorizationRegistry;
use crate::error::RegistryError;
use emblem_store::{
    BadgeRecord, BadgeStore, HistoryStore, IssuerStore, MetaStore, OwnershipEntry, NEXT_BADGE_ID,
};
use emblem_types::{BadgeId, CallContext, Height, Identity, RegistryParams, VerificationHash};

/// Arguments to a badge issuance.
#[derive(Clone, Debug)]
pub struct IssueRequest {
    pub recipient: Identity,
    pub badge_type: String,
    pub title: String,
    pub description: String,
    pub metadata_uri: String,
    pub expires_at: Option<Height>,
    pub verification_hash: VerificationHash,
}

/// The badge registry — sole writer of badge records and their ownership
/// history.
pub struct BadgeRegistry<S: BadgeStore + HistoryStore + MetaStore> {
    store: S,
}

impl<S: BadgeStore + HistoryStore + MetaStore> BadgeRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Issue a new badge to `request.recipient`.
    ///
    /// The caller must hold the issuer capability at this moment; later
    /// de-authorization does not invalidate the badge. The root owner is
    /// an administrative sentinel and cannot receive credentials. An
    /// expiry height, if given, must lie strictly in the future.
    pub fn issue<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        params: &RegistryParams,
        ctx: &CallContext,
        request: IssueRequest,
    ) -> Result<BadgeId, RegistryError> {
        if !auth.is_authorized(&ctx.caller)? {
            return Err(RegistryError::Unauthorized(format!(
                "{} is not an authorized issuer",
                ctx.caller
            )));
        }
        if request.recipient == *auth.root() {
            return Err(RegistryError::InvalidInput(
                "the root owner cannot hold credentials".into(),
            ));
        }
        check_len("badge type", &request.badge_type, params.max_badge_type_len)?;
        check_len("title", &request.title, params.max_title_len)?;
        check_len("description", &request.description, params.max_description_len)?;
        check_len("metadata URI", &request.metadata_uri, params.max_metadata_uri_len)?;
        if let Some(expires_at) = request.expires_at {
            if expires_at.reached_by(ctx.now) {
                return Err(RegistryError::InvalidInput(format!(
                    "expiry {expires_at} is not after the current height {}",
                    ctx.now
                )));
            }
        }

        let id = self.peek_next_id()?;
        let next = id.next().ok_or(RegistryError::IdExhausted)?;

        let record = BadgeRecord {
            id,
            owner: request.recipient,
            issuer: ctx.caller.clone(),
            badge_type: request.badge_type,
            title: request.title,
            description: request.description,
            metadata_uri: request.metadata_uri,
            issued_at: ctx.now,
            expires_at: request.expires_at,
            revoked: false,
            verification_hash: request.verification_hash,
        };
        self.store.put_badge(&record)?;
        self.store.put_counter(NEXT_BADGE_ID, next.raw())?;
        tracing::info!(badge = %id, issuer = %record.issuer, owner = %record.owner, "badge issued");
        Ok(id)
    }

    /// Transfer a badge to a new owner. Only the current owner may call.
    ///
    /// Legal while the badge is unrevoked; expiry is deliberately not
    /// consulted. Appends one ownership history entry keyed by the current
    /// height.
    pub fn transfer(
        &self,
        ctx: &CallContext,
        badge_id: BadgeId,
        new_owner: Identity,
    ) -> Result<(), RegistryError> {
        let mut badge = self
            .store
            .get_badge(badge_id)?
            .ok_or(RegistryError::NotFound(badge_id))?;
        if badge.owner != ctx.caller {
            return Err(RegistryError::Unauthorized(format!(
                "{} does not own {}",
                ctx.caller, badge_id
            )));
        }
        if !badge.standing(ctx.now).can_transfer() {
            return Err(RegistryError::TransferFailed(badge_id));
        }

        let entry = OwnershipEntry {
            previous_owner: badge.owner.clone(),
            new_owner: new_owner.clone(),
            transferred_at: ctx.now,
        };
        badge.owner = new_owner;
        self.store.put_badge(&badge)?;
        self.store.put_history_entry(badge_id, &entry)?;
        tracing::info!(
            badge = %badge_id,
            from = %entry.previous_owner,
            to = %entry.new_owner,
            "badge transferred"
        );
        Ok(())
    }

    /// Revoke a badge. Terminal: a revoked badge can never be un-revoked.
    ///
    /// The caller must be the badge's issuer, the root owner, or an
    /// authorized admin. An already-expired badge cannot be revoked — it
    /// is in its own terminal condition, and revocation would only muddy
    /// the audit trail. The optional reason is surfaced through the log;
    /// badges store no reason field.
    pub fn revoke<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        ctx: &CallContext,
        badge_id: BadgeId,
        reason: Option<&str>,
    ) -> Result<(), RegistryError> {
        let mut badge = self
            .store
            .get_badge(badge_id)?
            .ok_or(RegistryError::NotFound(badge_id))?;
        if badge.issuer != ctx.caller && !auth.is_admin(&ctx.caller)? {
            return Err(RegistryError::Unauthorized(format!(
                "{} is neither the issuer of {} nor an admin",
                ctx.caller, badge_id
            )));
        }
        if badge.revoked {
            return Err(RegistryError::AlreadyRevoked(badge_id));
        }
        if badge.is_expired(ctx.now) {
            return Err(RegistryError::Expired(badge_id));
        }

        badge.revoked = true;
        self.store.put_badge(&badge)?;
        tracing::info!(
            badge = %badge_id,
            by = %ctx.caller,
            reason = reason.unwrap_or("none given"),
            "badge revoked"
        );
        Ok(())
    }

    /// Change or clear a badge's expiry height. Issuer/admin only,
    /// forbidden once the badge is revoked or already expired.
    pub fn update_expiry<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        ctx: &CallContext,
        badge_id: BadgeId,
        new_expires_at: Option<Height>,
    ) -> Result<(), RegistryError> {
        let mut badge = self
            .store
            .get_badge(badge_id)?
            .ok_or(RegistryError::NotFound(badge_id))?;
        if badge.issuer != ctx.caller && !auth.is_admin(&ctx.caller)? {
            return Err(RegistryError::Unauthorized(format!(
                "{} is neither the issuer of {} nor an admin",
                ctx.caller, badge_id
            )));
        }
        if badge.revoked {
            return Err(RegistryError::AlreadyRevoked(badge_id));
        }
        if badge.is_expired(ctx.now) {
            return Err(RegistryError::Expired(badge_id));
        }
        if let Some(expires_at) = new_expires_at {
            if expires_at.reached_by(ctx.now) {
                return Err(RegistryError::InvalidInput(format!(
                    "expiry {expires_at} is not after the current height {}",
                    ctx.now
                )));
            }
        }

        badge.expires_at = new_expires_at;
        self.store.put_badge(&badge)?;
        Ok(())
    }

    /// Revoke a list of badges independently. A per-item failure does not
    /// abort the batch; each id's outcome is returned in order.
    pub fn batch_revoke<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        params: &RegistryParams,
        ctx: &CallContext,
        badge_ids: &[BadgeId],
        reason: Option<&str>,
    ) -> Result<Vec<Result<(), RegistryError>>, RegistryError> {
        if badge_ids.len() > params.max_batch_len {
            return Err(RegistryError::InvalidInput(format!(
                "batch of {} exceeds the limit of {}",
                badge_ids.len(),
                params.max_batch_len
            )));
        }
        Ok(badge_ids
            .iter()
            .map(|&id| self.revoke(auth, ctx, id, reason))
            .collect())
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// The stored record for a badge, if one exists.
    pub fn get_badge(&self, badge_id: BadgeId) -> Result<Option<BadgeRecord>, RegistryError> {
        Ok(self.store.get_badge(badge_id)?)
    }

    /// Number of badges ever issued.
    pub fn badge_count(&self) -> Result<u64, RegistryError> {
        Ok(self.store.badge_count()?)
    }

    /// Every recorded transfer of a badge, ordered by height.
    pub fn ownership_history(
        &self,
        badge_id: BadgeId,
    ) -> Result<Vec<OwnershipEntry>, RegistryError> {
        Ok(self.store.get_history(badge_id)?)
    }

    /// The id the next issuance will be assigned.
    fn peek_next_id(&self) -> Result<BadgeId, RegistryError> {
        let raw = self.store.get_counter(NEXT_BADGE_ID)?;
        if raw == 0 {
            Ok(BadgeId::FIRST)
        } else {
            Ok(BadgeId::new(raw))
        }
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), RegistryError> {
    if value.len() > max {
        return Err(RegistryError::InvalidInput(format!(
            "{field} exceeds {max} bytes"
        )));
    }
    Ok(())
}
