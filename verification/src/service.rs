//! The verification service — side-effect-free badge queries.

use crate::error::VerificationError;
use emblem_registry::AuthorizationRegistry;
use emblem_store::{BadgeStore, IssuerStore, RequestStore};
use emblem_types::{BadgeId, Height, Identity, RegistryParams};

/// Point-in-time authenticity facts about a badge.
///
/// For a missing badge every flag takes its worst-case value — the report
/// says "unverifiable", not "fine". Callers must branch on `exists` before
/// trusting the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticityReport {
    pub exists: bool,
    pub owner: Option<Identity>,
    pub issuer: Option<Identity>,
    pub revoked: bool,
    pub expired: bool,
    /// Whether the issuer holds the capability *now*; historical badges
    /// from a since-deauthorized issuer report `false` here while staying
    /// valid records.
    pub issuer_authorized: bool,
}

impl AuthenticityReport {
    /// The conservative sentinel for a badge id that resolves to nothing.
    fn missing() -> Self {
        Self {
            exists: false,
            owner: None,
            issuer: None,
            revoked: true,
            expired: true,
            issuer_authorized: false,
        }
    }
}

/// One badge's validity verdict inside a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidityRecord {
    pub badge_id: BadgeId,
    pub exists: bool,
    pub revoked: bool,
    pub expired: bool,
    /// `!revoked` and not past expiry; `false` for missing ids.
    pub valid: bool,
}

/// The verification service. Holds the badge and request stores; the
/// authorization registry is consulted per query for the point-in-time
/// issuer capability.
pub struct VerificationService<S: BadgeStore + RequestStore> {
    pub(crate) store: S,
}

impl<S: BadgeStore + RequestStore> VerificationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether `claimed` currently owns the badge. Missing badges own
    /// nothing.
    pub fn verify_ownership(
        &self,
        badge_id: BadgeId,
        claimed: &Identity,
    ) -> Result<bool, VerificationError> {
        Ok(self
            .store
            .get_badge(badge_id)?
            .is_some_and(|b| b.owner == *claimed))
    }

    /// Full authenticity facts about one badge at `now`.
    pub fn verify_authenticity<A: IssuerStore>(
        &self,
        auth: &AuthorizationRegistry<A>,
        badge_id: BadgeId,
        now: Height,
    ) -> Result<AuthenticityReport, VerificationError> {
        let Some(badge) = self.store.get_badge(badge_id)? else {
            return Ok(AuthenticityReport::missing());
        };
        let issuer_authorized = auth.is_authorized(&badge.issuer)?;
        Ok(AuthenticityReport {
            exists: true,
            revoked: badge.revoked,
            expired: badge.is_expired(now),
            issuer_authorized,
            owner: Some(badge.owner),
            issuer: Some(badge.issuer),
        })
    }

    /// Validity verdicts for a list of badges at `now`. Missing ids yield
    /// the sentinel with `valid = false`; the batch never fails per-item.
    pub fn batch_verify(
        &self,
        params: &RegistryParams,
        badge_ids: &[BadgeId],
        now: Height,
    ) -> Result<Vec<ValidityRecord>, VerificationError> {
        if badge_ids.len() > params.max_batch_len {
            return Err(VerificationError::InvalidInput(format!(
                "batch of {} exceeds the limit of {}",
                badge_ids.len(),
                params.max_batch_len
            )));
        }
        badge_ids
            .iter()
            .map(|&badge_id| {
                let record = match self.store.get_badge(badge_id)? {
                    Some(badge) => {
                        let standing = badge.standing(now);
                        ValidityRecord {
                            badge_id,
                            exists: true,
                            revoked: badge.revoked,
                            expired: badge.is_expired(now),
                            valid: standing.is_valid(),
                        }
                    }
                    None => ValidityRecord {
                        badge_id,
                        exists: false,
                        revoked: true,
                        expired: true,
                        valid: false,
                    },
                };
                Ok(record)
            })
            .collect()
    }
}
