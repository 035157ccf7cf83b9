//! Authorization registry — root owner and the authorized issuer/admin set.
//!
//! One set serves both the "issuer" and "admin" capabilities; the root
//! owner holds every capability implicitly and is never stored as an
//! entry. De-authorization flips the record's flag but keeps it, so a
//! re-authorization is an upsert, not a re-creation.

use crate::error::RegistryError;
use emblem_store::{IssuerRecord, IssuerStore};
use emblem_types::{CallContext, Identity, RegistryParams};

/// Capability oracle for every mutating surface of the ledger.
pub struct AuthorizationRegistry<S: IssuerStore> {
    root: Identity,
    store: S,
}

impl<S: IssuerStore> AuthorizationRegistry<S> {
    pub fn new(root: Identity, store: S) -> Self {
        Self { root, store }
    }

    /// The root owner identity fixed at construction.
    pub fn root(&self) -> &Identity {
        &self.root
    }

    /// Authorize an identity as issuer/admin. Root-owner only.
    ///
    /// Idempotent upsert: an entry that is already authorized keeps its
    /// original `authorized_at` and only refreshes the display name.
    pub fn authorize(
        &self,
        params: &RegistryParams,
        ctx: &CallContext,
        issuer: Identity,
        name: String,
    ) -> Result<(), RegistryError> {
        self.require_root(ctx)?;
        if name.len() > params.max_issuer_name_len {
            return Err(RegistryError::InvalidInput(format!(
                "issuer name exceeds {} bytes",
                params.max_issuer_name_len
            )));
        }

        let record = match self.store.get_issuer(&issuer)? {
            Some(mut existing) => {
                existing.name = name;
                if !existing.authorized {
                    existing.authorized = true;
                    existing.authorized_at = ctx.now;
                }
                existing
            }
            None => IssuerRecord {
                identity: issuer.clone(),
                name,
                authorized: true,
                authorized_at: ctx.now,
            },
        };
        self.store.put_issuer(&record)?;
        tracing::info!(issuer = %issuer, at = %ctx.now, "issuer authorized");
        Ok(())
    }

    /// Withdraw an identity's issuer/admin capability. Root-owner only.
    ///
    /// A missing entry is a no-op; past issuances stay valid either way.
    pub fn deauthorize(&self, ctx: &CallContext, issuer: &Identity) -> Result<(), RegistryError> {
        self.require_root(ctx)?;
        if let Some(mut record) = self.store.get_issuer(issuer)? {
            record.authorized = false;
            self.store.put_issuer(&record)?;
            tracing::info!(issuer = %issuer, at = %ctx.now, "issuer deauthorized");
        }
        Ok(())
    }

    /// Whether `identity` currently holds the issuer capability.
    /// Absent entries resolve to `false`; the root is always authorized.
    pub fn is_authorized(&self, identity: &Identity) -> Result<bool, RegistryError> {
        if *identity == self.root {
            return Ok(true);
        }
        Ok(self
            .store
            .get_issuer(identity)?
            .is_some_and(|r| r.authorized))
    }

    /// Whether `identity` may perform administrative operations (award or
    /// deduct points, create rewards, revoke on behalf of issuers).
    pub fn is_admin(&self, identity: &Identity) -> Result<bool, RegistryError> {
        self.is_authorized(identity)
    }

    /// The stored record for an issuer, if one exists.
    pub fn get_issuer(&self, identity: &Identity) -> Result<Option<IssuerRecord>, RegistryError> {
        Ok(self.store.get_issuer(identity)?)
    }

    fn require_root(&self, ctx: &CallContext) -> Result<(), RegistryError> {
        if ctx.caller != self.root {
            return Err(RegistryError::Unauthorized(format!(
                "{} is not the root owner",
                ctx.caller
            )));
        }
        Ok(())
    }
}
