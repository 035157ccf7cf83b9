//! Issuer storage trait.

use crate::StoreError;
use emblem_types::{Height, Identity};
use serde::{Deserialize, Serialize};

/// Authorization state of one issuer/admin identity.
///
/// The root owner is implicitly authorized and never stored as a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerRecord {
    pub identity: Identity,
    /// Display name supplied at authorization time.
    pub name: String,
    /// False after de-authorization; the record itself is kept.
    pub authorized: bool,
    pub authorized_at: Height,
}

/// Trait for issuer storage operations.
pub trait IssuerStore {
    fn get_issuer(&self, identity: &Identity) -> Result<Option<IssuerRecord>, StoreError>;
    fn put_issuer(&self, record: &IssuerRecord) -> Result<(), StoreError>;
    fn issuer_count(&self) -> Result<u64, StoreError>;
}
