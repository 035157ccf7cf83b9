//! Points-ledger-specific errors.

use emblem_registry::RegistryError;
use emblem_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointsError {
    #[error("caller is not authorized: {0}")]
    Unauthorized(String),

    #[error("points amount must be non-zero")]
    ZeroAmount,

    #[error("cannot transfer points to self")]
    SelfTransfer,

    #[error("insufficient points: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("points overflow")]
    Overflow,

    #[error("authorization check failed: {0}")]
    Authorization(#[from] RegistryError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
