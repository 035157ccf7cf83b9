//! Verification-specific errors.

use emblem_registry::RegistryError;
use emblem_store::StoreError;
use emblem_types::{BadgeId, RequestId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("{0} not found")]
    BadgeNotFound(BadgeId),

    #[error("verification request {0} already exists")]
    RequestExists(RequestId),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("authorization check failed: {0}")]
    Authorization(#[from] RegistryError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
