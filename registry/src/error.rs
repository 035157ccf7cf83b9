//! Registry-specific errors.

use emblem_store::StoreError;
use emblem_types::BadgeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("caller is not authorized: {0}")]
    Unauthorized(String),

    #[error("{0} not found")]
    NotFound(BadgeId),

    #[error("{0} is already revoked")]
    AlreadyRevoked(BadgeId),

    #[error("{0} has expired")]
    Expired(BadgeId),

    #[error("{0} cannot be transferred: badge is revoked")]
    TransferFailed(BadgeId),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("badge id space exhausted")]
    IdExhausted,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
