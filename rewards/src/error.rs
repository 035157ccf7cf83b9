//! Reward-specific errors.

use emblem_registry::RegistryError;
use emblem_store::StoreError;
use emblem_types::RewardId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewardError {
    #[error("caller is not authorized: {0}")]
    Unauthorized(String),

    #[error("{0} not found")]
    NotFound(RewardId),

    #[error("{id} is unavailable: {reason}")]
    RewardUnavailable { id: RewardId, reason: String },

    #[error("insufficient points: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("reward id space exhausted")]
    IdExhausted,

    #[error("points overflow")]
    Overflow,

    #[error("authorization check failed: {0}")]
    Authorization(#[from] RegistryError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
