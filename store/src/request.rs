//! Verification request storage trait.

use crate::StoreError;
use emblem_types::{BadgeId, Height, Identity, RequestId};
use serde::{Deserialize, Serialize};

/// A third-party attestation record. One-shot write, immutable after
/// creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub id: RequestId,
    pub requester: Identity,
    pub badge_id: BadgeId,
    /// Set at creation; the request records that a verification happened,
    /// it does not gate anything.
    pub verified: bool,
    pub verified_at: Option<Height>,
    /// Opaque requester-supplied payload.
    pub data: Vec<u8>,
}

/// Trait for verification request storage operations.
pub trait RequestStore {
    fn get_request(&self, id: RequestId) -> Result<Option<VerificationRequest>, StoreError>;
    fn put_request(&self, record: &VerificationRequest) -> Result<(), StoreError>;
    fn request_count(&self) -> Result<u64, StoreError>;
}
