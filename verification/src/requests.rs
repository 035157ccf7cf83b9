//! The verification-request ledger.
//!
//! A verification request records that a third party checked a badge at a
//! particular height — an attestation event, not an access gate — so the
//! stored record is marked verified the moment it is written. Requests are
//! one-shot and immutable: a colliding id fails rather than silently
//! replacing an earlier attestation.

use crate::error::VerificationError;
use crate::service::VerificationService;
use emblem_store::{BadgeStore, RequestStore, VerificationRequest};
use emblem_types::{BadgeId, CallContext, RegistryParams, RequestId};

impl<S: BadgeStore + RequestStore> VerificationService<S> {
    /// Record a third-party attestation of `badge_id` under the
    /// caller-supplied `request_id`.
    pub fn create_verification_request(
        &self,
        params: &RegistryParams,
        ctx: &CallContext,
        request_id: RequestId,
        badge_id: BadgeId,
        data: Vec<u8>,
    ) -> Result<(), VerificationError> {
        if !self.store.badge_exists(badge_id)? {
            return Err(VerificationError::BadgeNotFound(badge_id));
        }
        if data.len() > params.max_request_data_len {
            return Err(VerificationError::InvalidInput(format!(
                "request data exceeds {} bytes",
                params.max_request_data_len
            )));
        }
        if self.store.get_request(request_id)?.is_some() {
            return Err(VerificationError::RequestExists(request_id));
        }

        let record = VerificationRequest {
            id: request_id,
            requester: ctx.caller.clone(),
            badge_id,
            verified: true,
            verified_at: Some(ctx.now),
            data,
        };
        self.store.put_request(&record)?;
        tracing::debug!(request = %request_id, badge = %badge_id, "verification request recorded");
        Ok(())
    }

    /// The stored request, if one exists.
    pub fn get_request(
        &self,
        request_id: RequestId,
    ) -> Result<Option<VerificationRequest>, VerificationError> {
        Ok(self.store.get_request(request_id)?)
    }
}
