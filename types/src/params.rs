//! Registry parameters — input-validation limits for every mutating surface.
//!
//! Operators tune these per deployment; `emblem-utils` loads them from a
//! TOML file. Limits bound what a single command may write, not what the
//! ledger may hold.

use serde::{Deserialize, Serialize};

/// All tunable registry parameters.
///
/// Deserialization falls back to the defaults per field, so a config file
/// only needs to name the limits it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryParams {
    // ── Badge fields ─────────────────────────────────────────────────────
    /// Maximum byte length of a badge type tag.
    pub max_badge_type_len: usize,

    /// Maximum byte length of a badge title.
    pub max_title_len: usize,

    /// Maximum byte length of a badge description.
    pub max_description_len: usize,

    /// Maximum byte length of a badge metadata URI.
    pub max_metadata_uri_len: usize,

    // ── Authorization ────────────────────────────────────────────────────
    /// Maximum byte length of an issuer display name.
    pub max_issuer_name_len: usize,

    // ── Rewards ──────────────────────────────────────────────────────────
    /// Maximum byte length of a reward name.
    pub max_reward_name_len: usize,

    /// Maximum byte length of a reward description.
    pub max_reward_description_len: usize,

    // ── Verification ─────────────────────────────────────────────────────
    /// Maximum byte length of the opaque data attached to a verification
    /// request.
    pub max_request_data_len: usize,

    // ── Batch surfaces ───────────────────────────────────────────────────
    /// Maximum number of ids accepted by one batch call.
    pub max_batch_len: usize,
}

impl RegistryParams {
    /// Emblem defaults — the intended configuration for a live registry.
    pub fn emblem_defaults() -> Self {
        Self {
            max_badge_type_len: 64,
            max_title_len: 128,
            max_description_len: 1024,
            max_metadata_uri_len: 512,
            max_issuer_name_len: 128,
            max_reward_name_len: 128,
            max_reward_description_len: 1024,
            max_request_data_len: 4096,
            max_batch_len: 100,
        }
    }
}

/// Default is the Emblem live configuration.
impl Default for RegistryParams {
    fn default() -> Self {
        Self::emblem_defaults()
    }
}
