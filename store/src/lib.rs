//! Abstract storage traits for the Emblem badge ledger.
//!
//! Every storage backend (a transactional KV store in production, the
//! in-memory nullable for testing) implements these traits. The engine
//! crates depend only on the traits.
//!
//! All methods take `&self`; implementations provide interior mutability or
//! wrap a transactional handle. The backend contract is atomic commit per
//! request: the engines stage every write after the last validation, so a
//! rejected command never reaches a `put_*` call.

pub mod badge;
pub mod error;
pub mod history;
pub mod issuer;
pub mod meta;
pub mod points;
pub mod redemption;
pub mod request;
pub mod reward;

pub use badge::{BadgeRecord, BadgeStore};
pub use error::StoreError;
pub use history::{HistoryStore, OwnershipEntry};
pub use issuer::{IssuerRecord, IssuerStore};
pub use meta::{MetaStore, NEXT_BADGE_ID, NEXT_REWARD_ID};
pub use points::{LedgerTotals, PointsAccount, PointsStore};
pub use redemption::{RedemptionRecord, RedemptionStore};
pub use request::{RequestStore, VerificationRequest};
pub use reward::{RewardRecord, RewardStore};
