//! Fundamental types for the Emblem badge ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: principal identities, badge and reward ids, heights, points
//! amounts, verification hashes, derived badge standing, and registry
//! parameters.

pub mod context;
pub mod hash;
pub mod height;
pub mod id;
pub mod identity;
pub mod params;
pub mod points;
pub mod standing;

pub use context::CallContext;
pub use hash::{RequestId, VerificationHash};
pub use height::Height;
pub use id::{BadgeId, RewardId};
pub use identity::Identity;
pub use params::RegistryParams;
pub use points::PointsAmount;
pub use standing::BadgeStanding;
