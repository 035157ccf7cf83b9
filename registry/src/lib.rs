//! Badge lifecycle and authorization for the Emblem ledger.
//!
//! Two engines live here. [`AuthorizationRegistry`] tracks the root owner
//! and the set of authorized issuers/admins and answers the capability
//! queries every other component performs. [`BadgeRegistry`] owns the badge
//! entity and its state machine (Active, terminally Revoked, with expiry
//! derived at query time), plus the append-only ownership history written
//! by its transfer operation.

pub mod authorization;
pub mod badge;
pub mod error;

pub use authorization::AuthorizationRegistry;
pub use badge::{BadgeRegistry, IssueRequest};
pub use error::RegistryError;
