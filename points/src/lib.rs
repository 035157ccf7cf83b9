//! Points ledger for the Emblem rewards economy.
//!
//! Tracks per-identity balances and activity statistics plus the global
//! conservation totals. Award and deduct are administrative; transfers move
//! points between identities without changing the global total.

pub mod error;
pub mod ledger;

pub use error::PointsError;
pub use ledger::PointsLedger;
