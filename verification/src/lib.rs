//! Badge verification for the Emblem ledger.
//!
//! Pure read computations over the badge registry and the authorization
//! registry — ownership checks, authenticity reports, batch validity — plus
//! the side ledger of third-party verification requests. Missing badges
//! yield conservative sentinel records, never errors.

pub mod error;
pub mod requests;
pub mod service;

pub use error::VerificationError;
pub use service::{AuthenticityReport, ValidityRecord, VerificationService};
