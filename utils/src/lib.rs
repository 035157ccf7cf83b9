//! Shared utilities for the Emblem ledger.

pub mod config;
pub mod logging;

pub use config::{load_params, ConfigError};
pub use logging::init_tracing;
