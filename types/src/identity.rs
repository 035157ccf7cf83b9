//! Opaque principal identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a caller, owner, or issuer.
///
/// Produced and authenticated by the execution environment; the core never
/// inspects it beyond equality and membership checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from a raw string.
    ///
    /// # Panics
    /// Panics if the string is empty — the environment never produces an
    /// empty principal.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(!s.is_empty(), "identity must be non-empty");
        Self(s)
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
