//! Per-call request context.

use crate::height::Height;
use crate::identity::Identity;

/// The ambient values of one operation, passed explicitly to every command
/// and height-dependent query: the verified caller identity and the current
/// height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Identity,
    pub now: Height,
}

impl CallContext {
    pub fn new(caller: Identity, now: Height) -> Self {
        Self { caller, now }
    }
}
