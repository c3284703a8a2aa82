//! Chain identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one chain/ledger the token is deployed on.
///
/// The numbering scheme is the gateway's; the token treats the value as
/// opaque and only compares it for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChainId(u64);

impl ChainId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain-{}", self.0)
    }
}
