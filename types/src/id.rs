//! Opaque identifiers assigned by the gateway.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier carried by an inbound bridge delivery.
///
/// Assigned by the gateway on the source side; the token records processed
/// values to reject replays but never interprets the bits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxId(u128);

impl TxId {
    pub fn new(id: u128) -> Self {
        Self(id)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({:#x})", self.0)
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034x}", self.0)
    }
}

/// Identifier the gateway returns for an accepted outbound bridge request.
///
/// Purely for off-chain correlation; the token keeps no record of it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(u128);

impl RequestId {
    pub fn new(id: u128) -> Self {
        Self(id)
    }

    pub fn as_u128(&self) -> u128 {
        self.0
    }
}

impl fmt::Debug for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestId({:#x})", self.0)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#034x}", self.0)
    }
}
