//! Serializable protocol state.
//!
//! Everything the engine mutates lives here so a host can persist it across
//! restarts: the gateway cell and the processed-delivery set. Losing the
//! processed set silently reopens the replay window, so the snapshot is the
//! durability unit — not an optimization.

use crate::cell::GatewayCell;
use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use weft_types::{TxId, WalletAddress};

/// The mutable state of one token contract instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeState {
    pub cell: GatewayCell,
    /// Deliveries already minted on this chain. Grows with genuine
    /// deliveries only; a BTreeSet keeps snapshot encoding deterministic.
    pub processed: BTreeSet<TxId>,
}

impl BridgeState {
    pub fn new(initial_gateway: WalletAddress) -> Self {
        Self {
            cell: GatewayCell::new(initial_gateway),
            processed: BTreeSet::new(),
        }
    }

    /// Encode for persistence.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BridgeError> {
        bincode::serialize(self).map_err(|e| BridgeError::Snapshot(e.to_string()))
    }

    /// Decode a persisted snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BridgeError> {
        bincode::deserialize(bytes).map_err(|e| BridgeError::Snapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_roundtrip() {
        let mut state = BridgeState::new(WalletAddress::new("weft_gw"));
        state.processed.insert(TxId::new(7));
        state.processed.insert(TxId::new(9));

        let restored = BridgeState::from_bytes(&state.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            BridgeState::from_bytes(b"not a snapshot"),
            Err(BridgeError::Snapshot(_))
        ));
    }
}
