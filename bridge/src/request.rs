//! Outbound bridge request — an ephemeral intent.
//!
//! Created, validated, and consumed within a single `request_bridge` call;
//! the contract keeps no record of it afterward. Uniqueness and ordering of
//! requests are entirely the gateway's concern.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use weft_types::{ChainId, TokenAmount, WalletAddress};

/// Intent to move `amount` to `recipient` on `to_chain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub to_chain: ChainId,
    pub recipient: WalletAddress,
    pub amount: TokenAmount,
}

impl BridgeRequest {
    pub fn new(to_chain: ChainId, recipient: WalletAddress, amount: TokenAmount) -> Self {
        Self {
            to_chain,
            recipient,
            amount,
        }
    }

    /// Stateless shape checks. Stateful checks (enablement, balance,
    /// allowance) happen inside the request lifecycle.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.amount.is_zero() {
            return Err(BridgeError::ZeroAmount);
        }
        Ok(())
    }
}
