//! Inbound bridge delivery — the destination half of a bridge operation.
//!
//! Accepted only from the authoritative gateway address. `tx_id` is carried
//! for observability and for the duplicate gate; the token never interprets
//! it beyond equality.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use weft_types::{ChainId, TokenAmount, TxId, WalletAddress};

/// A message from the gateway instructing a mint on this chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeDelivery {
    pub tx_id: TxId,
    pub source_chain: ChainId,
    pub recipient: WalletAddress,
    pub amount: TokenAmount,
    /// Relay fee the gateway charges for this delivery, in the payment
    /// token. Zero means no settlement.
    pub payment_required: TokenAmount,
}

impl BridgeDelivery {
    pub fn new(
        tx_id: TxId,
        source_chain: ChainId,
        recipient: WalletAddress,
        amount: TokenAmount,
        payment_required: TokenAmount,
    ) -> Self {
        Self {
            tx_id,
            source_chain,
            recipient,
            amount,
            payment_required,
        }
    }

    /// Stateless shape checks, run after the identity gate.
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.amount.is_zero() {
            return Err(BridgeError::ZeroAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_rejected() {
        let delivery = BridgeDelivery::new(
            TxId::new(1),
            ChainId::new(1),
            WalletAddress::new("weft_recipient"),
            TokenAmount::ZERO,
            TokenAmount::ZERO,
        );
        assert_eq!(delivery.validate(), Err(BridgeError::ZeroAmount));
    }
}
