use crate::fees::FeeError;
use thiserror::Error;
use weft_gateway::GatewayError;
use weft_ledger::LedgerError;
use weft_types::{ChainId, TxId, WalletAddress};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The gateway will not carry messages to this chain. Nothing was burned.
    #[error("destination {0} is not enabled for bridging")]
    DestinationNotEnabled(ChainId),

    #[error("bridge amount must be non-zero")]
    ZeroAmount,

    /// Inbound caller is not the authoritative gateway address. Fatal to the
    /// call; never retried here.
    #[error("caller {caller} is not the gateway")]
    Unauthorized { caller: WalletAddress },

    /// Delivery id already processed on this chain.
    #[error("delivery {0} was already processed")]
    DuplicateDelivery(TxId),

    /// A gateway call failed. On the request path this aborts the staged
    /// burn, leaving the holder's balance exactly as before the call.
    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    #[error("ledger: {0}")]
    Ledger(#[from] LedgerError),

    /// Fee settlement failed; the whole delivery is aborted and no tokens
    /// were minted.
    #[error("fee settlement: {0}")]
    FeeSettlement(#[from] FeeError),

    #[error("state snapshot: {0}")]
    Snapshot(String),
}
