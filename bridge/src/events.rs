//! Bridge events — the append-only observability record.
//!
//! The engine appends one event per completed state change; hosts drain the
//! log into whatever sink they run (chain event log, websocket fan-out,
//! audit store). Events are data only — no delivery guarantees are attached
//! here.

use serde::{Deserialize, Serialize};
use weft_types::{ChainId, Timestamp, TokenAmount, TxId, WalletAddress};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A holder's tokens were burned and the outbound request submitted.
    BridgeRequested {
        to_chain: ChainId,
        recipient: WalletAddress,
        amount: TokenAmount,
    },

    /// An inbound delivery was authorized, minted, and (if required) paid for.
    BridgeProcessed {
        tx_id: TxId,
        source_chain: ChainId,
        recipient: WalletAddress,
        amount: TokenAmount,
        payment_required: TokenAmount,
    },

    /// The gateway reported a new canonical address; it becomes authoritative
    /// for the inbound path at `effective_at`.
    GatewayMigrationScheduled {
        from: WalletAddress,
        to: WalletAddress,
        effective_at: Timestamp,
    },

    /// A scheduled migration became moot — the gateway reports the address
    /// we already trust.
    GatewayMigrationCancelled { cancelled: WalletAddress },

    /// The cached gateway address changed. `version` counts activations
    /// since construction.
    GatewayMigrated {
        from: WalletAddress,
        to: WalletAddress,
        version: u64,
    },

    /// A relay fee was approved and paid to the gateway.
    FeeSettled {
        payment_token: WalletAddress,
        amount: TokenAmount,
    },
}
