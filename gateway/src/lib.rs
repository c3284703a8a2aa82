//! Typed interface to the external bridge gateway.
//!
//! The gateway is the cross-chain relay/validation service that carries
//! bridge messages between chains. Its internals (validator consensus,
//! message ordering, fee markets) are out of scope here; this crate pins
//! down exactly the operations the token consumes, as a trait with a single
//! production implementation supplied at construction.

pub mod error;

pub use error::GatewayError;

use weft_types::{ChainId, RequestId, TokenAmount, WalletAddress};

/// The gateway operations the token depends on.
///
/// `project` is the token contract's own address — the gateway keys its
/// per-project configuration (enabled chains, payment token, fees) on it.
pub trait GatewayClient {
    /// Whether the gateway will carry messages for `project` to `chain`.
    ///
    /// Checked before any burn; a disabled or unknown destination aborts the
    /// whole request with no state change.
    fn is_destination_chain_enabled(
        &self,
        project: &WalletAddress,
        chain: ChainId,
    ) -> Result<bool, GatewayError>;

    /// The gateway's current canonical address.
    ///
    /// Side-effect-free; used only to detect gateway migration. The token
    /// compares this against its cached address on every outbound request.
    fn current_gateway_address(&self) -> Result<WalletAddress, GatewayError>;

    /// Submit an outbound bridge request.
    ///
    /// Called after the tokens are already custodied for destruction; the
    /// token needs no synchronous success signal beyond this call not
    /// failing. The returned id is for off-chain correlation only.
    fn request_token_bridge(
        &mut self,
        to_chain: ChainId,
        recipient: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<RequestId, GatewayError>;

    /// The asset the gateway charges relay fees in, for `project`.
    fn payment_token(&self, project: &WalletAddress) -> Result<WalletAddress, GatewayError>;

    /// The relay fee for bridging from `project` to `dest_chain`.
    fn request_fee(
        &self,
        dest_chain: ChainId,
        project: &WalletAddress,
    ) -> Result<TokenAmount, GatewayError>;

    /// Pull a previously approved fee payment.
    ///
    /// The caller has already approved exactly `amount` of the payment token
    /// to the gateway; `pay` pulls it.
    fn pay(&mut self, amount: TokenAmount) -> Result<(), GatewayError>;
}
