//! Relay-fee settlement.
//!
//! When a destination chain charges a relay fee, the gateway expects to pull
//! it from the contract's own balance of the payment token. The approval
//! granted is exactly the required amount, never unbounded — if the gateway
//! address is later found compromised before a migration is detected, the
//! exposure is one fee.

use thiserror::Error;
use weft_gateway::{GatewayClient, GatewayError};
use weft_ledger::FungibleLedger;
use weft_types::{TokenAmount, WalletAddress};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    /// The contract does not hold enough of the payment asset. Funding it is
    /// an operational responsibility, not a protocol one.
    #[error("contract holds {available} of the payment token, fee is {needed}")]
    Underfunded { needed: u128, available: u128 },

    /// The payment-token lookup failed.
    #[error("gateway: {0}")]
    Gateway(GatewayError),

    #[error("gateway rejected the payment: {0}")]
    Rejected(GatewayError),
}

/// Look up the payment token, approve the gateway for exactly `amount` of
/// it, then ask the gateway to pull. On rejection the approval is restored
/// to its prior value and the caller aborts the delivery. Returns the
/// payment token address for the settlement event.
pub(crate) fn settle<P, G>(
    payment_ledger: &mut P,
    gateway: &mut G,
    contract: &WalletAddress,
    collector: &WalletAddress,
    amount: TokenAmount,
) -> Result<WalletAddress, FeeError>
where
    P: FungibleLedger,
    G: GatewayClient,
{
    let payment_token = gateway.payment_token(contract).map_err(FeeError::Gateway)?;

    let available = payment_ledger.balance_of(contract);
    if available < amount {
        return Err(FeeError::Underfunded {
            needed: amount.raw(),
            available: available.raw(),
        });
    }

    let allowance_before = payment_ledger.allowance(contract, collector);
    payment_ledger.approve(contract, collector, amount);
    if let Err(err) = gateway.pay(amount) {
        payment_ledger.approve(contract, collector, allowance_before);
        return Err(FeeError::Rejected(err));
    }
    Ok(payment_token)
}
