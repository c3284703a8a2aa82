use thiserror::Error;
use weft_types::ChainId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("gateway call failed: {0}")]
    CallFailed(String),

    #[error("gateway does not know {0}")]
    ChainUnknown(ChainId),

    #[error("gateway rejected fee payment of {amount} raw: {reason}")]
    PaymentRejected { amount: u128, reason: String },
}
