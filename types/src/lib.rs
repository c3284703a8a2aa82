//! Fundamental types for the Weft bridged token.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, chain and delivery identifiers, token amounts,
//! timestamps, the token identity, and bridge parameters.

pub mod address;
pub mod amount;
pub mod chain;
pub mod id;
pub mod identity;
pub mod params;
pub mod time;

pub use address::{AddressError, WalletAddress};
pub use amount::TokenAmount;
pub use chain::ChainId;
pub use id::{RequestId, TxId};
pub use identity::TokenIdentity;
pub use params::BridgeParams;
pub use time::Timestamp;
