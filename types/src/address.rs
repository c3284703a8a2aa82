//! Wallet address type with `weft_` prefix.
//!
//! Addresses identify token holders, bridge recipients, the token contract
//! itself, and the gateway. The bridge never derives addresses — it only
//! compares and forwards them — so the type is an opaque validated string.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A Weft address, always prefixed with `weft_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

/// Error parsing a wallet address from a raw string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with `{prefix}`: {0}", prefix = WalletAddress::PREFIX)]
    MissingPrefix(String),

    #[error("address has an empty body")]
    EmptyBody,
}

impl WalletAddress {
    /// The standard prefix for all Weft addresses.
    pub const PREFIX: &'static str = "weft_";

    /// Create a new wallet address from a raw string.
    ///
    /// # Panics
    /// Panics if the string is not a well-formed address. Use [`parse`] for
    /// fallible construction from untrusted input.
    ///
    /// [`parse`]: WalletAddress::parse
    pub fn new(raw: impl Into<String>) -> Self {
        Self::parse(raw).expect("malformed wallet address")
    }

    /// Parse a wallet address, validating the prefix and body.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AddressError> {
        let s = raw.into();
        if !s.starts_with(Self::PREFIX) {
            return Err(AddressError::MissingPrefix(s));
        }
        if s.len() == Self::PREFIX.len() {
            return Err(AddressError::EmptyBody);
        }
        Ok(Self(s))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
