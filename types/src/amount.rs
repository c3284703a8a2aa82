//! Token amount type.
//!
//! Amounts are fixed-point integers (u128) to avoid floating-point errors.
//! The smallest unit is 1 raw. All ledger arithmetic on amounts is checked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of WEFT (or of the gateway's payment asset), in raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Denomination formatting is a wallet concern; the protocol speaks raw.
        write!(f, "{} raw", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_sub_underflow_is_none() {
        assert_eq!(TokenAmount::new(1).checked_sub(TokenAmount::new(2)), None);
    }

    #[test]
    fn checked_add_overflow_is_none() {
        assert_eq!(
            TokenAmount::new(u128::MAX).checked_add(TokenAmount::new(1)),
            None
        );
    }
}
