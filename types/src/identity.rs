//! Immutable token identity.

use serde::{Deserialize, Serialize};

/// Name and symbol of the token, fixed at deployment on every chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub name: String,
    pub symbol: String,
}

impl TokenIdentity {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

impl Default for TokenIdentity {
    fn default() -> Self {
        Self::new("Weft", "WEFT")
    }
}
