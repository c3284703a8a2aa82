//! Bridge protocol parameters.

use serde::{Deserialize, Serialize};

/// Tunable parameters fixed by the deployer of one token contract instance.
///
/// Serde-derived so hosts can embed them in whatever configuration format
/// they already use.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BridgeParams {
    /// Seconds before a newly observed gateway address becomes authoritative
    /// for the inbound (mint) path. Outgoing requests always use the newest
    /// address. `0` activates a migration in the same call that observes it.
    pub migration_delay_secs: u64,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            migration_delay_secs: 0,
        }
    }
}
