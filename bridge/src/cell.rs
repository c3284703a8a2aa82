//! Versioned gateway-address cell.
//!
//! The gateway address is the only mutable shared state in the protocol.
//! It is refreshed lazily: each outbound request asks the gateway for its
//! canonical address and records a change here; the inbound path only reads.
//! Under the ledger's serialized execution this gives a single writer — the
//! outbound call currently executing — with no further exclusion needed.
//!
//! A configurable activation delay keeps the previous address authoritative
//! for the inbound path until a scheduled migration's `effective_at`
//! elapses. With the default zero delay a newly observed address is
//! authoritative in the same call that observes it.

use crate::events::BridgeEvent;
use serde::{Deserialize, Serialize};
use weft_types::{Timestamp, WalletAddress};

/// A migration that has been observed but is not yet authoritative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMigration {
    pub address: WalletAddress,
    pub effective_at: Timestamp,
}

/// The cached gateway identity: active address, activation counter, and an
/// optional pending migration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayCell {
    active: WalletAddress,
    version: u64,
    pending: Option<PendingMigration>,
}

impl GatewayCell {
    /// Cell trusting `initial` from construction (version 0, nothing pending).
    pub fn new(initial: WalletAddress) -> Self {
        Self {
            active: initial,
            version: 0,
            pending: None,
        }
    }

    /// The address the inbound authorization check compares against at `now`.
    ///
    /// A pending migration counts once its `effective_at` has elapsed, even
    /// if no outbound call has promoted it yet. Pure read — the inbound path
    /// never writes the cell.
    pub fn authoritative_address(&self, now: Timestamp) -> &WalletAddress {
        match &self.pending {
            Some(p) if p.effective_at <= now => &p.address,
            _ => &self.active,
        }
    }

    /// The freshest known gateway address (pending first). Outgoing requests
    /// see a change immediately.
    pub fn newest_known(&self) -> &WalletAddress {
        self.pending
            .as_ref()
            .map(|p| &p.address)
            .unwrap_or(&self.active)
    }

    /// Number of completed migrations since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Record the address the gateway reports, called on the outbound path.
    ///
    /// Promotes a due pending migration first, then schedules (or, with a
    /// zero delay, activates) a change if `reported` differs from the newest
    /// known address. Returns the audit events for every change made.
    pub fn observe(
        &mut self,
        reported: &WalletAddress,
        delay_secs: u64,
        now: Timestamp,
    ) -> Vec<BridgeEvent> {
        let mut events = Vec::new();
        self.promote_due(now, &mut events);

        if reported == self.newest_known() {
            return events;
        }

        if *reported == self.active {
            // The gateway reverted to the address we already trust; drop the
            // scheduled migration.
            let cancelled = self.pending.take().expect("pending differs from active");
            events.push(BridgeEvent::GatewayMigrationCancelled {
                cancelled: cancelled.address,
            });
        } else if delay_secs == 0 {
            self.activate(reported.clone(), &mut events);
        } else {
            let effective_at = now.plus_secs(delay_secs);
            events.push(BridgeEvent::GatewayMigrationScheduled {
                from: self.active.clone(),
                to: reported.clone(),
                effective_at,
            });
            self.pending = Some(PendingMigration {
                address: reported.clone(),
                effective_at,
            });
        }
        events
    }

    fn promote_due(&mut self, now: Timestamp, events: &mut Vec<BridgeEvent>) {
        if let Some(p) = &self.pending {
            if p.effective_at <= now {
                let address = self.pending.take().expect("checked above").address;
                self.activate(address, events);
            }
        }
    }

    fn activate(&mut self, to: WalletAddress, events: &mut Vec<BridgeEvent>) {
        self.version += 1;
        events.push(BridgeEvent::GatewayMigrated {
            from: std::mem::replace(&mut self.active, to.clone()),
            to,
            version: self.version,
        });
        self.pending = None;
    }
}
