//! The bridge engine — one token contract instance on one chain.

use crate::custody::{StagedBurn, StagedMint};
use crate::delivery::BridgeDelivery;
use crate::error::BridgeError;
use crate::events::BridgeEvent;
use crate::fees;
use crate::request::BridgeRequest;
use crate::state::BridgeState;
use weft_gateway::GatewayClient;
use weft_ledger::FungibleLedger;
use weft_types::{
    BridgeParams, ChainId, RequestId, Timestamp, TokenAmount, TokenIdentity, WalletAddress,
};

/// Payment token and amount a holder should expect a destination chain to
/// charge, per the gateway's current schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeQuote {
    pub payment_token: WalletAddress,
    pub amount: TokenAmount,
}

/// One token contract instance: immutable identity plus the mutable bridge
/// state, wired to the single gateway client supplied at construction.
///
/// Within one chain the host invokes operations one at a time (the ledger's
/// serialized execution); the engine assumes no interleaving mid-call.
pub struct BridgeEngine<G> {
    identity: TokenIdentity,
    /// The contract's own address — custody account on the ledger and the
    /// `project` identity presented to the gateway.
    contract: WalletAddress,
    chain: ChainId,
    params: BridgeParams,
    gateway: G,
    state: BridgeState,
    events: Vec<BridgeEvent>,
}

impl<G: GatewayClient> BridgeEngine<G> {
    /// A fresh instance trusting `initial_gateway`.
    pub fn new(
        identity: TokenIdentity,
        contract: WalletAddress,
        chain: ChainId,
        initial_gateway: WalletAddress,
        gateway: G,
        params: BridgeParams,
    ) -> Self {
        Self::from_state(
            identity,
            contract,
            chain,
            gateway,
            params,
            BridgeState::new(initial_gateway),
        )
    }

    /// Resume from a persisted [`BridgeState`] snapshot.
    pub fn from_state(
        identity: TokenIdentity,
        contract: WalletAddress,
        chain: ChainId,
        gateway: G,
        params: BridgeParams,
        state: BridgeState,
    ) -> Self {
        Self {
            identity,
            contract,
            chain,
            params,
            gateway,
            state,
            events: Vec::new(),
        }
    }

    pub fn identity(&self) -> &TokenIdentity {
        &self.identity
    }

    pub fn contract_address(&self) -> &WalletAddress {
        &self.contract
    }

    pub fn chain(&self) -> ChainId {
        self.chain
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Events appended since construction (or the last drain).
    pub fn events(&self) -> &[BridgeEvent] {
        &self.events
    }

    /// Hand the event log to a host sink.
    pub fn drain_events(&mut self) -> Vec<BridgeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Source side: burn the caller's tokens and submit the outbound
    /// request. All-or-nothing — on any failure the caller's balance and
    /// allowance are exactly as before the call.
    ///
    /// Step order is a correctness requirement: the enablement gate precedes
    /// any balance mutation, the gateway-address refresh precedes the
    /// outbound submission, and the burn only commits once the gateway has
    /// accepted the request.
    pub fn request_bridge<L: FungibleLedger>(
        &mut self,
        ledger: &mut L,
        caller: &WalletAddress,
        request: BridgeRequest,
        now: Timestamp,
    ) -> Result<RequestId, BridgeError> {
        request.validate()?;

        if !self
            .gateway
            .is_destination_chain_enabled(&self.contract, request.to_chain)?
        {
            tracing::warn!(
                chain = %self.chain,
                destination = %request.to_chain,
                "bridge request to disabled destination rejected"
            );
            return Err(BridgeError::DestinationNotEnabled(request.to_chain));
        }

        let reported = self.gateway.current_gateway_address()?;
        self.record_migrations(&reported, now);

        let staged = StagedBurn::stage(ledger, caller, &self.contract, request.amount)?;

        let request_id = match self.gateway.request_token_bridge(
            request.to_chain,
            &request.recipient,
            request.amount,
        ) {
            Ok(id) => id,
            Err(err) => {
                staged.abort(ledger)?;
                tracing::warn!(
                    chain = %self.chain,
                    destination = %request.to_chain,
                    error = %err,
                    "gateway rejected bridge request, burn rolled back"
                );
                return Err(BridgeError::Gateway(err));
            }
        };
        staged.commit(ledger)?;

        tracing::info!(
            chain = %self.chain,
            destination = %request.to_chain,
            recipient = %request.recipient,
            amount = %request.amount,
            request_id = %request_id,
            "bridge request accepted"
        );
        self.events.push(BridgeEvent::BridgeRequested {
            to_chain: request.to_chain,
            recipient: request.recipient,
            amount: request.amount,
        });
        Ok(request_id)
    }

    /// Destination side: authorize, mint, settle the relay fee.
    ///
    /// Reachable only through the host's externally-authenticated delivery
    /// wiring; the identity gate here is the sole barrier in front of the
    /// mint, so it runs before anything else. A fee-settlement failure
    /// aborts the whole delivery — the staged mint never commits.
    pub fn process_bridge<L, P>(
        &mut self,
        ledger: &mut L,
        payment_ledger: &mut P,
        caller: &WalletAddress,
        delivery: BridgeDelivery,
        now: Timestamp,
    ) -> Result<(), BridgeError>
    where
        L: FungibleLedger,
        P: FungibleLedger,
    {
        let authoritative = self.state.cell.authoritative_address(now);
        if caller != authoritative {
            tracing::warn!(
                chain = %self.chain,
                caller = %caller,
                "unauthorized bridge delivery rejected"
            );
            return Err(BridgeError::Unauthorized {
                caller: caller.clone(),
            });
        }

        delivery.validate()?;

        if self.state.processed.contains(&delivery.tx_id) {
            tracing::warn!(
                chain = %self.chain,
                tx_id = %delivery.tx_id,
                "duplicate bridge delivery rejected"
            );
            return Err(BridgeError::DuplicateDelivery(delivery.tx_id));
        }

        let staged = StagedMint::stage(&delivery.recipient, delivery.amount);

        if !delivery.payment_required.is_zero() {
            let payment_token = fees::settle(
                payment_ledger,
                &mut self.gateway,
                &self.contract,
                caller,
                delivery.payment_required,
            )?;
            self.events.push(BridgeEvent::FeeSettled {
                payment_token,
                amount: delivery.payment_required,
            });
        }

        staged.commit(ledger)?;
        self.state.processed.insert(delivery.tx_id);

        tracing::info!(
            chain = %self.chain,
            tx_id = %delivery.tx_id,
            source = %delivery.source_chain,
            recipient = %delivery.recipient,
            amount = %delivery.amount,
            "bridge delivery processed"
        );
        self.events.push(BridgeEvent::BridgeProcessed {
            tx_id: delivery.tx_id,
            source_chain: delivery.source_chain,
            recipient: delivery.recipient,
            amount: delivery.amount,
            payment_required: delivery.payment_required,
        });
        Ok(())
    }

    /// What the gateway would charge to bridge to `dest_chain` right now.
    /// Hosts use this to keep the contract's payment-token balance funded.
    pub fn request_fee_quote(&self, dest_chain: ChainId) -> Result<FeeQuote, BridgeError> {
        Ok(FeeQuote {
            payment_token: self.gateway.payment_token(&self.contract)?,
            amount: self.gateway.request_fee(dest_chain, &self.contract)?,
        })
    }

    fn record_migrations(&mut self, reported: &WalletAddress, now: Timestamp) {
        let delay = self.params.migration_delay_secs;
        let changes = self.state.cell.observe(reported, delay, now);
        for event in &changes {
            match event {
                BridgeEvent::GatewayMigrated { from, to, version } => {
                    tracing::info!(
                        chain = %self.chain,
                        from = %from,
                        to = %to,
                        version = *version,
                        "gateway address migrated"
                    );
                }
                BridgeEvent::GatewayMigrationScheduled { to, effective_at, .. } => {
                    tracing::info!(
                        chain = %self.chain,
                        to = %to,
                        effective_at = %effective_at,
                        "gateway migration scheduled"
                    );
                }
                BridgeEvent::GatewayMigrationCancelled { cancelled } => {
                    tracing::info!(
                        chain = %self.chain,
                        cancelled = %cancelled,
                        "gateway migration cancelled"
                    );
                }
                _ => {}
            }
        }
        self.events.extend(changes);
    }
}
