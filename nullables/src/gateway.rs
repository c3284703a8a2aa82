//! Nullable gateway — a programmable stand-in for the bridge gateway.
//!
//! Records every outbound request and payment instead of relaying anything,
//! reports whatever canonical address and fee schedule the test scripts,
//! and can be told to fail its next request or payment.

use std::collections::{HashMap, HashSet};
use weft_gateway::{GatewayClient, GatewayError};
use weft_types::{ChainId, RequestId, TokenAmount, WalletAddress};

/// One `request_token_bridge` call the gateway accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub to_chain: ChainId,
    pub recipient: WalletAddress,
    pub amount: TokenAmount,
    pub request_id: RequestId,
}

/// A deterministic [`GatewayClient`] for tests.
pub struct NullGateway {
    canonical: WalletAddress,
    enabled: HashSet<ChainId>,
    payment_token: WalletAddress,
    fees: HashMap<ChainId, TokenAmount>,
    requests: Vec<RecordedRequest>,
    payments: Vec<TokenAmount>,
    next_request_id: u128,
    fail_next_request: Option<String>,
    fail_next_pay: Option<String>,
}

impl NullGateway {
    /// A gateway reporting `canonical` as its address, with no chains
    /// enabled, no fees, and a default payment token.
    pub fn new(canonical: WalletAddress) -> Self {
        Self {
            canonical,
            enabled: HashSet::new(),
            payment_token: WalletAddress::new("weft_payment_token"),
            fees: HashMap::new(),
            requests: Vec::new(),
            payments: Vec::new(),
            next_request_id: 1,
            fail_next_request: None,
            fail_next_pay: None,
        }
    }

    pub fn enable_chain(&mut self, chain: ChainId) {
        self.enabled.insert(chain);
    }

    pub fn disable_chain(&mut self, chain: ChainId) {
        self.enabled.remove(&chain);
    }

    /// Change the address the gateway reports as canonical — the migration
    /// trigger a test scripts between calls.
    pub fn set_canonical_address(&mut self, address: WalletAddress) {
        self.canonical = address;
    }

    pub fn set_payment_token(&mut self, token: WalletAddress) {
        self.payment_token = token;
    }

    pub fn set_fee(&mut self, chain: ChainId, fee: TokenAmount) {
        self.fees.insert(chain, fee);
    }

    /// Fail the next `request_token_bridge` call with `reason`.
    pub fn fail_next_request(&mut self, reason: &str) {
        self.fail_next_request = Some(reason.to_owned());
    }

    /// Fail the next `pay` call with `reason`.
    pub fn fail_next_pay(&mut self, reason: &str) {
        self.fail_next_pay = Some(reason.to_owned());
    }

    /// All accepted outbound requests (for assertions).
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.clone()
    }

    /// All pulled payments (for assertions).
    pub fn payments(&self) -> Vec<TokenAmount> {
        self.payments.clone()
    }
}

impl GatewayClient for NullGateway {
    fn is_destination_chain_enabled(
        &self,
        _project: &WalletAddress,
        chain: ChainId,
    ) -> Result<bool, GatewayError> {
        Ok(self.enabled.contains(&chain))
    }

    fn current_gateway_address(&self) -> Result<WalletAddress, GatewayError> {
        Ok(self.canonical.clone())
    }

    fn request_token_bridge(
        &mut self,
        to_chain: ChainId,
        recipient: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<RequestId, GatewayError> {
        if let Some(reason) = self.fail_next_request.take() {
            return Err(GatewayError::CallFailed(reason));
        }
        let request_id = RequestId::new(self.next_request_id);
        self.next_request_id += 1;
        self.requests.push(RecordedRequest {
            to_chain,
            recipient: recipient.clone(),
            amount,
            request_id,
        });
        Ok(request_id)
    }

    fn payment_token(&self, _project: &WalletAddress) -> Result<WalletAddress, GatewayError> {
        Ok(self.payment_token.clone())
    }

    fn request_fee(
        &self,
        dest_chain: ChainId,
        _project: &WalletAddress,
    ) -> Result<TokenAmount, GatewayError> {
        self.fees
            .get(&dest_chain)
            .copied()
            .ok_or(GatewayError::ChainUnknown(dest_chain))
    }

    fn pay(&mut self, amount: TokenAmount) -> Result<(), GatewayError> {
        if let Some(reason) = self.fail_next_pay.take() {
            return Err(GatewayError::PaymentRejected {
                amount: amount.raw(),
                reason,
            });
        }
        self.payments.push(amount);
        Ok(())
    }
}
