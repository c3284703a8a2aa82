//! Staged ledger mutations — the all-or-nothing backbone.
//!
//! The source design relies on whole-call transactional rollback: if the
//! gateway call inside `requestBridge` fails, the burn before it unwinds.
//! Here that is reconstructed explicitly as two-phase mutations over the
//! ledger seam: stage, then commit after the external call succeeds, or
//! abort and restore every touched balance and allowance.

use weft_ledger::{FungibleLedger, LedgerError};
use weft_types::{TokenAmount, WalletAddress};

/// A burn that has custodied the holder's tokens but not yet destroyed them.
///
/// `stage` pulls `amount` from the holder into contract custody through the
/// holder's allowance. `commit` destroys the custodied amount; `abort`
/// returns it and restores the allowance that the pull consumed.
#[must_use = "a staged burn must be committed or aborted"]
pub struct StagedBurn {
    holder: WalletAddress,
    contract: WalletAddress,
    amount: TokenAmount,
    allowance_before: TokenAmount,
}

impl StagedBurn {
    pub fn stage<L: FungibleLedger>(
        ledger: &mut L,
        holder: &WalletAddress,
        contract: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<Self, LedgerError> {
        let allowance_before = ledger.allowance(holder, contract);
        ledger.transfer_from(contract, holder, contract, amount)?;
        Ok(Self {
            holder: holder.clone(),
            contract: contract.clone(),
            amount,
            allowance_before,
        })
    }

    /// Destroy the custodied amount. After this the tokens are gone from
    /// this chain regardless of what happens to the cross-chain message.
    pub fn commit<L: FungibleLedger>(self, ledger: &mut L) -> Result<(), LedgerError> {
        ledger.burn(&self.contract, self.amount)
    }

    /// Return custody to the holder, balance and allowance exactly as
    /// before `stage`.
    pub fn abort<L: FungibleLedger>(self, ledger: &mut L) -> Result<(), LedgerError> {
        ledger.transfer(&self.contract, &self.holder, self.amount)?;
        ledger.approve(&self.holder, &self.contract, self.allowance_before);
        Ok(())
    }
}

/// A mint recorded but not yet applied.
///
/// Nothing touches the ledger until `commit`, so dropping a staged mint
/// (the fee-settlement failure path) aborts it for free.
#[must_use = "a staged mint does nothing until committed"]
pub struct StagedMint {
    recipient: WalletAddress,
    amount: TokenAmount,
}

impl StagedMint {
    pub fn stage(recipient: &WalletAddress, amount: TokenAmount) -> Self {
        Self {
            recipient: recipient.clone(),
            amount,
        }
    }

    pub fn commit<L: FungibleLedger>(self, ledger: &mut L) -> Result<(), LedgerError> {
        ledger.mint(&self.recipient, self.amount)
    }
}
