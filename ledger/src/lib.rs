//! Fungible-token ledger boundary.
//!
//! The bridge consumes standard token bookkeeping — balances, allowances,
//! burn, mint — but never reimplements it. This crate defines that boundary
//! as a trait and ships an in-memory implementation for hosts and tests.

pub mod error;
pub mod memory;

pub use error::LedgerError;
pub use memory::InMemoryLedger;

use weft_types::{TokenAmount, WalletAddress};

/// Balance accounting for one fungible asset on one chain.
///
/// Implementors enforce the usual invariants: transfers and burns never
/// exceed the source balance, `transfer_from` never exceeds the spender's
/// allowance, and supply arithmetic is checked. The bridge relies on those
/// guarantees instead of re-checking them.
pub trait FungibleLedger {
    /// Total circulating supply on this chain.
    fn total_supply(&self) -> TokenAmount;

    /// Balance of one account (zero for unknown accounts).
    fn balance_of(&self, account: &WalletAddress) -> TokenAmount;

    /// Remaining amount `spender` may pull from `owner`.
    fn allowance(&self, owner: &WalletAddress, spender: &WalletAddress) -> TokenAmount;

    /// Set (not increment) the allowance `owner` grants `spender`.
    fn approve(&mut self, owner: &WalletAddress, spender: &WalletAddress, amount: TokenAmount);

    /// Move `amount` from `from` to `to`.
    fn transfer(
        &mut self,
        from: &WalletAddress,
        to: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;

    /// Allowance-checked pull: `spender` moves `amount` from `from` to `to`,
    /// consuming that much of its allowance.
    fn transfer_from(
        &mut self,
        spender: &WalletAddress,
        from: &WalletAddress,
        to: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<(), LedgerError>;

    /// Destroy `amount` held by `from`, shrinking supply.
    fn burn(&mut self, from: &WalletAddress, amount: TokenAmount) -> Result<(), LedgerError>;

    /// Create `amount` credited to `to`, growing supply.
    fn mint(&mut self, to: &WalletAddress, amount: TokenAmount) -> Result<(), LedgerError>;
}
