//! In-memory ledger — HashMap-backed balance accounting.

use crate::{FungibleLedger, LedgerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use weft_types::{TokenAmount, WalletAddress};

/// A HashMap-backed [`FungibleLedger`].
///
/// Balances and allowances are keyed by raw address strings. All arithmetic
/// is checked; a would-be overflow surfaces as [`LedgerError::SupplyOverflow`]
/// with nothing mutated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryLedger {
    balances: HashMap<String, u128>,
    /// Allowances keyed by (owner, spender).
    allowances: HashMap<(String, String), u128>,
    supply: u128,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger pre-funded with the given balances (supply = their sum).
    ///
    /// # Panics
    /// Panics if the balances sum past `u128::MAX`.
    pub fn with_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = (WalletAddress, TokenAmount)>,
    {
        let mut ledger = Self::new();
        for (account, amount) in balances {
            ledger
                .mint(&account, amount)
                .expect("initial balances overflow supply");
        }
        ledger
    }

    fn balance_mut(&mut self, account: &WalletAddress) -> &mut u128 {
        self.balances.entry(account.as_str().to_owned()).or_default()
    }

    fn debit(&mut self, from: &WalletAddress, amount: TokenAmount) -> Result<(), LedgerError> {
        let balance = self.balance_mut(from);
        let available = *balance;
        if available < amount.raw() {
            return Err(LedgerError::InsufficientFunds {
                needed: amount.raw(),
                available,
            });
        }
        *balance = available - amount.raw();
        Ok(())
    }

    fn credit(&mut self, to: &WalletAddress, amount: TokenAmount) -> Result<(), LedgerError> {
        let balance = self.balance_mut(to);
        *balance = balance
            .checked_add(amount.raw())
            .ok_or(LedgerError::SupplyOverflow)?;
        Ok(())
    }
}

impl FungibleLedger for InMemoryLedger {
    fn total_supply(&self) -> TokenAmount {
        TokenAmount::new(self.supply)
    }

    fn balance_of(&self, account: &WalletAddress) -> TokenAmount {
        TokenAmount::new(self.balances.get(account.as_str()).copied().unwrap_or(0))
    }

    fn allowance(&self, owner: &WalletAddress, spender: &WalletAddress) -> TokenAmount {
        let key = (owner.as_str().to_owned(), spender.as_str().to_owned());
        TokenAmount::new(self.allowances.get(&key).copied().unwrap_or(0))
    }

    fn approve(&mut self, owner: &WalletAddress, spender: &WalletAddress, amount: TokenAmount) {
        let key = (owner.as_str().to_owned(), spender.as_str().to_owned());
        if amount.is_zero() {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(key, amount.raw());
        }
    }

    fn transfer(
        &mut self,
        from: &WalletAddress,
        to: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        self.debit(from, amount)?;
        // Credit cannot overflow: supply fits in u128 and debit already
        // removed `amount` from it.
        self.credit(to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &WalletAddress,
        from: &WalletAddress,
        to: &WalletAddress,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        let key = (from.as_str().to_owned(), spender.as_str().to_owned());
        let allowed = self.allowances.get(&key).copied().unwrap_or(0);
        if allowed < amount.raw() {
            return Err(LedgerError::InsufficientAllowance {
                needed: amount.raw(),
                available: allowed,
            });
        }
        self.transfer(from, to, amount)?;
        let remaining = allowed - amount.raw();
        if remaining == 0 {
            self.allowances.remove(&key);
        } else {
            self.allowances.insert(key, remaining);
        }
        Ok(())
    }

    fn burn(&mut self, from: &WalletAddress, amount: TokenAmount) -> Result<(), LedgerError> {
        self.debit(from, amount)?;
        // Supply covers every balance, and the debit just succeeded.
        self.supply -= amount.raw();
        Ok(())
    }

    fn mint(&mut self, to: &WalletAddress, amount: TokenAmount) -> Result<(), LedgerError> {
        self.supply = self
            .supply
            .checked_add(amount.raw())
            .ok_or(LedgerError::SupplyOverflow)?;
        self.credit(to, amount)
    }
}
