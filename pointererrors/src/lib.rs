use std::fmt;
use std::ops::SubAssign;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("cannot withdraw, insufficient funds")]
    InsufficientFunds,

    #[error("cannot deposit, balance would overflow")]
    BalanceOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Bitcoin(pub u64);

impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BTC", self.0)
    }
}

impl Bitcoin {
    pub fn checked_add(self, rhs: Bitcoin) -> Option<Bitcoin> {
        self.0.checked_add(rhs.0).map(Bitcoin)
    }
}

impl SubAssign for Bitcoin {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[derive(Debug, Default)]
pub struct Wallet {
    balance: Bitcoin,
}

impl Wallet {
    pub fn new(balance: Bitcoin) -> Self {
        Wallet { balance }
    }

    /// Puts `amount` into the wallet.
    ///
    /// Fails with [`WalletError::BalanceOverflow`] and leaves the balance
    /// untouched when the new balance would not fit in a `Bitcoin`. Takes
    /// `&mut self`, so the deposit lands in the caller's wallet, not a copy.
    pub fn deposit(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        tracing::debug!("address of balance in deposit is {:p}", &self.balance);

        let Some(balance) = self.balance.checked_add(amount) else {
            tracing::debug!(%amount, balance = %self.balance, "deposit rejected");
            return Err(WalletError::BalanceOverflow);
        };

        self.balance = balance;
        Ok(())
    }

    /// Takes `amount` out of the wallet.
    ///
    /// Fails with [`WalletError::InsufficientFunds`] and leaves the balance
    /// untouched when the wallet holds less than `amount`.
    pub fn withdraw(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        if amount > self.balance {
            tracing::debug!(%amount, balance = %self.balance, "withdraw rejected");
            return Err(WalletError::InsufficientFunds);
        }

        self.balance -= amount;
        tracing::debug!(%amount, balance = %self.balance, "withdrew");
        Ok(())
    }

    pub fn balance(&self) -> Bitcoin {
        self.balance
    }
}
