//! The running balance of available funds.

use tracing::warn;

use crate::{
    errors::{Result, ValidationError},
    storage::{KeyValueStore, WALLET_KEY},
};

/// Balance used when nothing usable is persisted.
pub const DEFAULT_STARTING_BALANCE: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wallet {
    balance: f64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

impl Wallet {
    pub fn new(balance: f64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds income. The amount must be a finite number greater than zero.
    pub fn credit(&mut self, amount: f64) -> std::result::Result<f64, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount(amount.to_string()));
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Removes funds. Callers check affordability before debiting.
    pub fn debit(&mut self, amount: f64) -> f64 {
        self.balance -= amount;
        self.balance
    }

    /// Returns the price of a deleted expense to the balance.
    pub fn refund(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        self.balance
    }

    /// Refunds `old_price` and charges `new_price` in one adjustment.
    pub fn rebalance(&mut self, old_price: f64, new_price: f64) -> f64 {
        self.balance += old_price - new_price;
        self.balance
    }

    pub fn can_afford(&self, price: f64) -> bool {
        price <= self.balance
    }

    /// Slot representation of the balance.
    pub fn encode(&self) -> String {
        self.balance.to_string()
    }

    /// Reads the balance from `store`, using `default_balance` when the slot
    /// is absent or does not hold a finite number.
    pub fn load(store: &dyn KeyValueStore, default_balance: f64) -> Self {
        let Some(raw) = store.get(WALLET_KEY) else {
            return Self::new(default_balance);
        };
        match raw.trim().parse::<f64>() {
            Ok(balance) if balance.is_finite() => Self::new(balance),
            _ => {
                warn!(value = %raw, "stored wallet balance is malformed; using default");
                Self::new(default_balance)
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(WALLET_KEY, self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn credit_rejects_non_positive_amounts() {
        let mut wallet = Wallet::new(100.0);
        assert!(wallet.credit(0.0).is_err());
        assert!(wallet.credit(-5.0).is_err());
        assert!(wallet.credit(f64::NAN).is_err());
        assert_eq!(wallet.balance(), 100.0);
        assert_eq!(wallet.credit(25.5).unwrap(), 125.5);
    }

    #[test]
    fn rebalance_applies_difference() {
        let mut wallet = Wallet::new(5490.0);
        assert_eq!(wallet.rebalance(10.0, 25.0), 5475.0);
    }

    #[test]
    fn load_uses_default_for_missing_or_malformed_slots() {
        assert_eq!(Wallet::load(&MemoryStore::new(), 5000.0).balance(), 5000.0);
        let garbage = MemoryStore::with_entries([(WALLET_KEY, "lots")]);
        assert_eq!(Wallet::load(&garbage, 5000.0).balance(), 5000.0);
        let infinite = MemoryStore::with_entries([(WALLET_KEY, "inf")]);
        assert_eq!(Wallet::load(&infinite, 5000.0).balance(), 5000.0);
    }

    #[test]
    fn zero_balance_is_kept() {
        let kv = MemoryStore::with_entries([(WALLET_KEY, "0")]);
        assert_eq!(Wallet::load(&kv, 5000.0).balance(), 0.0);
    }

    #[test]
    fn encode_round_trips_fractional_balances() {
        let mut kv = MemoryStore::new();
        let wallet = Wallet::new(1234.5678);
        wallet.save(&mut kv).unwrap();
        assert_eq!(Wallet::load(&kv, 0.0), wallet);
    }
}
