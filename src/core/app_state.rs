//! Application state and its post-mutation persistence hook.

use tracing::{debug, info};

use crate::{
    domain::Expense,
    errors::{Result, TrackerError, ValidationError},
    ledger::{summarize, RecordStore, Summary, Wallet},
    storage::{KeyValueStore, EXPENSES_KEY, WALLET_KEY},
};

/// Wallet and expense records, the only durable state of the tracker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub wallet: Wallet,
    pub records: RecordStore,
}

impl AppState {
    pub fn new(wallet: Wallet, records: RecordStore) -> Self {
        Self { wallet, records }
    }

    /// Restores both slots from `store`, falling back to defaults per slot.
    pub fn load(store: &dyn KeyValueStore, default_balance: f64) -> Self {
        Self {
            wallet: Wallet::load(store, default_balance),
            records: RecordStore::load(store),
        }
    }

    /// Writes both slots in a single batch.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set_many(vec![
            (WALLET_KEY, self.wallet.encode()),
            (EXPENSES_KEY, self.records.encode()?),
        ])
    }

    pub fn balance(&self) -> f64 {
        self.wallet.balance()
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.records)
    }
}

/// Owns the application state together with the store it is mirrored to.
///
/// Every successful mutation is followed by [`Tracker::persist`]. Rejected
/// operations leave both the state and the store untouched. When the write
/// itself fails the in-memory change stays applied and the storage error is
/// returned.
pub struct Tracker<S: KeyValueStore> {
    state: AppState,
    store: S,
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn restore(store: S, default_balance: f64) -> Self {
        let state = AppState::load(&store, default_balance);
        info!(
            balance = state.balance(),
            records = state.records.len(),
            "tracker state restored"
        );
        Self { state, store }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn balance(&self) -> f64 {
        self.state.balance()
    }

    pub fn records(&self) -> &RecordStore {
        &self.state.records
    }

    pub fn summary(&self) -> Summary {
        self.state.summary()
    }

    /// Credits income and returns the new balance.
    pub fn add_income(&mut self, amount: f64) -> Result<f64> {
        let balance = self.state.wallet.credit(amount)?;
        info!(amount, balance, "income added");
        self.persist()?;
        Ok(balance)
    }

    /// Appends an expense and debits its price. Returns the new balance.
    pub fn add_expense(&mut self, expense: Expense) -> Result<f64> {
        self.ensure_affordable(expense.price)?;
        let price = expense.price;
        info!(title = %expense.title, price, category = %expense.category, "expense added");
        self.state.records.add(expense);
        let balance = self.state.wallet.debit(price);
        self.persist()?;
        Ok(balance)
    }

    /// Replaces the expense at `index`, refunding the old price and charging
    /// the new one together. Returns the replaced expense.
    ///
    /// Affordability is checked against the balance at submission time, not
    /// the balance before the original charge.
    pub fn edit_expense(&mut self, index: usize, expense: Expense) -> Result<Expense> {
        if self.state.records.get(index).is_none() {
            return Err(TrackerError::RecordNotFound(index));
        }
        self.ensure_affordable(expense.price)?;
        let new_price = expense.price;
        let previous = self.state.records.update(index, expense)?;
        let balance = self.state.wallet.rebalance(previous.price, new_price);
        info!(index, old_price = previous.price, new_price, balance, "expense edited");
        self.persist()?;
        Ok(previous)
    }

    /// Removes the expense at `index` and refunds its price.
    pub fn delete_expense(&mut self, index: usize) -> Result<Expense> {
        let removed = self.state.records.remove(index)?;
        let balance = self.state.wallet.refund(removed.price);
        info!(index, price = removed.price, balance, "expense deleted");
        self.persist()?;
        Ok(removed)
    }

    /// Mirrors the current state to the store.
    pub fn persist(&mut self) -> Result<()> {
        self.state.save(&mut self.store)?;
        debug!("tracker state persisted");
        Ok(())
    }

    fn ensure_affordable(&self, price: f64) -> Result<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice(price.to_string()).into());
        }
        let balance = self.state.balance();
        if !self.state.wallet.can_afford(price) {
            return Err(ValidationError::InsufficientBalance { price, balance }.into());
        }
        Ok(())
    }
}
