//! Ordered expense records mirrored to a key-value slot.

use tracing::warn;

use crate::{
    domain::Expense,
    errors::{Result, TrackerError},
    storage::{KeyValueStore, EXPENSES_KEY},
};

/// Expense records in insertion order, which is also display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Expense>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Expense>) -> Self {
        Self { records }
    }

    pub fn add(&mut self, record: Expense) {
        self.records.push(record);
    }

    /// Replaces the record at `index`, returning the previous one.
    pub fn update(&mut self, index: usize, record: Expense) -> Result<Expense> {
        let slot = self
            .records
            .get_mut(index)
            .ok_or(TrackerError::RecordNotFound(index))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Removes the record at `index`; later records shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Expense> {
        if index >= self.records.len() {
            return Err(TrackerError::RecordNotFound(index));
        }
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all record prices.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|record| record.price).sum()
    }

    /// Serializes the records into the slot representation.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Reads the records from `store`. Absent or malformed data yields an
    /// empty sequence.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(EXPENSES_KEY) else {
            return Self::new();
        };
        match serde_json::from_str::<Vec<Expense>>(&raw) {
            Ok(records) => Self::from_records(records),
            Err(err) => {
                warn!(%err, "stored expenses are malformed; starting with none");
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(EXPENSES_KEY, self.encode()?)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn expense(title: &str, price: f64) -> Expense {
        Expense::new(
            title,
            price,
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = RecordStore::new();
        store.add(expense("first", 1.0));
        store.add(expense("second", 2.0));
        let titles: Vec<_> = store.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn update_returns_previous_record() {
        let mut store = RecordStore::from_records(vec![expense("old", 3.0)]);
        let previous = store.update(0, expense("new", 4.0)).unwrap();
        assert_eq!(previous.title, "old");
        assert_eq!(store.get(0).unwrap().title, "new");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_and_remove_reject_missing_positions() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.update(0, expense("x", 1.0)),
            Err(TrackerError::RecordNotFound(0))
        ));
        assert!(matches!(
            store.remove(3),
            Err(TrackerError::RecordNotFound(3))
        ));
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut store = RecordStore::from_records(vec![
            expense("a", 1.0),
            expense("b", 2.0),
            expense("c", 3.0),
        ]);
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(store.get(1).unwrap().title, "c");
        assert_eq!(store.total(), 4.0);
    }

    #[test]
    fn load_falls_back_to_empty_on_malformed_slot() {
        let kv = MemoryStore::with_entries([(EXPENSES_KEY, "{\"oops\":")]);
        assert!(RecordStore::load(&kv).is_empty());
        assert!(RecordStore::load(&MemoryStore::new()).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut kv = MemoryStore::new();
        let store = RecordStore::from_records(vec![expense("Coffee", 10.0), expense("Tea", 2.5)]);
        store.save(&mut kv).unwrap();
        assert_eq!(RecordStore::load(&kv), store);
    }
}
