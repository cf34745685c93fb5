pub mod json_backend;

use std::collections::BTreeMap;

use crate::errors::Result;

pub use json_backend::JsonFileStore;

/// Slot holding the wallet balance as a number-like string.
pub const WALLET_KEY: &str = "wallet";
/// Slot holding the expense records as a JSON array.
pub const EXPENSES_KEY: &str = "expenses";

/// String key-value slots, the local-storage equivalent backing the tracker.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Writes several slots as one unit. Backends that persist on every call
    /// should override this so that related slots land in a single write.
    fn set_many(&mut self, entries: Vec<(&str, String)>) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Volatile store used by tests and embedders that do not need a file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            writes: 0,
        }
    }

    /// Number of write operations performed so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }

    fn set_many(&mut self, entries: Vec<(&str, String)>) -> Result<()> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value);
        }
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_counts_batched_writes_once() {
        let mut store = MemoryStore::new();
        store
            .set_many(vec![(WALLET_KEY, "10".into()), (EXPENSES_KEY, "[]".into())])
            .unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.get(WALLET_KEY).as_deref(), Some("10"));
        assert_eq!(store.get(EXPENSES_KEY).as_deref(), Some("[]"));
    }
}
