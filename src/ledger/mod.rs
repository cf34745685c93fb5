//! Wallet, expense records, and the derived category summary.

pub mod record_store;
pub mod summary;
pub mod wallet;

pub use record_store::RecordStore;
pub use summary::{summarize, CategoryTotal, Summary};
pub use wallet::{Wallet, DEFAULT_STARTING_BALANCE};
