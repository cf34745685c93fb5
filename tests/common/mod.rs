#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use wallet_tracker::{
    cli::{CliMode, ShellContext},
    core::Tracker,
    domain::{Category, Expense},
    storage::MemoryStore,
};

/// Script-mode shell whose config and storage live in a fresh temp dir.
/// Keep the `TempDir` alive for as long as the context is used.
pub fn script_shell() -> (ShellContext, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let context = ShellContext::with_home(CliMode::Script, temp.path().to_path_buf())
        .expect("create shell context");
    (context, temp)
}

pub fn memory_tracker(balance: f64) -> Tracker<MemoryStore> {
    Tracker::restore(MemoryStore::new(), balance)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn expense(title: &str, price: f64, category: Category) -> Expense {
    Expense::new(title, price, category, date(2024, 1, 1))
}
