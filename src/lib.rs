#![doc(test(attr(deny(warnings))))]

//! Wallet Tracker records income and categorized expenses, keeps a running
//! wallet balance mirrored to a local key-value store, and charts where the
//! money went.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("wallet tracker tracing initialized");
    });
}
