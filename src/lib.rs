#![doc(test(attr(deny(warnings))))]

//! Finans Core is the ledger and derivation engine behind a personal finance
//! tracker: accounts, signed transactions, derived balances, filtered views,
//! date-ranged reports, CSV export, and JSON snapshot persistence.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finans Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
