//! Ledger aggregate, balance derivation, and transaction selection.

pub mod balance;
pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use filter::TransactionFilter;
pub use ledger::{Ledger, DEFAULT_ACCOUNT_NAME};
