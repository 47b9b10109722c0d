pub mod account;
pub mod category;
pub mod transaction;

pub use account::Account;
pub use category::{CategoryKind, CategoryRegistry};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
