pub mod account_service;
pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use category_service::CategoryService;
pub use summary_service::{AccountTotals, SummaryService};
pub use transaction_service::TransactionService;
