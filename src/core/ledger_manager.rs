//! The mutation/projection facade over the ledger snapshot.
//!
//! Every mutation follows the same sequence: validate, mutate, recompute
//! balances, persist. Because the model is strictly single-threaded and
//! sequential, a mutation's effects (including the persisted snapshot) are
//! visible to the very next read.

use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{
    AccountService, AccountTotals, CategoryService, SummaryService, TransactionService,
};
use crate::domain::{Account, CategoryKind, CategoryRegistry, Transaction, TransactionDraft};
use crate::errors::Result;
use crate::ledger::{filter, Ledger, TransactionFilter};
use crate::report::{csv, CategorySlice, PeriodSummary, ReportRange};
use crate::storage::StorageBackend;

/// Facade that owns the ledger snapshot and coordinates services and
/// persistence.
///
/// A persistence failure is logged and the session keeps running on the
/// in-memory state; callers that cannot even construct durable storage can
/// hand in a [`crate::storage::MemoryStorage`] instead.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    config: Config,
}

impl LedgerManager {
    /// Hydrates the snapshot from storage (empty baseline on first run),
    /// applies the bootstrap rule, and persists the repaired state.
    pub fn open(storage: Box<dyn StorageBackend>, config: Config) -> Result<Self> {
        let mut ledger = storage.load()?.unwrap_or_default();
        ledger.bootstrap();
        ledger.recompute_balances();
        tracing::debug!(
            accounts = ledger.accounts.len(),
            transactions = ledger.transactions.len(),
            "ledger hydrated"
        );
        let mut manager = Self {
            ledger,
            storage,
            config,
        };
        manager.persist();
        Ok(manager)
    }

    // --- mutations -----------------------------------------------------

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<i64> {
        let id = TransactionService::add(&mut self.ledger, draft)?;
        self.commit();
        Ok(id)
    }

    pub fn update_transaction(&mut self, id: i64, draft: TransactionDraft) -> Result<()> {
        TransactionService::update(&mut self.ledger, id, draft)?;
        self.commit();
        Ok(())
    }

    pub fn delete_transaction(&mut self, id: i64) -> Result<Transaction> {
        let removed = TransactionService::remove(&mut self.ledger, id)?;
        self.commit();
        Ok(removed)
    }

    pub fn add_account(&mut self, name: &str, opening_balance: f64) -> Result<Uuid> {
        let id = AccountService::add(&mut self.ledger, name, opening_balance)?;
        self.commit();
        Ok(id)
    }

    pub fn delete_account(&mut self, id: Uuid) -> Result<()> {
        AccountService::remove(&mut self.ledger, id)?;
        self.commit();
        Ok(())
    }

    pub fn set_active_account(&mut self, id: Uuid) -> Result<()> {
        AccountService::set_active(&mut self.ledger, id)?;
        self.commit();
        Ok(())
    }

    pub fn add_category(&mut self, kind: CategoryKind, name: &str) -> Result<()> {
        CategoryService::add(&mut self.ledger, kind, name)?;
        self.commit();
        Ok(())
    }

    pub fn remove_category(&mut self, kind: CategoryKind, name: &str) {
        CategoryService::remove(&mut self.ledger, kind, name);
        self.commit();
    }

    /// Clears everything and starts over from the bootstrap state.
    pub fn reset(&mut self) {
        self.ledger = Ledger::new();
        self.ledger.bootstrap();
        tracing::info!("ledger reset to bootstrap state");
        self.commit();
    }

    // --- projections ---------------------------------------------------

    pub fn accounts(&self) -> &[Account] {
        &self.ledger.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.ledger.categories
    }

    pub fn active_account(&self) -> Option<&Account> {
        self.ledger.active_account()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Filtered transaction list in display order (newest first).
    pub fn filtered_transactions(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter::newest_first(&self.ledger.transactions, filter)
    }

    /// The active account's most recent transactions, newest first.
    pub fn recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        match self.ledger.active_account_id {
            Some(active) => filter::recent(&self.ledger.transactions, active, limit),
            None => Vec::new(),
        }
    }

    pub fn summarize_range(&self, range: &ReportRange) -> Result<PeriodSummary> {
        SummaryService::summarize_range(&self.ledger.transactions, range)
    }

    /// Expense breakdown of the active account, chart-ready.
    pub fn expense_breakdown(&self) -> Vec<CategorySlice> {
        match self.ledger.active_account_id {
            Some(account) => SummaryService::category_breakdown(
                self.ledger
                    .transactions
                    .iter()
                    .filter(|txn| txn.account_id == account),
            ),
            None => Vec::new(),
        }
    }

    pub fn account_totals(&self, account: Uuid) -> AccountTotals {
        SummaryService::account_totals(&self.ledger.transactions, account)
    }

    /// CSV for the transactions inside the report range, plus the file name
    /// the export should carry.
    pub fn export_report_csv(&self, range: &ReportRange) -> Result<(String, String)> {
        let rows = SummaryService::in_range(&self.ledger.transactions, range)?;
        let content = csv::render(&rows, &self.ledger.accounts, &self.config.locale)?;
        let file_name = csv::export_file_name(Utc::now().date_naive());
        Ok((file_name, content))
    }

    // --- internals -----------------------------------------------------

    fn commit(&mut self) {
        self.ledger.recompute_balances();
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.ledger) {
            tracing::warn!(error = %err, "snapshot save failed; continuing in memory");
        }
    }
}
