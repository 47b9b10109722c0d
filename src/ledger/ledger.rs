use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Account, CategoryRegistry, Transaction};

use super::balance;

/// Name given to the account created when a snapshot holds none.
pub const DEFAULT_ACCOUNT_NAME: &str = "Varsayılan Hesap";

/// The persisted ledger snapshot: every account, transaction, and category,
/// plus the active account selection.
///
/// This aggregate exclusively owns its state. All mutation flows through the
/// service layer and [`crate::core::LedgerManager`]; other components only see
/// read-only projections. Field names follow the snapshot's JSON contract
/// (`activeAccountId`, `accountId`, `type`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: CategoryRegistry,
    #[serde(default)]
    pub active_account_id: Option<Uuid>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            accounts: Vec::new(),
            categories: CategoryRegistry::default(),
            active_account_id: None,
        }
    }

    /// Repairs the snapshot after hydration: a ledger with no accounts gains
    /// one default account, and a missing or dangling active id falls back to
    /// the first account.
    pub fn bootstrap(&mut self) {
        if self.accounts.is_empty() {
            let account = Account::new(DEFAULT_ACCOUNT_NAME);
            self.active_account_id = Some(account.id);
            self.accounts.push(account);
            return;
        }
        let active_is_live = self
            .active_account_id
            .map_or(false, |id| self.account(id).is_some());
        if !active_is_live {
            self.active_account_id = self.accounts.first().map(|account| account.id);
        }
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn active_account(&self) -> Option<&Account> {
        self.active_account_id.and_then(|id| self.account(id))
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: i64) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn remove_transaction(&mut self, id: i64) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Appends preserve insertion order, which doubles as the chronological
    /// "oldest first" storage order.
    pub fn add_transaction(&mut self, transaction: Transaction) -> i64 {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        id
    }

    /// Issues a fresh transaction id: current time in milliseconds, bumped
    /// past every id already in the ledger so same-millisecond inserts under
    /// sequential use cannot collide.
    pub fn next_transaction_id(&self) -> i64 {
        let floor = self
            .transactions
            .iter()
            .map(|txn| txn.id)
            .max()
            .map_or(0, |id| id + 1);
        Utc::now().timestamp_millis().max(floor)
    }

    pub fn recompute_balances(&mut self) {
        balance::recompute(&mut self.accounts, &self.transactions);
    }
}
