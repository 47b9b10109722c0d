//! Predicate-based transaction selection.
//!
//! Selection and presentation order are separate contracts: [`select`] keeps
//! storage order (oldest first), while [`newest_first`] applies the display
//! policy used by transaction lists and the recent view.

use uuid::Uuid;

use crate::domain::{Transaction, TransactionKind};

/// Conjunction of optional constraints; `None` is a wildcard that always
/// matches.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match on the description.
    pub search: Option<String>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub account: Option<Uuid>,
}

impl TransactionFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        let search_match = self.search.as_deref().map_or(true, |needle| {
            txn.description
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let kind_match = self.kind.map_or(true, |kind| txn.kind == kind);
        let category_match = self
            .category
            .as_deref()
            .map_or(true, |category| txn.category == category);
        let account_match = self
            .account
            .map_or(true, |account| txn.account_id == account);
        search_match && kind_match && category_match && account_match
    }
}

/// Survivors in storage order. Constraints only remove items, never reorder.
pub fn select<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|txn| filter.matches(txn)).collect()
}

/// Survivors most-recently-added first, the ordering every transaction list
/// presents.
pub fn newest_first<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .rev()
        .filter(|txn| filter.matches(txn))
        .collect()
}

/// The most recent `limit` transactions of one account, newest first.
pub fn recent(transactions: &[Transaction], account: Uuid, limit: usize) -> Vec<&Transaction> {
    transactions
        .iter()
        .rev()
        .filter(|txn| txn.account_id == account)
        .take(limit)
        .collect()
}
