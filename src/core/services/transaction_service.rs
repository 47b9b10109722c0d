//! Business logic helpers for managing transactions.

use crate::domain::{Transaction, TransactionDraft};
use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates the draft, applies the sign convention, and appends the
    /// transaction. Returns the freshly assigned id.
    pub fn add(ledger: &mut Ledger, draft: TransactionDraft) -> Result<i64> {
        Self::validate(ledger, &draft)?;
        let transaction = Transaction {
            id: ledger.next_transaction_id(),
            description: draft.description,
            amount: draft.kind.signed(draft.amount),
            kind: draft.kind,
            category: draft.category,
            account_id: draft.account_id,
            date: draft.date,
        };
        Ok(ledger.add_transaction(transaction))
    }

    /// Replaces every field of the transaction identified by `id` from the
    /// draft, under the same validation as [`TransactionService::add`].
    pub fn update(ledger: &mut Ledger, id: i64, draft: TransactionDraft) -> Result<()> {
        Self::validate(ledger, &draft)?;
        let txn = ledger
            .transaction_mut(id)
            .ok_or_else(|| LedgerError::NotFound(format!("transaction {}", id)))?;
        txn.description = draft.description;
        txn.amount = draft.kind.signed(draft.amount);
        txn.kind = draft.kind;
        txn.category = draft.category;
        txn.account_id = draft.account_id;
        txn.date = draft.date;
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance.
    pub fn remove(ledger: &mut Ledger, id: i64) -> Result<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or_else(|| LedgerError::NotFound(format!("transaction {}", id)))
    }

    fn validate(ledger: &Ledger, draft: &TransactionDraft) -> Result<()> {
        if draft.description.trim().is_empty() {
            return Err(LedgerError::Validation("description is required".into()));
        }
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(LedgerError::Validation(
                "amount must be a positive number".into(),
            ));
        }
        if draft.category.trim().is_empty() {
            return Err(LedgerError::Validation("category is required".into()));
        }
        if ledger.account(draft.account_id).is_none() {
            return Err(LedgerError::Validation(
                "transaction references an unknown account".into(),
            ));
        }
        Ok(())
    }
}
