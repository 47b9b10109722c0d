use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Account, Transaction, TransactionKind};
use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;

/// Description and category stamped on synthesized opening-balance
/// transactions, part of the snapshot contract.
pub const OPENING_DESCRIPTION: &str = "Başlangıç Bakiyesi";
pub const OPENING_CATEGORY: &str = "Initial";

pub struct AccountService;

impl AccountService {
    /// Creates an account. The account itself always starts at balance 0; a
    /// nonzero opening balance is recorded as a synthetic `initial`
    /// transaction dated today, so the balance stays fully derived.
    pub fn add(ledger: &mut Ledger, name: &str, opening_balance: f64) -> Result<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation("account name is required".into()));
        }
        if !opening_balance.is_finite() {
            return Err(LedgerError::Validation(
                "opening balance must be a number".into(),
            ));
        }
        if opening_balance < 0.0 {
            return Err(LedgerError::Validation(
                "opening balance cannot be negative".into(),
            ));
        }
        let id = ledger.add_account(Account::new(name));
        if opening_balance != 0.0 {
            let transaction = Transaction {
                id: ledger.next_transaction_id(),
                description: OPENING_DESCRIPTION.into(),
                amount: opening_balance,
                kind: TransactionKind::Initial,
                category: OPENING_CATEGORY.into(),
                account_id: id,
                date: Utc::now().date_naive(),
            };
            ledger.add_transaction(transaction);
        }
        Ok(id)
    }

    /// Removes an account and every transaction that references it. The last
    /// remaining account cannot be deleted; if the removed account was
    /// active, the first remaining account takes over.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> Result<()> {
        if ledger.account(id).is_none() {
            return Err(LedgerError::NotFound(format!("account {}", id)));
        }
        if ledger.accounts.len() <= 1 {
            return Err(LedgerError::Validation(
                "cannot delete the last account".into(),
            ));
        }
        ledger.accounts.retain(|account| account.id != id);
        ledger.transactions.retain(|txn| txn.account_id != id);
        if ledger.active_account_id == Some(id) {
            ledger.active_account_id = ledger.accounts.first().map(|account| account.id);
        }
        Ok(())
    }

    pub fn set_active(ledger: &mut Ledger, id: Uuid) -> Result<()> {
        if ledger.account(id).is_none() {
            return Err(LedgerError::Validation(format!(
                "account {} does not exist",
                id
            )));
        }
        ledger.active_account_id = Some(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionDraft;
    use crate::core::services::TransactionService;
    use chrono::NaiveDate;

    fn expense(account_id: Uuid, amount: f64) -> TransactionDraft {
        TransactionDraft {
            description: "Market".into(),
            amount,
            kind: TransactionKind::Expense,
            category: "Market".into(),
            account_id,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn nonzero_opening_balance_synthesizes_initial_transaction() {
        let mut ledger = Ledger::new();
        let id = AccountService::add(&mut ledger, "Banka", 1500.0).unwrap();
        assert_eq!(ledger.account(id).unwrap().balance, 0.0, "balance is derived");
        assert_eq!(ledger.transactions.len(), 1);
        let txn = &ledger.transactions[0];
        assert_eq!(txn.kind, TransactionKind::Initial);
        assert_eq!(txn.amount, 1500.0);
        assert_eq!(txn.description, OPENING_DESCRIPTION);
        assert_eq!(txn.account_id, id);

        ledger.recompute_balances();
        assert_eq!(ledger.account(id).unwrap().balance, 1500.0);
    }

    #[test]
    fn zero_opening_balance_creates_no_transaction() {
        let mut ledger = Ledger::new();
        AccountService::add(&mut ledger, "Nakit", 0.0).unwrap();
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn blank_name_and_bad_balance_are_rejected() {
        let mut ledger = Ledger::new();
        assert!(matches!(
            AccountService::add(&mut ledger, "  ", 10.0),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            AccountService::add(&mut ledger, "Banka", f64::NAN),
            Err(LedgerError::Validation(_))
        ));
        assert!(ledger.accounts.is_empty());
    }

    #[test]
    fn deleting_account_cascades_to_its_transactions_only() {
        let mut ledger = Ledger::new();
        let bank = AccountService::add(&mut ledger, "Banka", 0.0).unwrap();
        let cash = AccountService::add(&mut ledger, "Nakit", 0.0).unwrap();
        TransactionService::add(&mut ledger, expense(bank, 50.0)).unwrap();
        TransactionService::add(&mut ledger, expense(cash, 20.0)).unwrap();
        TransactionService::add(&mut ledger, expense(bank, 30.0)).unwrap();

        AccountService::remove(&mut ledger, bank).unwrap();
        assert_eq!(ledger.accounts.len(), 1);
        assert_eq!(ledger.transactions.len(), 1);
        assert_eq!(ledger.transactions[0].account_id, cash);
    }

    #[test]
    fn deleting_active_account_promotes_first_remaining() {
        let mut ledger = Ledger::new();
        let bank = AccountService::add(&mut ledger, "Banka", 0.0).unwrap();
        let cash = AccountService::add(&mut ledger, "Nakit", 0.0).unwrap();
        AccountService::set_active(&mut ledger, cash).unwrap();

        AccountService::remove(&mut ledger, cash).unwrap();
        assert_eq!(ledger.active_account_id, Some(bank));
    }

    #[test]
    fn last_account_cannot_be_deleted() {
        let mut ledger = Ledger::new();
        let only = AccountService::add(&mut ledger, "Banka", 500.0).unwrap();
        let err = AccountService::remove(&mut ledger, only).expect_err("must reject");
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(ledger.accounts.len(), 1);
        assert_eq!(ledger.transactions.len(), 1, "cascade must not run");
    }

    #[test]
    fn set_active_rejects_unknown_account() {
        let mut ledger = Ledger::new();
        AccountService::add(&mut ledger, "Banka", 0.0).unwrap();
        let err = AccountService::set_active(&mut ledger, Uuid::new_v4()).expect_err("must reject");
        assert!(matches!(err, LedgerError::Validation(_)));
    }
}
