//! Derives account balances from the transaction log.

use crate::domain::{Account, Transaction, TransactionKind};

/// Recomputes every account's balance from scratch.
///
/// Balance = the account's `initial` transaction amount (0 when none; first
/// match wins should a snapshot ever hold more than one) plus the sum of its
/// non-`initial` amounts. Idempotent and side-effect-free beyond the balance
/// fields themselves, so it is safe to run before every projection.
pub fn recompute(accounts: &mut [Account], transactions: &[Transaction]) {
    for account in accounts.iter_mut() {
        let opening = transactions
            .iter()
            .find(|txn| txn.kind == TransactionKind::Initial && txn.account_id == account.id)
            .map_or(0.0, |txn| txn.amount);
        let activity: f64 = transactions
            .iter()
            .filter(|txn| txn.account_id == account.id && txn.kind != TransactionKind::Initial)
            .map(|txn| txn.amount)
            .sum();
        account.balance = opening + activity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn txn(account_id: Uuid, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: amount as i64,
            description: "test".into(),
            amount,
            kind,
            category: "Diğer".into(),
            account_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn balance_is_opening_plus_activity() {
        let mut accounts = vec![Account::new("Banka")];
        let id = accounts[0].id;
        let transactions = vec![
            txn(id, TransactionKind::Initial, 500.0),
            txn(id, TransactionKind::Income, 1000.0),
            txn(id, TransactionKind::Expense, -300.0),
        ];
        recompute(&mut accounts, &transactions);
        assert_eq!(accounts[0].balance, 1200.0);
    }

    #[test]
    fn missing_initial_transaction_means_base_zero() {
        let mut accounts = vec![Account::new("Nakit")];
        let id = accounts[0].id;
        let transactions = vec![
            txn(id, TransactionKind::Income, 250.0),
            txn(id, TransactionKind::Expense, -100.0),
        ];
        recompute(&mut accounts, &transactions);
        assert_eq!(accounts[0].balance, 150.0);
    }

    #[test]
    fn only_the_owning_account_is_credited() {
        let mut accounts = vec![Account::new("Banka"), Account::new("Nakit")];
        let bank = accounts[0].id;
        let transactions = vec![txn(bank, TransactionKind::Income, 75.0)];
        recompute(&mut accounts, &transactions);
        assert_eq!(accounts[0].balance, 75.0);
        assert_eq!(accounts[1].balance, 0.0);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut accounts = vec![Account::new("Banka")];
        let id = accounts[0].id;
        let transactions = vec![
            txn(id, TransactionKind::Initial, 40.0),
            txn(id, TransactionKind::Expense, -15.0),
        ];
        recompute(&mut accounts, &transactions);
        recompute(&mut accounts, &transactions);
        assert_eq!(accounts[0].balance, 25.0);
    }
}
