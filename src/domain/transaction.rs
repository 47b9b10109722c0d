//! Transaction records and the draft shape accepted from input forms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed ledger entry against a single account.
///
/// Sign convention: `income` and `initial` amounts are positive, `expense`
/// amounts are negative with the user-entered magnitude.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub account_id: Uuid,
    pub date: NaiveDate,
}

impl Transaction {
    /// Whether the stored sign agrees with the transaction kind
    /// (negative iff expense).
    pub fn sign_matches_kind(&self) -> bool {
        match self.kind {
            TransactionKind::Expense => self.amount < 0.0,
            TransactionKind::Income | TransactionKind::Initial => self.amount >= 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Initial,
}

impl TransactionKind {
    /// Applies the sign convention to a user-entered magnitude.
    pub fn signed(self, magnitude: f64) -> f64 {
        match self {
            TransactionKind::Expense => -magnitude.abs(),
            TransactionKind::Income | TransactionKind::Initial => magnitude.abs(),
        }
    }
}

/// Unvalidated transaction fields as entered by the user.
///
/// `amount` carries the magnitude; the sign is applied from `kind` when the
/// draft is committed.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub account_id: Uuid,
    pub date: NaiveDate,
}
