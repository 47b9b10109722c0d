//! Read-side aggregation: period summaries, category breakdowns, and
//! per-account totals.

use uuid::Uuid;

use crate::domain::Transaction;
use crate::errors::Result;
use crate::report::{CategorySlice, PeriodSummary, ReportRange};

/// All-time signed totals for one account's dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccountTotals {
    pub income: f64,
    pub expense: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Transactions whose date falls within the range, inclusive on both
    /// bounds at day granularity.
    pub fn in_range<'a>(
        transactions: &'a [Transaction],
        range: &ReportRange,
    ) -> Result<Vec<&'a Transaction>> {
        let (from, to) = range.resolve()?;
        Ok(transactions
            .iter()
            .filter(|txn| txn.date >= from && txn.date <= to)
            .collect())
    }

    /// Income, expense, and net totals for the selected period. `expense`
    /// keeps its negative sign, so `net = income + expense`.
    pub fn summarize_range(
        transactions: &[Transaction],
        range: &ReportRange,
    ) -> Result<PeriodSummary> {
        let mut summary = PeriodSummary::default();
        for txn in Self::in_range(transactions, range)? {
            if txn.amount > 0.0 {
                summary.income += txn.amount;
            } else {
                summary.expense += txn.amount;
            }
        }
        summary.net = summary.income + summary.expense;
        Ok(summary)
    }

    /// Expense totals per category, absolute magnitudes, in first-seen order.
    /// An empty result simply means there were no expenses.
    pub fn category_breakdown<'a, I>(transactions: I) -> Vec<CategorySlice>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut slices: Vec<CategorySlice> = Vec::new();
        for txn in transactions.into_iter().filter(|txn| txn.amount < 0.0) {
            match slices.iter_mut().find(|slice| slice.label == txn.category) {
                Some(slice) => slice.total += txn.amount.abs(),
                None => slices.push(CategorySlice {
                    label: txn.category.clone(),
                    total: txn.amount.abs(),
                }),
            }
        }
        slices
    }

    /// All-time income and expense sums for one account, `initial`
    /// transactions included on the income side.
    pub fn account_totals(transactions: &[Transaction], account: Uuid) -> AccountTotals {
        let mut totals = AccountTotals::default();
        for txn in transactions.iter().filter(|txn| txn.account_id == account) {
            if txn.amount > 0.0 {
                totals.income += txn.amount;
            } else {
                totals.expense += txn.amount;
            }
        }
        totals
    }
}
