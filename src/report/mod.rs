//! Report projections: date ranges, period summaries, and CSV export.

pub mod csv;

use chrono::NaiveDate;

use crate::errors::{LedgerError, Result};

/// Transient, inclusive date-range selection for reports. Never persisted;
/// both bounds must be picked before anything is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Both bounds, or [`LedgerError::RangeNotSelected`] when either is
    /// missing.
    pub fn resolve(&self) -> Result<(NaiveDate, NaiveDate)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Ok((from, to)),
            _ => Err(LedgerError::RangeNotSelected),
        }
    }
}

/// Income/expense/net totals over a selected period. `expense` stays
/// negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodSummary {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// One label/value pair of the expense breakdown, chart-ready.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub label: String,
    pub total: f64,
}
