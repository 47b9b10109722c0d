//! CSV serialization of transaction rows.
//!
//! The header text, field order, and two-decimal amount format are a
//! compatibility contract for downstream consumers of the export.

use chrono::NaiveDate;

use crate::domain::{Account, Transaction};
use crate::errors::{LedgerError, Result};

pub const CSV_HEADER: [&str; 5] = ["Tarih", "Açıklama", "Kategori", "Hesap", "Tutar"];

/// Placeholder account name for rows whose account reference dangles.
pub const UNKNOWN_ACCOUNT: &str = "Bilinmeyen";

/// Renders one header row plus one row per transaction. Dates are formatted
/// for `locale`; descriptions and categories pass through as UTF-8.
pub fn render(
    transactions: &[&Transaction],
    accounts: &[Account],
    locale: &str,
) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for txn in transactions {
        let account_name = accounts
            .iter()
            .find(|account| account.id == txn.account_id)
            .map_or(UNKNOWN_ACCOUNT, |account| account.name.as_str());
        writer.write_record([
            format_date(txn.date, locale),
            txn.description.clone(),
            txn.category.clone(),
            account_name.to_string(),
            format!("{:.2}", txn.amount),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| LedgerError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Export file name for a report generated on `date`:
/// `rapor_<ISO-date>.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("rapor_{}.csv", date.format("%Y-%m-%d"))
}

fn format_date(date: NaiveDate, locale: &str) -> String {
    match locale {
        "tr-TR" => date.format("%d.%m.%Y").to_string(),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}
