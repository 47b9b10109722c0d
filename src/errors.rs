use thiserror::Error;

/// Error type that captures common ledger failures.
///
/// No variant is fatal: validation and lookup failures abort the offending
/// operation without touching state, and storage failures leave the session
/// running in memory.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Report range not selected")]
    RangeNotSelected,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
