use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a financial account tracked within the ledger.
///
/// `balance` is a derived projection: it is recomputed from the transaction
/// log on load and after every mutation, and is serialized only so snapshots
/// stay self-describing. Stored values are never trusted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub balance: f64,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: 0.0,
        }
    }
}
