//! The category registry: two ordered name lists, one per flow direction.

use serde::{Deserialize, Serialize};

/// Categories available for tagging transactions, in display order.
///
/// Names on the registry are suggestions at the point of use: removing a name
/// leaves transactions already tagged with it untouched, so historical records
/// keep their original label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRegistry {
    pub income: Vec<String>,
    pub expense: Vec<String>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            income: ["Maaş", "Bonus", "Satış", "Diğer"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            expense: ["Fatura", "Market", "Ulaşım", "Kira", "Eğlence", "Sağlık", "Diğer"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl CategoryRegistry {
    pub fn list(&self, kind: CategoryKind) -> &[String] {
        match kind {
            CategoryKind::Income => &self.income,
            CategoryKind::Expense => &self.expense,
        }
    }

    pub fn list_mut(&mut self, kind: CategoryKind) -> &mut Vec<String> {
        match kind {
            CategoryKind::Income => &mut self.income,
            CategoryKind::Expense => &mut self.expense,
        }
    }

    pub fn contains(&self, kind: CategoryKind, name: &str) -> bool {
        self.list(kind).iter().any(|entry| entry == name)
    }
}

/// Which of the two registry lists a category belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}
