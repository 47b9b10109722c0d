use crate::domain::CategoryKind;
use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;

pub struct CategoryService;

impl CategoryService {
    /// Appends a category name to the registry list for `kind`. Names are
    /// trimmed and must be unique within their list.
    pub fn add(ledger: &mut Ledger, kind: CategoryKind, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation("category name is required".into()));
        }
        if ledger.categories.contains(kind, name) {
            return Err(LedgerError::Validation(format!(
                "category `{}` already exists",
                name
            )));
        }
        ledger.categories.list_mut(kind).push(name.to_string());
        Ok(())
    }

    /// Removes a name from the registry. Transactions already tagged with it
    /// keep the label; an absent name is a tolerated no-op.
    pub fn remove(ledger: &mut Ledger, kind: CategoryKind, name: &str) {
        ledger.categories.list_mut(kind).retain(|entry| entry != name);
    }
}
