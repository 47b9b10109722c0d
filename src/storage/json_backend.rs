//! Durable snapshot storage: one pretty-printed JSON file, written by
//! staging to a temporary path and renaming over the target so a failed
//! write never corrupts the previous snapshot.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::{data_file, ensure_dir};
use crate::errors::Result;
use crate::ledger::Ledger;

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default application data path.
    pub fn new_default() -> Result<Self> {
        let path = data_file();
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<Ledger>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Account;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("finance_data_v2.json"));
        (storage, temp)
    }

    #[test]
    fn missing_file_loads_as_empty_baseline() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load().expect("load").is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut ledger = Ledger::new();
        ledger.add_account(Account::new("Banka"));
        storage.save(&ledger).expect("save snapshot");

        let loaded = storage.load().expect("load").expect("snapshot present");
        assert_eq!(loaded.accounts.len(), 1);
        assert_eq!(loaded.accounts[0].name, "Banka");
    }

    #[test]
    fn failed_stage_write_preserves_previous_snapshot() {
        let (storage, _guard) = storage_with_temp_dir();
        let ledger = Ledger::new();
        storage.save(&ledger).expect("initial save");
        let original = fs::read_to_string(storage.path()).expect("read original");

        // A directory squatting on the staging path forces File::create to fail.
        let tmp = tmp_path(storage.path());
        fs::create_dir_all(&tmp).unwrap();
        let mut mutated = Ledger::new();
        mutated.add_account(Account::new("Nakit"));
        assert!(storage.save(&mutated).is_err());

        let current = fs::read_to_string(storage.path()).expect("read after failure");
        assert_eq!(current, original);
    }
}
