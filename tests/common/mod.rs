#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use finans_core::{config::Config, core::LedgerManager, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated manager backed by a unique snapshot file per test.
pub fn setup_manager() -> (LedgerManager, PathBuf) {
    let (storage, path) = setup_storage();
    let manager =
        LedgerManager::open(Box::new(storage), Config::default()).expect("open ledger manager");
    (manager, path)
}

/// Creates a JSON storage backend rooted in a fresh temp directory.
pub fn setup_storage() -> (JsonStorage, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("finance_data_v2.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    (JsonStorage::new(path.clone()), path)
}

/// Reopens a manager over an existing snapshot file.
pub fn reopen_manager(path: &Path) -> LedgerManager {
    let storage = JsonStorage::new(path.to_path_buf());
    LedgerManager::open(Box::new(storage), Config::default()).expect("reopen ledger manager")
}
