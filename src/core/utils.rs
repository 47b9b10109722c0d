use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".finans_core";
const DATA_FILE: &str = "finance_data_v2.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application-specific data directory, defaulting to
/// `~/.finans_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANS_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the single ledger snapshot slot.
pub fn data_file() -> PathBuf {
    app_data_dir().join(DATA_FILE)
}

/// Path to the configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
