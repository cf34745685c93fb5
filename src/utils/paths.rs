use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".wallet_tracker";
const STORAGE_FILE: &str = "storage.json";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "WALLET_TRACKER_HOME";

/// Returns the application data directory, defaulting to `~/.wallet_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn storage_file_in(base: &Path) -> PathBuf {
    base.join(STORAGE_FILE)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
