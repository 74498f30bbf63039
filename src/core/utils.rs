use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::RecurringError;

const DEFAULT_DIR_NAME: &str = ".recurring_core";
const CONFIG_FILE: &str = "config.json";
const SERIES_FILE: &str = "recurring.json";

/// Returns the application data directory, defaulting to `~/.recurring_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("RECURRING_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default location of the recurring-series file.
pub fn series_file_in(base: &Path) -> PathBuf {
    base.join(SERIES_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), RecurringError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
