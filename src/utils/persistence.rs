use std::{fs, path::Path};

use crate::{errors::RecurringError, ledger::RecurringSeries};

/// Writes the series list to disk atomically by staging to a temporary file.
pub fn save_series_to_file(series: &[RecurringSeries], path: &Path) -> Result<(), RecurringError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(series)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a series list from disk, returning structured errors on failure.
pub fn load_series_from_file(path: &Path) -> Result<Vec<RecurringSeries>, RecurringError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
