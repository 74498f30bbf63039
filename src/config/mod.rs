use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        services::DEFAULT_UPCOMING_COUNT,
        utils::{app_data_dir, config_file_in, ensure_dir, series_file_in},
    },
    errors::RecurringError,
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Predictions generated per series for the upcoming list.
    #[serde(default = "Config::default_upcoming_count")]
    pub upcoming_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_file: Option<PathBuf>,
}

impl Config {
    fn default_upcoming_count() -> usize {
        DEFAULT_UPCOMING_COUNT
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upcoming_count: DEFAULT_UPCOMING_COUNT,
            series_file: None,
        }
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, RecurringError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, RecurringError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, RecurringError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), RecurringError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Series file named by the config, or the default one in the base directory.
    pub fn series_file(&self, config: &Config) -> PathBuf {
        config
            .series_file
            .clone()
            .unwrap_or_else(|| series_file_in(&self.base))
    }

    pub fn path(&self) -> &Path {
        &self.path
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

fn write_atomic(path: &Path, data: &str) -> Result<(), RecurringError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.upcoming_count, 2);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().join("nested")).unwrap();
        let config = Config {
            upcoming_count: 5,
            series_file: Some(dir.path().join("series.json")),
        };
        manager.save(&config).unwrap();
        assert!(manager.path().exists());
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "upcoming_count": 4 }"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.upcoming_count, 4);
        assert_eq!(config.series_file, None);
    }

    #[test]
    fn series_file_defaults_to_base_dir() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(
            manager.series_file(&Config::default()),
            dir.path().join("recurring.json")
        );
    }
}
