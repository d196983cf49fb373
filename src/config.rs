// Configuration: where the database lives

use eyre::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database file used when nothing else is configured, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "filters.db";

/// Optional YAML config file contents
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file; relative paths are resolved against the config file's directory
    pub database: Option<PathBuf>,
}

impl Config {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))?
        };

        if let (Some(db), Some(dir)) = (config.database.as_mut(), path.parent()) {
            if db.is_relative() {
                *db = dir.join(&*db);
            }
        }

        Ok(config)
    }
}

/// `$XDG_CONFIG_HOME/filtertrack/config.yaml` or the platform equivalent
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("filtertrack").join("config.yaml"))
}

/// Pick the database path.
///
/// Precedence: `--db` flag (or `FILTERTRACK_DB`), then the config file, then
/// [`DEFAULT_DB_FILE`]. An explicitly named config file must exist; the
/// default one is skipped when absent.
pub fn resolve_db_path(db_flag: Option<PathBuf>, config_flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(db) = db_flag {
        debug!(path = ?db, "Using database from command line");
        return Ok(db);
    }

    let config = match config_flag {
        Some(path) => Some(Config::load(&path)?),
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => Some(Config::load(&path)?),
            None => None,
        },
    };

    match config.and_then(|c| c.database) {
        Some(db) => {
            debug!(path = ?db, "Using database from config file");
            Ok(db)
        }
        None => Ok(PathBuf::from(DEFAULT_DB_FILE)),
    }
}
