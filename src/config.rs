//! Configuration primitives for the CharacterBase engine.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/CharacterBase/config.toml on Windows
//!   $XDG_DATA_HOME/CharacterBase/config.toml on Linux
//!   ~/Library/Application Support/CharacterBase/config.toml on macOS
//!
//! The config tracks the characters directory override and the sync tuning
//! knobs consumed by the sync engine. The host editor owns the event loop;
//! the delay/interval values here tell it how to schedule engine callbacks.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Optional override for the directory holding saved character documents.
    /// When unset, `<workspace root>/characters` is used.
    pub characters_dir: Option<std::path::PathBuf>,
    /// Sync engine tuning (apply delay, reconcile cadence).
    #[serde(default)]
    pub sync: SyncSettings,
}

/// Scheduling knobs for the sync engine's host-driven triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Delay (ms) the host should wait after a panel-added event before
    /// invoking the single-panel apply pass, letting the panel finish
    /// constructing its controls first.
    #[serde(default = "default_apply_delay_ms")]
    pub apply_delay_ms: u64,
    /// Minimum seconds between fallback reconciliation passes. Reconciliation
    /// only refreshes classification bookkeeping; it never re-applies data.
    #[serde(default = "default_reconcile_interval_secs")]
    pub reconcile_interval_secs: u64,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            apply_delay_ms: default_apply_delay_ms(),
            reconcile_interval_secs: default_reconcile_interval_secs(),
        }
    }
}

const fn default_apply_delay_ms() -> u64 {
    100
}

const fn default_reconcile_interval_secs() -> u64 {
    10
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Returns the root directory where CharacterBase stores data.
///
/// Order of precedence:
/// 1. `CHARACTERBASE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("CHARACTERBASE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("CharacterBase"))
}

/// Returns the config directory (same as workspace root for now).
pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

/// Resolves the directory holding saved character documents.
pub fn characters_dir(config: &AppConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.characters_dir {
        return Ok(dir.clone());
    }
    Ok(workspace_root()?.join(crate::store::CHARACTERS_SUBDIR))
}
