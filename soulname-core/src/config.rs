//! Configuration for Soul Name.
//!
//! Maps directly to `soulname.toml`:
//!
//! ```toml
//! [general]
//! log_level = "info"
//!
//! [selector]
//! history_window = 5
//!
//! [dataset]
//! path = "names_db.json"   # omit to use the embedded catalog
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dataset::NameDataset;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoulnameConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Name selection tuning.
    #[serde(default)]
    pub selector: SelectorConfig,
    /// Where the name catalog comes from.
    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl SoulnameConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `SoulnameError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::SoulnameError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Name selector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// How many of the newest history entries are checked for duplicates.
    /// Zero disables duplicate avoidance.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            history_window: default_history_window(),
        }
    }
}

/// Dataset source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON catalog on disk. `None` uses the embedded catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    /// Load the configured catalog.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> crate::error::Result<NameDataset> {
        match &self.path {
            Some(path) => NameDataset::from_file(path),
            None => NameDataset::builtin().cloned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_history_window() -> usize { 5 }
