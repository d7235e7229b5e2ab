//! Configuration file support.
//!
//! Settings come from `lineage.toml` in the working directory (or the file
//! passed with `--config`). Every field has a default, so the file and each
//! of its sections are optional. Command line flags override file values.
//!
//! ```toml
//! [convert]
//! input = "geneology.xlsx"
//! output = "family.json"
//! sheet = "Sheet1"
//!
//! [serve]
//! port = 8000
//! web_root = "site"
//! artifact_route = "/family.json"
//! artifact_path = "family.json"
//! read_timeout_ms = 10000
//! ```

use std::path::{Path, PathBuf};

use lineage_ingest::{ReadOptions, TableFormat};
use lineage_serve::ServeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lineage.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineageConfig {
    pub convert: ConvertSettings,
    pub serve: ServeConfig,
}

/// Inputs and outputs of the `convert` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSettings {
    /// Genealogy table to read.
    pub input: PathBuf,
    /// JSON artifact to write.
    pub output: PathBuf,
    /// Worksheet to read from a workbook input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    /// Input format; detected from the extension when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TableFormat>,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("geneology.xlsx"),
            output: PathBuf::from("family.json"),
            sheet: None,
            format: None,
        }
    }
}

impl ConvertSettings {
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            format: self.format,
            sheet: self.sheet.clone(),
        }
    }
}

impl LineageConfig {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }
}

/// Loads the explicit config file, or `lineage.toml` from `dir` if present,
/// or the defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<LineageConfig, ConfigError> {
    if let Some(path) = explicit {
        return LineageConfig::from_file(path);
    }
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "loading config file");
        return LineageConfig::from_file(&candidate);
    }
    Ok(LineageConfig::default())
}
