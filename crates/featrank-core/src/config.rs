//! Configuration for featrank
//!
//! A report is driven by a `ReportConfig`: where the three tables live,
//! which user to score, and which feature dimensions to list. Every field
//! has a default, so a TOML file only needs the values it changes:
//!
//! ```toml
//! items_path = "data/items.csv"
//! users_path = "data/users.csv"
//! weights_path = "data/weights.csv"
//! user_id = 4469
//! top_k = 5
//! feature_dimensions = [1, 2]
//! ```
//!
//! Relative paths are resolved against the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "featrank.toml";

/// Errors that can occur when loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("TOML parse error in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Items table (`Movie ID`, `Title`, `1`..`15`)
    pub items_path: PathBuf,
    /// Users table (`User`, `1`..`15`)
    pub users_path: PathBuf,
    /// Weights table (one row, `1`..`15`)
    pub weights_path: PathBuf,
    /// User to score
    pub user_id: i64,
    /// Rows listed per feature dimension
    pub top_k: usize,
    /// 1-based feature dimensions to list top items for
    pub feature_dimensions: Vec<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            items_path: PathBuf::from("../data/assignment-6-edited_items.csv"),
            users_path: PathBuf::from("../data/assignment-6-edited_users.csv"),
            weights_path: PathBuf::from("../data/assignment-6-edited_weights.csv"),
            user_id: 4469,
            top_k: 5,
            feature_dimensions: vec![1, 2],
        }
    }
}

impl ReportConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config from a TOML file
    pub fn from_toml_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// `./featrank.toml` and `<config dir>/featrank/config.toml` is used,
    /// falling back to the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::info!("Loading config from {}", path.display());
            return Ok(Self::from_toml_file(path)?);
        }

        for candidate in Self::search_paths() {
            if candidate.is_file() {
                tracing::info!("Loading config from {}", candidate.display());
                return Ok(Self::from_toml_file(&candidate)?);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Implicit config locations, in lookup order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("featrank").join("config.toml"));
        }
        paths
    }
}
