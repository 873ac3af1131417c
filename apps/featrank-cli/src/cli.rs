//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use featrank_core::{OutputFormat, ReportConfig};

/// Rank items for a user from factorized latent-feature tables
#[derive(Debug, Parser)]
#[command(name = "featrank", version, about)]
pub struct Cli {
    /// TOML config file (default: ./featrank.toml, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Items table (Movie ID, Title, 1..15)
    #[arg(long, value_name = "PATH")]
    pub items: Option<PathBuf>,

    /// Users table (User, 1..15)
    #[arg(long, value_name = "PATH")]
    pub users: Option<PathBuf>,

    /// Weights table (one row, 1..15)
    #[arg(long, value_name = "PATH")]
    pub weights: Option<PathBuf>,

    /// User to score
    #[arg(long = "user", value_name = "ID")]
    pub user_id: Option<i64>,

    /// Rows listed per feature dimension
    #[arg(long, value_name = "N")]
    pub top_k: Option<usize>,

    /// Feature dimension to list top items for (repeatable)
    #[arg(long = "feature", value_name = "N", value_parser = clap::value_parser!(u8).range(1..=15))]
    pub features: Vec<u8>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Override config fields with the flags that were given
    pub fn apply(&self, config: &mut ReportConfig) {
        if let Some(path) = &self.items {
            config.items_path = path.clone();
        }
        if let Some(path) = &self.users {
            config.users_path = path.clone();
        }
        if let Some(path) = &self.weights {
            config.weights_path = path.clone();
        }
        if let Some(user_id) = self.user_id {
            config.user_id = user_id;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        if !self.features.is_empty() {
            config.feature_dimensions = self.features.iter().map(|&f| f as usize).collect();
        }
    }
}
