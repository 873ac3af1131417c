//! CSV fixtures written to temporary directories

use std::fs;
use std::path::{Path, PathBuf};

use featrank_core::{ReportConfig, NUM_FEATURES};
use tempfile::TempDir;

/// Header for the 15 latent feature columns
pub fn feature_header() -> String {
    (1..=NUM_FEATURES)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Comma-joined 15-vector with the given leading values, rest zero
pub fn feature_cells(leading: &[f64]) -> String {
    (0..NUM_FEATURES)
        .map(|i| leading.get(i).copied().unwrap_or(0.0).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Two items: A loads only feature 1, B only feature 2; weights all 1;
/// user 4469 prefers [2, 3, 0, ...].
pub fn two_item_dataset() -> (TempDir, ReportConfig) {
    let dir = TempDir::new().unwrap();
    let header = feature_header();

    let items = format!(
        "Movie ID,Title,{header}\n1,Movie A,{}\n2,Movie B,{}\n",
        feature_cells(&[1.0]),
        feature_cells(&[0.0, 1.0]),
    );
    let users = format!(
        "User,{header}\n12,{}\n4469,{}\n",
        feature_cells(&[9.0, 9.0]),
        feature_cells(&[2.0, 3.0]),
    );
    let weights = format!("{header}\n{}\n", feature_cells(&[1.0; NUM_FEATURES]));

    let config = ReportConfig {
        items_path: write(dir.path(), "items.csv", &items),
        users_path: write(dir.path(), "users.csv", &users),
        weights_path: write(dir.path(), "weights.csv", &weights),
        ..ReportConfig::default()
    };
    (dir, config)
}
