//! Latent feature vectors and the weighted score.
//!
//! Every table carries its latent features in columns labeled `"1"` through
//! `"15"`. Columns are resolved by label, so the three tables may order
//! them differently; a missing label is an error rather than a silent
//! misalignment.

use featrank_io::{DataTable, IoError};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Number of latent features per item and user
pub const NUM_FEATURES: usize = 15;

/// One row of latent feature values, index 0 holding feature `"1"`
pub type FeatureVector = [f64; NUM_FEATURES];

/// Per-feature scalar weights (first row of the weights table)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights(pub FeatureVector);

impl Default for FeatureWeights {
    fn default() -> Self {
        Self([1.0; NUM_FEATURES])
    }
}

/// A single user's latent preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub features: FeatureVector,
}

/// Column label for a 1-based feature dimension
pub fn feature_label(feature: usize) -> String {
    feature.to_string()
}

/// Check that a 1-based feature dimension exists
pub fn check_feature(feature: usize) -> Result<()> {
    if (1..=NUM_FEATURES).contains(&feature) {
        Ok(())
    } else {
        Err(ReportError::InvalidFeature(feature))
    }
}

/// Weighted triple product: `sum(item[i] * weights[i] * user[i])`.
pub fn weighted_score(
    item: &FeatureVector,
    weights: &FeatureVector,
    user: &FeatureVector,
) -> f64 {
    item.iter()
        .zip(weights)
        .zip(user)
        .map(|((x, w), u)| x * w * u)
        .sum()
}

/// Read the feature columns of every row.
pub fn feature_matrix(table: &DataTable) -> Result<Vec<FeatureVector>> {
    let mut rows = vec![[0.0; NUM_FEATURES]; table.num_rows()];
    for feature in 1..=NUM_FEATURES {
        let values = table.f64_column(&feature_label(feature))?;
        for (row, value) in rows.iter_mut().zip(values) {
            row[feature - 1] = value;
        }
    }
    Ok(rows)
}

/// Read the feature columns of a single row.
pub fn feature_row(table: &DataTable, row: usize) -> Result<FeatureVector> {
    if row >= table.num_rows() {
        return Err(IoError::OutOfBounds {
            index: row,
            size: table.num_rows(),
        }
        .into());
    }
    let mut features = [0.0; NUM_FEATURES];
    for (i, slot) in features.iter_mut().enumerate() {
        let values = table.f64_column(&feature_label(i + 1))?;
        *slot = values[row];
    }
    Ok(features)
}
