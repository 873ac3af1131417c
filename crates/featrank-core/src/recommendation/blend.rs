//! Linear blend of two item scorers.
//!
//! Both scorers are read as offsets from a shared bias baseline
//! (`intercept + item bias + user bias`). A scorer with no score for an item
//! contributes a zero offset, so the blend falls back towards the baseline.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Bias terms shared by both blended scorers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiasBaseline {
    pub intercept: f64,
    pub item_bias: f64,
    pub user_bias: f64,
}

impl BiasBaseline {
    pub fn value(&self) -> f64 {
        self.intercept + self.item_bias + self.user_bias
    }
}

/// `baseline + (1 - w) * left_offset + w * right_offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBlend {
    weight: f64,
}

impl LinearBlend {
    /// Create a blend; the weight must lie in `[0, 1]`.
    pub fn new(weight: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&weight) {
            Ok(Self { weight })
        } else {
            Err(ReportError::InvalidBlendWeight(weight))
        }
    }

    /// Weight given to the right-hand scorer
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Blend two optional scores around `baseline`.
    pub fn blend(&self, baseline: f64, left: Option<f64>, right: Option<f64>) -> f64 {
        let offset = |score: Option<f64>| score.map_or(0.0, |s| s - baseline);
        baseline + (1.0 - self.weight) * offset(left) + self.weight * offset(right)
    }

    /// Blend per-item score slices of equal length.
    pub fn blend_all(
        &self,
        baseline: &BiasBaseline,
        left: &[Option<f64>],
        right: &[Option<f64>],
    ) -> Vec<f64> {
        let base = baseline.value();
        left.iter()
            .zip(right)
            .map(|(&l, &r)| self.blend(base, l, r))
            .collect()
    }
}
