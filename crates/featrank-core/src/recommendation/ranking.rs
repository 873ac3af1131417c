//! Descending rankings over a single numeric column.

use std::cmp::Ordering;

use featrank_io::DataTable;
use serde::{Deserialize, Serialize};

use super::features::{check_feature, feature_label};
use super::scoring::score_column_name;
use super::{MOVIE_ID_COLUMN, TITLE_COLUMN};
use crate::error::Result;

/// One ranked item, carrying its position in the source table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    /// Row index in the items table as loaded
    pub row: usize,
    pub movie_id: i64,
    pub title: String,
    /// Value of the ranking column for this row
    pub value: f64,
}

/// Row indices ordered by descending value.
///
/// Ties keep table order and NaN values sort last.
pub fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| compare_descending(values[a], values[b]));
    order
}

fn compare_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Rank items by any numeric column, keeping at most `limit` rows.
pub fn rank_by_column(
    items: &DataTable,
    column: &str,
    limit: Option<usize>,
) -> Result<Vec<RankedItem>> {
    let values = items.f64_column(column)?;
    let ids = items.i64_column(MOVIE_ID_COLUMN)?;
    let titles = items.string_column(TITLE_COLUMN)?;

    let order = descending_order(&values);
    let limit = limit.unwrap_or(order.len());

    Ok(order
        .into_iter()
        .take(limit)
        .map(|row| RankedItem {
            row,
            movie_id: ids[row],
            title: titles[row].clone(),
            value: values[row],
        })
        .collect())
}

/// Top `k` items by one latent feature (1-based).
///
/// Returns `min(k, N)` rows; fewer than `k` items is not an error.
pub fn top_k_by_feature(items: &DataTable, feature: usize, k: usize) -> Result<Vec<RankedItem>> {
    check_feature(feature)?;
    rank_by_column(items, &feature_label(feature), Some(k))
}

/// Every item ranked by a user's score column (see `compute_scores`).
pub fn rank_by_score(items: &DataTable, user_id: i64) -> Result<Vec<RankedItem>> {
    rank_by_column(items, &score_column_name(user_id), None)
}
