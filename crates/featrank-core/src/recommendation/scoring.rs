//! Binding the weighted score to loaded tables.

use featrank_io::{DataColumn, DataTable};

use super::features::{
    feature_matrix, feature_row, weighted_score, FeatureVector, FeatureWeights, UserProfile,
};
use super::USER_COLUMN;
use crate::error::{ReportError, Result};

/// Name of the derived score column appended to the items table
pub fn score_column_name(user_id: i64) -> String {
    format!("user_{}_score", user_id)
}

/// Select a user's preferences by id.
///
/// Fails with `UserNotFound` when no row matches; there is no zero-vector
/// fallback. When several rows match, the first one wins.
pub fn select_user(users: &DataTable, user_id: i64) -> Result<UserProfile> {
    let ids = users.i64_column(USER_COLUMN)?;
    let mut matches = ids
        .iter()
        .enumerate()
        .filter(|&(_, &id)| id == user_id)
        .map(|(row, _)| row);

    let row = matches.next().ok_or(ReportError::UserNotFound(user_id))?;
    let extra = matches.count();
    if extra > 0 {
        tracing::warn!(
            "User {} appears in {} rows, using the first (row {})",
            user_id,
            extra + 1,
            row
        );
    }

    Ok(UserProfile {
        user_id,
        features: feature_row(users, row)?,
    })
}

/// Extract the weight vector from the first row of the weights table.
pub fn load_weights(weights: &DataTable) -> Result<FeatureWeights> {
    if weights.is_empty() {
        return Err(ReportError::EmptyWeights);
    }
    if weights.num_rows() > 1 {
        tracing::debug!(
            "Weights table has {} rows, only the first is used",
            weights.num_rows()
        );
    }
    Ok(FeatureWeights(feature_row(weights, 0)?))
}

/// Score each item vector for one user.
pub fn score_items(
    items: &[FeatureVector],
    weights: &FeatureWeights,
    user: &UserProfile,
) -> Vec<f64> {
    items
        .iter()
        .map(|item| weighted_score(item, &weights.0, &user.features))
        .collect()
}

/// Compute every item's score and append it as a new column.
///
/// Returns the name of the appended column.
pub fn compute_scores(
    items: &mut DataTable,
    weights: &FeatureWeights,
    user: &UserProfile,
) -> Result<String> {
    let matrix = feature_matrix(items)?;
    let scores = score_items(&matrix, weights, user);

    let nan_count = scores.iter().filter(|s| s.is_nan()).count();
    if nan_count > 0 {
        tracing::warn!(
            "{} of {} item scores for user {} are NaN (missing feature values)",
            nan_count,
            scores.len(),
            user.user_id
        );
    }

    let name = score_column_name(user.user_id);
    items.add_column(name.clone(), DataColumn::Float64(scores))?;
    tracing::debug!("Appended score column {}", name);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{feature_label, NUM_FEATURES};
    use featrank_io::IoError;

    fn users_table(ids: &[i64], base: f64) -> DataTable {
        let mut table = DataTable::new()
            .with_column(USER_COLUMN, DataColumn::Int64(ids.to_vec()))
            .unwrap();
        for feature in 1..=NUM_FEATURES {
            let values = (0..ids.len())
                .map(|row| base * row as f64 + feature as f64)
                .collect();
            table
                .add_column(feature_label(feature), DataColumn::Float64(values))
                .unwrap();
        }
        table
    }

    #[test]
    fn test_select_user() {
        let users = users_table(&[12, 4469, 7], 100.0);
        let user = select_user(&users, 4469).unwrap();
        assert_eq!(user.user_id, 4469);
        assert_eq!(user.features[0], 101.0);
        assert_eq!(user.features[14], 115.0);
    }

    #[test]
    fn test_select_user_first_of_duplicates() {
        let users = users_table(&[4469, 4469], 100.0);
        let user = select_user(&users, 4469).unwrap();
        assert_eq!(user.features[0], 1.0);
    }

    #[test]
    fn test_select_user_missing() {
        let users = users_table(&[1, 2], 1.0);
        assert!(matches!(
            select_user(&users, 4469),
            Err(ReportError::UserNotFound(4469))
        ));
    }

    #[test]
    fn test_select_user_requires_integer_ids() {
        let users = DataTable::new()
            .with_column(USER_COLUMN, DataColumn::String(vec!["abc".to_string()]))
            .unwrap();
        assert!(matches!(
            select_user(&users, 1),
            Err(ReportError::Io(IoError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_load_weights_empty() {
        let weights = users_table(&[], 0.0);
        assert!(matches!(
            load_weights(&weights),
            Err(ReportError::EmptyWeights)
        ));
    }

    #[test]
    fn test_load_weights_first_row() {
        let weights = users_table(&[0, 0], 10.0);
        let loaded = load_weights(&weights).unwrap();
        assert_eq!(loaded.0[2], 3.0);
    }

    #[test]
    fn test_compute_scores_appends_column() {
        let mut items = users_table(&[1, 2, 3], 1.0);
        let weights = FeatureWeights::default();
        let mut features = [0.0; NUM_FEATURES];
        features[0] = 1.0;
        let user = UserProfile {
            user_id: 4469,
            features,
        };

        let name = compute_scores(&mut items, &weights, &user).unwrap();
        assert_eq!(name, "user_4469_score");
        assert_eq!(items.f64_column(&name).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_compute_scores_twice_rejected() {
        let mut items = users_table(&[1], 1.0);
        let user = UserProfile {
            user_id: 1,
            features: [1.0; NUM_FEATURES],
        };
        compute_scores(&mut items, &FeatureWeights::default(), &user).unwrap();
        let again = compute_scores(&mut items, &FeatureWeights::default(), &user);
        assert!(matches!(
            again,
            Err(ReportError::Io(IoError::DuplicateColumn(_)))
        ));
    }
}
