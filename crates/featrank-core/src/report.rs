//! End-to-end report: load, rank by feature, score, rank by score, render.

use std::io::Write;

use comfy_table::{presets, CellAlignment, Table};
use featrank_io::{load_table, DataTable};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::recommendation::{
    check_feature, compute_scores, load_weights, rank_by_score, select_user, top_k_by_feature,
    RankedItem, MOVIE_ID_COLUMN, TITLE_COLUMN,
};

/// The three input tables
#[derive(Debug, Clone)]
pub struct Tables {
    pub items: DataTable,
    pub users: DataTable,
    pub weights: DataTable,
}

/// Load items, users and weights from the configured paths
pub fn load_tables(config: &ReportConfig) -> Result<Tables> {
    Ok(Tables {
        items: load_table(&config.items_path)?,
        users: load_table(&config.users_path)?,
        weights: load_table(&config.weights_path)?,
    })
}

/// Top items along one feature dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTop {
    pub feature: usize,
    pub items: Vec<RankedItem>,
}

/// Everything the report prints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub top_k: usize,
    pub feature_tops: Vec<FeatureTop>,
    pub user_id: i64,
    pub score_column: String,
    /// All items, best first
    pub recommendations: Vec<RankedItem>,
}

/// Output encoding for a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load the configured tables and build the report
pub fn build_report(config: &ReportConfig) -> Result<ScoreReport> {
    let tables = load_tables(config)?;
    report_from_tables(tables, config)
}

/// Build the report from already loaded tables
pub fn report_from_tables(tables: Tables, config: &ReportConfig) -> Result<ScoreReport> {
    let Tables {
        mut items,
        users,
        weights,
    } = tables;

    check_features(config)?;
    let feature_tops = config
        .feature_dimensions
        .iter()
        .map(|&feature| feature_top(&items, feature, config.top_k))
        .collect::<Result<Vec<_>>>()?;
    let (score_column, recommendations) =
        score_user(&mut items, &users, &weights, config.user_id)?;

    Ok(ScoreReport {
        top_k: config.top_k,
        feature_tops,
        user_id: config.user_id,
        score_column,
        recommendations,
    })
}

// Fail on a bad dimension before any work is done
fn check_features(config: &ReportConfig) -> Result<()> {
    for &feature in &config.feature_dimensions {
        check_feature(feature)?;
    }
    Ok(())
}

fn feature_top(items: &DataTable, feature: usize, top_k: usize) -> Result<FeatureTop> {
    let top = top_k_by_feature(items, feature, top_k)?;
    tracing::debug!("Ranked {} items by feature {}", top.len(), feature);
    Ok(FeatureTop {
        feature,
        items: top,
    })
}

/// Append the user's score column and rank every item by it
fn score_user(
    items: &mut DataTable,
    users: &DataTable,
    weights: &DataTable,
    user_id: i64,
) -> Result<(String, Vec<RankedItem>)> {
    let user = select_user(users, user_id)?;
    let weights = load_weights(weights)?;
    let score_column = compute_scores(items, &weights, &user)?;
    let recommendations = rank_by_score(items, user.user_id)?;
    tracing::info!(
        "Scored {} items for user {}",
        recommendations.len(),
        user.user_id
    );
    Ok((score_column, recommendations))
}

/// Header line above a feature block
pub fn feature_header(top_k: usize, feature: usize) -> String {
    if top_k == 5 {
        format!("Top five most relevant for feature {}:", feature)
    } else {
        format!("Top {} most relevant for feature {}:", top_k, feature)
    }
}

/// Header line above the recommendation block
pub fn recommendation_header(user_id: i64) -> String {
    format!("Top five most recommended items for user {}:", user_id)
}

fn item_table(items: &[RankedItem], value_column: Option<&str>) -> Table {
    let mut header = vec!["", MOVIE_ID_COLUMN, TITLE_COLUMN];
    if let Some(name) = value_column {
        header.push(name);
    }

    let mut table = Table::new();
    table.load_preset(presets::NOTHING).set_header(header);

    for item in items {
        let mut row = vec![
            item.row.to_string(),
            item.movie_id.to_string(),
            item.title.clone(),
        ];
        if value_column.is_some() {
            row.push(format!("{:.6}", item.value));
        }
        table.add_row(row);
    }

    for index in [0, 1, 3] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Header and table for one feature dimension
pub fn feature_block(top_k: usize, top: &FeatureTop) -> String {
    format!(
        "{}\n{}\n",
        feature_header(top_k, top.feature),
        item_table(&top.items, None)
    )
}

/// Header and table for the ranked recommendations
pub fn recommendation_block(user_id: i64, score_column: &str, items: &[RankedItem]) -> String {
    format!(
        "{}\n{}\n",
        recommendation_header(user_id),
        item_table(items, Some(score_column))
    )
}

/// Render the report as plain text blocks in fixed order
pub fn render_text(report: &ScoreReport) -> String {
    let mut out = String::new();
    for top in &report.feature_tops {
        out.push_str(&feature_block(report.top_k, top));
    }
    out.push_str(&recommendation_block(
        report.user_id,
        &report.score_column,
        &report.recommendations,
    ));
    out
}

/// Render the report as pretty-printed JSON
pub fn render_json(report: &ScoreReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report in the requested format
pub fn write_report<W: Write>(
    report: &ScoreReport,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => {
            let mut json = render_json(report)?;
            json.push('\n');
            json
        }
    };
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Build the report for `config` and write it.
///
/// Text output is written block by block, so the feature blocks are already
/// out when scoring fails (e.g. an unknown user). JSON is written only once
/// the whole report is built.
pub fn run<W: Write>(config: &ReportConfig, format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write_text_blocks(load_tables(config)?, config, writer),
        OutputFormat::Json => {
            let report = build_report(config)?;
            write_report(&report, format, writer)
        }
    }
}

/// Write each text block as soon as it is produced
pub fn write_text_blocks<W: Write>(
    tables: Tables,
    config: &ReportConfig,
    writer: &mut W,
) -> Result<()> {
    let Tables {
        mut items,
        users,
        weights,
    } = tables;

    check_features(config)?;
    for &feature in &config.feature_dimensions {
        let top = feature_top(&items, feature, config.top_k)?;
        writer.write_all(feature_block(config.top_k, &top).as_bytes())?;
        writer.flush()?;
    }

    let (score_column, recommendations) =
        score_user(&mut items, &users, &weights, config.user_id)?;
    let block = recommendation_block(config.user_id, &score_column, &recommendations);
    writer.write_all(block.as_bytes())?;
    writer.flush()?;
    Ok(())
}
