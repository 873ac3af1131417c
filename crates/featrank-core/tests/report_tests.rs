//! End-to-end report tests over CSV files on disk

mod common;

use common::{feature_cells, feature_header, two_item_dataset, write};
use featrank_core::{
    build_report, load_tables, run, OutputFormat, ReportConfig, ReportError,
};
use featrank_io::IoError;

#[test]
fn test_two_item_scenario() {
    let (_dir, config) = two_item_dataset();
    let report = build_report(&config).unwrap();

    assert_eq!(report.score_column, "user_4469_score");
    let ranked: Vec<(&str, f64)> = report
        .recommendations
        .iter()
        .map(|r| (r.title.as_str(), r.value))
        .collect();
    assert_eq!(ranked, vec![("Movie B", 3.0), ("Movie A", 2.0)]);
}

#[test]
fn test_feature_blocks_with_fewer_than_five_items() {
    let (_dir, config) = two_item_dataset();
    let report = build_report(&config).unwrap();

    assert_eq!(report.feature_tops.len(), 2);
    assert_eq!(report.feature_tops[0].feature, 1);
    assert_eq!(report.feature_tops[0].items.len(), 2);
    assert_eq!(report.feature_tops[0].items[0].title, "Movie A");
    assert_eq!(report.feature_tops[1].items[0].title, "Movie B");
}

#[test]
fn test_text_output_sequence() {
    let (_dir, config) = two_item_dataset();
    let mut out = Vec::new();
    run(&config, OutputFormat::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("Top ")).collect();
    assert_eq!(
        headers,
        vec![
            "Top five most relevant for feature 1:",
            "Top five most relevant for feature 2:",
            "Top five most recommended items for user 4469:",
        ]
    );
}

#[test]
fn test_json_output() {
    let (_dir, config) = two_item_dataset();
    let mut out = Vec::new();
    run(&config, OutputFormat::Json, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["user_id"], 4469);
    assert_eq!(value["recommendations"][0]["title"], "Movie B");
    assert_eq!(value["recommendations"][0]["value"], 3.0);
}

#[test]
fn test_unknown_user_fails() {
    let (_dir, config) = two_item_dataset();
    let config = ReportConfig {
        user_id: 1,
        ..config
    };
    assert!(matches!(
        build_report(&config),
        Err(ReportError::UserNotFound(1))
    ));
}

#[test]
fn test_unknown_user_text_keeps_feature_blocks() {
    let (_dir, config) = two_item_dataset();
    let config = ReportConfig {
        user_id: 1,
        ..config
    };
    let mut out = Vec::new();
    let result = run(&config, OutputFormat::Text, &mut out);
    assert!(matches!(result, Err(ReportError::UserNotFound(1))));

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Top five most relevant for feature 1:\n"));
    assert!(text.contains("Top five most relevant for feature 2:"));
    assert!(text.contains("Movie B"));
    assert!(!text.contains("most recommended"));
}

#[test]
fn test_unknown_user_json_writes_nothing() {
    let (_dir, config) = two_item_dataset();
    let config = ReportConfig {
        user_id: 1,
        ..config
    };
    let mut out = Vec::new();
    assert!(run(&config, OutputFormat::Json, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_blank_movie_id_is_format_error() {
    let (dir, config) = two_item_dataset();
    let items = write(
        dir.path(),
        "blank_id.csv",
        &format!(
            "Movie ID,Title,{}\n1,Movie A,{}\n,Movie B,{}\n",
            feature_header(),
            feature_cells(&[1.0]),
            feature_cells(&[0.0, 1.0]),
        ),
    );
    let config = ReportConfig {
        items_path: items,
        ..config
    };

    match build_report(&config) {
        Err(ReportError::Io(IoError::InvalidFormat(message))) => {
            assert!(message.contains("Movie ID"));
            assert!(message.contains("row 1"));
        }
        other => panic!("expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn test_missing_items_file_fails() {
    let (dir, config) = two_item_dataset();
    let config = ReportConfig {
        items_path: dir.path().join("nope.csv"),
        ..config
    };
    assert!(matches!(
        load_tables(&config),
        Err(ReportError::Io(IoError::FileNotFound(_)))
    ));
}

#[test]
fn test_missing_feature_column_fails() {
    let (dir, config) = two_item_dataset();
    // Weights without column "15"
    let header = feature_header();
    let short_header = header.trim_end_matches(",15");
    let cells = feature_cells(&[1.0; 14]);
    let short_cells = cells.rsplit_once(',').unwrap().0;
    let weights = write(
        dir.path(),
        "short_weights.csv",
        &format!("{short_header}\n{short_cells}\n"),
    );
    let config = ReportConfig {
        weights_path: weights,
        ..config
    };

    assert!(matches!(
        build_report(&config),
        Err(ReportError::Io(IoError::ColumnNotFound(name))) if name == "15"
    ));
}

#[test]
fn test_invalid_feature_dimension_fails() {
    let (_dir, config) = two_item_dataset();
    let config = ReportConfig {
        feature_dimensions: vec![1, 16],
        ..config
    };
    assert!(matches!(
        build_report(&config),
        Err(ReportError::InvalidFeature(16))
    ));
}

#[test]
fn test_empty_weights_fails() {
    let (dir, config) = two_item_dataset();
    let weights = write(dir.path(), "empty.csv", &format!("{}\n", feature_header()));
    let config = ReportConfig {
        weights_path: weights,
        ..config
    };
    assert!(matches!(
        build_report(&config),
        Err(ReportError::EmptyWeights)
    ));
}
