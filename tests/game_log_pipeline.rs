use std::path::{Path, PathBuf};

use hoopstats::data::loader::load_game_log;
use hoopstats::{analyze, ConfidenceOutcome, DataError, EngineConfig, StatCode};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_game_log.csv")
}

#[test]
fn fixture_loads_in_game_order() {
    let log = load_game_log(&fixture()).unwrap();
    assert_eq!(log.row_count, 24);

    let series = log.stat_series(StatCode::Points, "2024-25").unwrap();
    assert_eq!(series.len(), 24);
    // The export lists the newest game first.
    assert_eq!(series.values().first(), Some(&26.0));
    assert_eq!(series.values().last(), Some(&27.0));
}

#[test]
fn full_season_analysis() {
    let log = load_game_log(&fixture()).unwrap();
    let series = log.stat_series(StatCode::Points, "2024-25").unwrap();
    let analysis = analyze(&series, &EngineConfig::default()).unwrap();

    assert_eq!(analysis.summary.count, 24);
    assert!((analysis.summary.mean - 25.875).abs() < 1e-12);
    assert_eq!(analysis.summary.median, 25.5);
    assert_eq!(analysis.summary.min, 12.0);
    assert_eq!(analysis.summary.max, 41.0);
    assert_eq!(analysis.summary.range, 29.0);
    assert!(analysis.low_sample);
    assert_eq!(analysis.histogram.total(), 24);

    let ConfidenceOutcome::Interval(ci) = analysis.confidence else {
        panic!("24 games should clear the default gate");
    };
    assert_eq!(ci.degrees_of_freedom, 23);
    assert!((ci.std_dev - 7.344_400_41).abs() < 1e-6);
    assert!((ci.lower - 22.773_731_7).abs() < 1e-5);
    assert!((ci.upper - 28.976_268_3).abs() < 1e-5);
    assert_eq!((ci.rounded_lower, ci.rounded_upper), (22.8, 29.0));

    let prediction = analysis.predict(25.0).unwrap();
    assert!((prediction.probability - 1400.0 / 24.0).abs() < 1e-9);
    assert_eq!(
        prediction.describe("Stephen Curry", StatCode::Points, 1),
        "The likelihood of Stephen Curry getting 25 Points or more in a game is 58.3%."
    );
}

#[test]
fn stricter_gate_from_config() {
    let config = EngineConfig::from_json_str(r#"{ "min_sample_size": 40 }"#).unwrap();
    let log = load_game_log(&fixture()).unwrap();
    let series = log.stat_series(StatCode::Assists, "2024-25").unwrap();
    let analysis = analyze(&series, &config).unwrap();
    assert_eq!(
        analysis.confidence,
        ConfidenceOutcome::NotApplicable { count: 24, required: 40 }
    );
    assert!(analysis.report("Stephen Curry").contains("(24 of 40 required)"));
}

#[test]
fn missing_stat_column_is_reported() {
    let log = load_game_log(&fixture()).unwrap();
    let err = log.stat_series(StatCode::Blocks, "2024-25").unwrap_err();
    assert!(matches!(err, DataError::MissingColumn(c) if c == "BLK"));
}

#[test]
fn analysis_serializes_to_json() {
    let log = load_game_log(&fixture()).unwrap();
    let series = log.stat_series(StatCode::FieldGoalPct, "2024-25").unwrap();
    let analysis = analyze(&series, &EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["stat"], "FieldGoalPct");
    assert_eq!(json["summary"]["count"], 24);
    assert!(json["confidence"]["Interval"]["upper"].is_number());
}
