//! Tests for lifepat-model types.

use lifepat_model::{EditorConfig, GridDims, PatternError, alive_set, bounding_box};

#[test]
fn invalid_dimension_reports_values() {
    let err = GridDims::new(0, 12).unwrap_err();
    assert_eq!(err, PatternError::InvalidDimension { rows: 0, cols: 12 });
    assert_eq!(
        format!("{err}"),
        "invalid grid dimensions 0x12: rows and cols must be positive"
    );
}

#[test]
fn dims_deserialize_rejects_zero() {
    let ok: GridDims = serde_json::from_str(r#"{"rows":4,"cols":6}"#).expect("valid dims");
    assert_eq!((ok.rows(), ok.cols()), (4, 6));

    let bad = serde_json::from_str::<GridDims>(r#"{"rows":0,"cols":6}"#);
    assert!(bad.is_err());
}

#[test]
fn config_defaults_match_editor() {
    let config = EditorConfig::default();
    assert_eq!(config.rows, 30);
    assert_eq!(config.cols, 30);
    assert_eq!(config.history_capacity, 50);
    assert_eq!(config.threshold, 128);
    assert_eq!(config.pattern_name, "MyPattern");
    assert!(config.dims().is_ok());
}

#[test]
fn config_partial_toml_fills_defaults() {
    let config: EditorConfig = toml::from_str("rows = 12\nthreshold = 90\n").expect("parse");
    assert_eq!(config.rows, 12);
    assert_eq!(config.cols, 30);
    assert_eq!(config.threshold, 90);
    assert_eq!(config.history_capacity, 50);
}

#[test]
fn config_round_trips_through_toml() {
    let config = EditorConfig::default()
        .with_dims(10, 20)
        .with_history_capacity(5)
        .with_pattern_name("Glider");
    let text = toml::to_string_pretty(&config).expect("serialize");
    let parsed: EditorConfig = toml::from_str(&text).expect("deserialize");
    assert_eq!(parsed, config);
}

#[test]
fn config_with_bad_dims_fails_validation() {
    let config = EditorConfig::default().with_dims(-3, 10);
    assert!(matches!(
        config.dims(),
        Err(PatternError::InvalidDimension { rows: -3, cols: 10 })
    ));
}

#[test]
fn alive_set_helper_dedupes() {
    let cells = alive_set([(0, 0), (0, 0), (2, 5)]);
    assert_eq!(cells.len(), 2);
    let rect = bounding_box(&cells).expect("box");
    assert_eq!((rect.height(), rect.width()), (3, 6));
}
