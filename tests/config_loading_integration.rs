//! Integration tests for loading the optional config file

mod common;

use common::builders::ConfigFileBuilder;
use region_tracker::config::{PlotConfig, TrackerConfig, WindowConfig};
use region_tracker::RegionTrackerError;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TrackerConfig::load(dir.path().join("config.toml")).unwrap();
    assert_eq!(config, TrackerConfig::default());
}

#[test]
fn test_load_overrides() {
    let file = ConfigFileBuilder::new()
        .window("title", "\"Wedges\"")
        .window("dark_mode", "false")
        .plot("samples", "101")
        .plot("highlight_color", "[255, 160, 122, 255]")
        .write();

    let config = TrackerConfig::load(file.path()).unwrap();
    assert_eq!(config.window.title, "Wedges");
    assert!(!config.window.dark_mode);
    assert_eq!(config.window.size, WindowConfig::default().size);
    assert_eq!(config.plot.samples, 101);
    assert_eq!(config.plot.highlight_color, [255, 160, 122, 255]);
    assert_eq!(config.plot.line_color, PlotConfig::default().line_color);
}

#[test]
fn test_invalid_value_reports_path() {
    let file = ConfigFileBuilder::new().plot("line_width", "-2.0").write();

    let err = TrackerConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, RegionTrackerError::WithContext { .. }));
    let message = err.to_string();
    assert!(message.contains("Invalid config file"));
    assert!(message.contains("plot.line_width"));
}

#[test]
fn test_wrong_type_is_serialization_error() {
    let file = ConfigFileBuilder::new().plot("samples", "\"many\"").write();

    let err = TrackerConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let file = ConfigFileBuilder::new().plot("legend", "true").write();
    let config = TrackerConfig::load(file.path()).unwrap();
    assert_eq!(config.plot, PlotConfig::default());
}
