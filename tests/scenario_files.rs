//! Scenario file loading and execution tests.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::io::Write;

use gridhunt::game::{Outcome, Phase};
use gridhunt::scenario::{Scenario, ScenarioError};

#[test]
fn test_load_and_run_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ambush.json");
    fs::write(
        &path,
        r#"{
            "hunter": {"x": 2, "y": 2},
            "monsters": [{"x": 8, "y": 8}],
            "obstacles": [{"x": 3, "y": 3}],
            "treasures": [{"x": 2, "y": 3, "value": 5}],
            "moves": ["down"]
        }"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    let report = scenario.run().unwrap();

    assert_eq!(report.engine.hunter_score(), 5);
    assert_eq!(report.engine.phase(), Phase::End);
    assert_eq!(report.engine.outcome(), Some(Outcome::HunterWins));
}

#[test]
fn test_missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    assert!(matches!(
        Scenario::load(&path),
        Err(ScenarioError::Io(_))
    ));
}

#[test]
fn test_malformed_json_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(b"{\"hunter\": [this is not json]}").unwrap();

    assert!(matches!(
        Scenario::load(&path),
        Err(ScenarioError::Parse(_))
    ));
}

#[test]
fn test_custom_grid_size_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.json");
    fs::write(
        &path,
        r#"{
            "width": 4,
            "height": 4,
            "hunter": {"x": 0, "y": 0},
            "treasures": [{"x": 3, "y": 3, "value": 9}]
        }"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    assert_eq!(scenario.width, 4);

    let report = scenario.run().unwrap();
    assert_eq!(report.engine.grid().width(), 4);
    // No moves were scripted, so the game is still in play.
    assert_eq!(report.engine.phase(), Phase::Play);
    assert_eq!(report.engine.outcome(), None);
}

#[test]
fn test_zero_dimensions_rejected() {
    let scenario = Scenario::from_json(
        r#"{"width": 0, "height": 5, "hunter": {"x": 0, "y": 0}}"#,
    )
    .unwrap();

    assert!(matches!(
        scenario.run(),
        Err(ScenarioError::InvalidDimensions { width: 0, height: 5 })
    ));
}
