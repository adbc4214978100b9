#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

const DATASET: &str = r#"{
    "frames": [
        {
            "name": "frame_000",
            "width": 320,
            "height": 240,
            "regions_by_profile": [
                [
                    {"center": [100.0, 50.0], "width": 17.0, "height": 88.3, "angle": -3.0},
                    {"center": [180.0, 52.0], "width": 17.0, "height": 88.3, "angle": 4.0}
                ]
            ]
        },
        {"width": 320, "height": 240, "regions_by_profile": [[]]}
    ]
}"#;

#[test]
fn recognizes_a_recorded_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset_path = dir.path().join("dataset.json");
    std::fs::write(&dataset_path, DATASET).expect("write dataset");
    let report_path = dir.path().join("report.json");

    Command::cargo_bin("hatch-targets")
        .expect("binary")
        .arg(&dataset_path)
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("frame_000 0: 1 target(s)"))
        .stdout(predicate::str::contains(
            "target 0 is 20.0 pixels left of center",
        ))
        .stdout(predicate::str::contains("frame 1: 0 target(s)"));

    let report = std::fs::read_to_string(&report_path).expect("report written");
    assert!(report.contains("\"frame_index\": 0"));
    assert!(report.contains("\"offset\": -20.0"));
}

#[test]
fn fails_cleanly_on_a_missing_dataset() {
    Command::cargo_bin("hatch-targets")
        .expect("binary")
        .arg("does_not_exist.json")
        .assert()
        .failure();
}

#[test]
fn rejects_malformed_parameters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset_path = dir.path().join("dataset.json");
    std::fs::write(&dataset_path, DATASET).expect("write dataset");

    let params_path = dir.path().join("params.json");
    let params = r#"{
        "profiles": [
            {"name": "broken", "filter": {"min_area": 4000.0, "max_area": 1000.0, "target_ratio": 5.0, "ratio_tolerance": 2.5}}
        ]
    }"#;
    std::fs::write(&params_path, params).expect("write params");

    Command::cargo_bin("hatch-targets")
        .expect("binary")
        .arg(&dataset_path)
        .arg("--params")
        .arg(&params_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("area bounds"));
}
