use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;

use hatch_targets::core::init_with_level;
use hatch_targets::dataset::{DatasetFrame, RegionDataset};
use hatch_targets::run::{log_report, process_dataset};
use hatch_targets::{HatchTargetRecognizer, OrientedRegion, RecognizerParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = LevelFilter::from_str("info").unwrap_or(LevelFilter::Info);
    init_with_level(log_level)?;

    let recognizer = HatchTargetRecognizer::new(RecognizerParams::default())?;

    // A synthetic two-frame capture: the robot drifts right between frames,
    // so the target's offset moves left.
    let dataset = RegionDataset {
        frames: vec![
            DatasetFrame {
                name: Some("approach_000".to_string()),
                width: 320,
                height: 240,
                regions_by_profile: vec![vec![
                    OrientedRegion::new(140.0, 118.0, 17.0, 88.3, -14.5),
                    OrientedRegion::new(220.0, 120.0, 17.0, 88.3, 15.0),
                ]],
            },
            DatasetFrame {
                name: Some("approach_001".to_string()),
                width: 320,
                height: 240,
                regions_by_profile: vec![vec![
                    OrientedRegion::new(110.0, 119.0, 17.0, 88.3, -14.0),
                    OrientedRegion::new(190.0, 120.5, 17.0, 88.3, 14.0),
                ]],
            },
        ],
    };

    process_dataset(&recognizer, &dataset, Duration::ZERO, |report| {
        log_report(&report)
    });
    Ok(())
}
