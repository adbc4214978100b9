//! The per-frame processing loop.
//!
//! Frames are processed strictly one at a time, in order; the loop ends when
//! the source runs out of frames. An optional fixed delay between frames
//! bounds the output rate (useful when every frame also writes an annotated
//! image); the delay is a policy of this loop, never of the recognition
//! stages themselves.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use hatch_targets_core::HatchTarget;
use hatch_targets_recognizer::HatchTargetRecognizer;

use crate::dataset::{DatasetFrame, RegionDataset};

/// Everything recognized in one frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame_index: usize,
    #[serde(default)]
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
    pub targets: Vec<HatchTarget>,
}

/// Run every frame of a dataset through the recognizer, handing each frame's
/// report to `sink` in frame order before the next frame is touched.
pub fn process_dataset(
    recognizer: &HatchTargetRecognizer,
    dataset: &RegionDataset,
    delay: Duration,
    mut sink: impl FnMut(FrameReport),
) {
    let mut frames = dataset.frames.iter();
    let mut frame_index = 0;
    while let Some(frame) = frames.next() {
        sink(process_frame(recognizer, frame, frame_index));
        frame_index += 1;
        if !delay.is_zero() && frames.len() > 0 {
            std::thread::sleep(delay);
        }
    }
}

/// Recognize one frame and package the result.
pub fn process_frame(
    recognizer: &HatchTargetRecognizer,
    frame: &DatasetFrame,
    frame_index: usize,
) -> FrameReport {
    let targets = recognizer.recognize(&frame.regions_by_profile, frame.width as f32);
    FrameReport {
        frame_index,
        name: frame.name.clone(),
        width: frame.width,
        height: frame.height,
        targets,
    }
}

/// Log a frame report the way the console tooling expects it: one line per
/// frame, one line per target with its offset, sides and angles.
pub fn log_report(report: &FrameReport) {
    info!(
        "frame {} ({}x{}): {} target(s)",
        report.frame_index,
        report.width,
        report.height,
        report.targets.len()
    );
    for (index, target) in report.targets.iter().enumerate() {
        info!(
            "target {} is {:.1} pixels {} of center with side (left={:.1} right={:.1}) and angle (left={:.1} right={:.1})",
            index,
            target.offset().abs(),
            side_of_center(target),
            target.left_long_side(),
            target.right_long_side(),
            target.left().angle,
            target.right().angle,
        );
    }
}

/// "left" or "right", matching the offset sign convention.
pub fn side_of_center(target: &HatchTarget) -> &'static str {
    if target.offset() < 0.0 {
        "left"
    } else {
        "right"
    }
}
