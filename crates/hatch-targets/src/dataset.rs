//! Offline region datasets.
//!
//! A dataset is the recorded output of the segmentation stage: per frame, the
//! frame dimensions and one candidate region list per color profile. It
//! stands in for a live camera plus image-processing library, so a full
//! recognition run needs nothing but a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use hatch_targets_core::OrientedRegion;

/// Errors from loading or saving a dataset file.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("dataset I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One captured frame: dimensions plus the raw candidate regions each
/// segmentation pass produced for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetFrame {
    #[serde(default)]
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
    /// `regions_by_profile[k]` belongs to the recognizer's profile `k`.
    pub regions_by_profile: Vec<Vec<OrientedRegion>>,
}

/// An ordered sequence of frames, processed front to back.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegionDataset {
    pub frames: Vec<DatasetFrame>,
}

impl RegionDataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), DatasetError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_round_trips_through_json() {
        let json = r#"{
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

        let dataset: RegionDataset = serde_json::from_str(json).expect("parse dataset");
        assert_eq!(dataset.frames.len(), 2);
        assert_eq!(dataset.frames[0].name.as_deref(), Some("frame_000"));
        assert_eq!(dataset.frames[0].regions_by_profile[0].len(), 2);
        assert!(dataset.frames[1].name.is_none());

        let back = serde_json::to_string(&dataset).expect("serialize");
        let again: RegionDataset = serde_json::from_str(&back).expect("reparse");
        assert_eq!(again.frames[0].regions_by_profile[0].len(), 2);
    }
}
