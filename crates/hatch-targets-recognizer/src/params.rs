use serde::{Deserialize, Serialize};

/// Per-profile bounds on a candidate region's bounding-rectangle geometry.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct RegionFilterParams {
    /// Minimal area in square pixels (exclusive).
    pub min_area: f32,

    /// Maximal area in square pixels (exclusive).
    pub max_area: f32,

    /// Expected long-side over short-side ratio of one strip.
    pub target_ratio: f32,

    /// Half-width of the accepted band around `target_ratio`. Must be
    /// smaller than `target_ratio` so the reciprocal band stays positive.
    pub ratio_tolerance: f32,
}

impl Default for RegionFilterParams {
    fn default() -> Self {
        Self {
            min_area: 1000.0,
            max_area: 4000.0,
            target_ratio: 5.0,
            ratio_tolerance: 2.5,
        }
    }
}

/// Spatial bounds for two regions to count as the left/right strips of one
/// target.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PairingParams {
    /// Minimal horizontal center separation in pixels (exclusive). Rules out
    /// the same strip detected twice.
    pub min_x_separation: f32,

    /// Maximal horizontal center separation in pixels (exclusive). Rules out
    /// unrelated strips far apart.
    pub max_x_separation: f32,

    /// Maximal vertical center separation in pixels (exclusive). The two
    /// strips sit on a roughly horizontal line.
    pub max_y_separation: f32,
}

impl Default for PairingParams {
    fn default() -> Self {
        Self {
            min_x_separation: 50.0,
            max_x_separation: 200.0,
            max_y_separation: 10.0,
        }
    }
}

/// Color-space threshold ranges for one segmentation pass.
///
/// Opaque to the recognizer: these are handed verbatim to the injected
/// segmentation stage, which turns a frame plus thresholds into candidate
/// regions.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ColorThresholds {
    pub hue: [f32; 2],
    pub saturation: [f32; 2],
    pub luminance: [f32; 2],
}

impl Default for ColorThresholds {
    fn default() -> Self {
        // Retro-reflective tape under a green ring light.
        Self {
            hue: [60.0, 100.0],
            saturation: [100.0, 255.0],
            luminance: [100.0, 255.0],
        }
    }
}

/// One segmentation pass: a named set of thresholds plus the region bounds
/// that apply to its candidates.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ColorProfile {
    pub name: String,
    #[serde(default)]
    pub thresholds: ColorThresholds,
    #[serde(default)]
    pub filter: RegionFilterParams,
}

impl Default for ColorProfile {
    fn default() -> Self {
        Self {
            name: "primary".to_string(),
            thresholds: ColorThresholds::default(),
            filter: RegionFilterParams::default(),
        }
    }
}

/// Parameters for the full per-frame recognition pass.
///
/// Fixed for the lifetime of a recognition run; no stage mutates them, so a
/// parallel caller can share one instance across frames.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RecognizerParams {
    /// Segmentation passes to merge. Zero profiles is valid and recognizes
    /// nothing.
    pub profiles: Vec<ColorProfile>,

    #[serde(default)]
    pub pairing: PairingParams,

    /// Pairs whose midpoints differ by less than this many pixels collapse
    /// into one target.
    #[serde(default = "default_midpoint_tolerance")]
    pub midpoint_tolerance: f32,
}

fn default_midpoint_tolerance() -> f32 {
    10.0
}

impl Default for RecognizerParams {
    fn default() -> Self {
        Self {
            profiles: vec![ColorProfile::default()],
            pairing: PairingParams::default(),
            midpoint_tolerance: default_midpoint_tolerance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_round_trip_through_json() {
        let params = RecognizerParams::default();
        let json = serde_json::to_string(&params).expect("serialize");
        let back: RecognizerParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.profiles.len(), 1);
        assert_eq!(back.profiles[0].name, "primary");
    }

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let json = r#"{"profiles": [{"name": "green"}]}"#;
        let params: RecognizerParams = serde_json::from_str(json).expect("deserialize");
        assert_eq!(params.midpoint_tolerance, 10.0);
        assert_eq!(params.pairing.max_y_separation, 10.0);
        assert_eq!(params.profiles[0].filter.max_area, 4000.0);
    }
}
