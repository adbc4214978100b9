//! Recognizer for the paired retro-reflective strips that flank a hatch
//! docking target.
//!
//! The input is a set of oriented bounding rectangles, one per contour,
//! produced by an external segmentation stage (color threshold + contour
//! extraction + min-area-rect fit). The stages here are pure functions over
//! that input:
//! 1. Drop regions whose area or aspect ratio cannot be a single strip.
//! 2. Pair up regions whose centers sit on a roughly horizontal line with a
//!    plausible gap between them.
//! 3. Collapse near-duplicate pairs from overlapping segmentation passes.
//! 4. Report each surviving pair with its signed pixel offset from the frame
//!    center.
//!
//! ## Quickstart
//!
//! ```
//! use hatch_targets_core::OrientedRegion;
//! use hatch_targets_recognizer::{HatchTargetRecognizer, RecognizerParams};
//!
//! let recognizer = HatchTargetRecognizer::new(RecognizerParams::default()).unwrap();
//! let regions = vec![
//!     OrientedRegion::new(100.0, 50.0, 17.0, 88.3, -3.0),
//!     OrientedRegion::new(180.0, 52.0, 17.0, 88.3, 4.0),
//! ];
//! let targets = recognizer.recognize(&[regions], 320.0);
//! assert_eq!(targets.len(), 1);
//! assert_eq!(targets[0].offset(), -20.0);
//! ```

mod dedup;
mod error;
mod filter;
mod pairing;
mod params;
mod recognizer;

pub use dedup::collapse_pairs;
pub use error::RecognizerConfigError;
pub use filter::filter_regions;
pub use pairing::match_pairs;
pub use params::{
    ColorProfile, ColorThresholds, PairingParams, RecognizerParams, RegionFilterParams,
};
pub use recognizer::HatchTargetRecognizer;
