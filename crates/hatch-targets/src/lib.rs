//! High-level facade crate for the `hatch-targets-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the core types and the recognizer
//! - offline region datasets (JSON) so recognition runs and is tested
//!   without a camera or an image-processing library
//! - the synchronous frame-processing loop with its inter-frame delay policy
//! - (feature `image`) diagnostic overlay drawing into RGB images
//! - (feature `cli`) the `hatch-targets` binary
//!
//! ## Quickstart
//!
//! ```
//! use hatch_targets::{HatchTargetRecognizer, OrientedRegion, RecognizerParams};
//!
//! let recognizer = HatchTargetRecognizer::new(RecognizerParams::default())?;
//! let regions = vec![
//!     OrientedRegion::new(100.0, 50.0, 17.0, 88.3, -3.0),
//!     OrientedRegion::new(180.0, 52.0, 17.0, 88.3, 4.0),
//! ];
//! for target in recognizer.recognize(&[regions], 320.0) {
//!     println!("offset: {} px", target.offset());
//! }
//! # Ok::<(), hatch_targets::RecognizerConfigError>(())
//! ```
//!
//! ## API map
//! - [`core`]: geometric types (regions, pairs, targets) and the logger.
//! - [`recognizer`]: the filter → pair → collapse → offset pipeline.
//! - [`dataset`]: JSON-backed per-frame candidate region sets.
//! - [`run`]: the frame loop and per-frame reports.
//! - [`overlay`] (feature `image`): drawing regions and targets.

pub use hatch_targets_core as core;
pub use hatch_targets_recognizer as recognizer;

pub use hatch_targets_core::{HatchTarget, OrientedRegion, RegionPair};
pub use hatch_targets_recognizer::{
    ColorProfile, ColorThresholds, HatchTargetRecognizer, PairingParams, RecognizerConfigError,
    RecognizerParams, RegionFilterParams,
};

pub mod dataset;
pub mod run;

#[cfg(feature = "image")]
pub mod overlay;
