use log::debug;

use hatch_targets_core::{HatchTarget, OrientedRegion};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::dedup::collapse_pairs;
use crate::error::RecognizerConfigError;
use crate::filter::filter_regions;
use crate::pairing::match_pairs;
use crate::params::{ColorProfile, RecognizerParams};

/// Per-frame hatch target recognizer.
///
/// One instance holds a validated, read-only configuration and can be shared
/// across frames (and threads). Each call is a pure function of its inputs:
/// raw candidate regions in, ranked deduplicated targets out.
pub struct HatchTargetRecognizer {
    params: RecognizerParams,
}

impl HatchTargetRecognizer {
    /// Validate the configuration and build a recognizer.
    pub fn new(params: RecognizerParams) -> Result<Self, RecognizerConfigError> {
        validate(&params)?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &RecognizerParams {
        &self.params
    }

    /// Recognize targets from pre-segmented per-profile region lists.
    ///
    /// `regions_by_profile[k]` holds the raw candidates produced by the
    /// segmentation pass for profile `k`. A missing or empty list simply
    /// contributes nothing; surplus lists beyond the configured profiles are
    /// ignored. `frame_width` is the frame's pixel width and must be
    /// positive (caller contract, see [`RegionPair::offset_from_center`]).
    ///
    /// [`RegionPair::offset_from_center`]: hatch_targets_core::RegionPair::offset_from_center
    pub fn recognize(
        &self,
        regions_by_profile: &[Vec<OrientedRegion>],
        frame_width: f32,
    ) -> Vec<HatchTarget> {
        self.recognize_with(regions_by_profile, frame_width, |_, _| {})
    }

    /// Like [`recognize`](Self::recognize), but invokes `on_region` once per
    /// surviving filtered region with its profile index, so the caller can
    /// draw diagnostic overlays. Profile identity has no effect on pairing.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, regions_by_profile, on_region))
    )]
    pub fn recognize_with(
        &self,
        regions_by_profile: &[Vec<OrientedRegion>],
        frame_width: f32,
        mut on_region: impl FnMut(&OrientedRegion, usize),
    ) -> Vec<HatchTarget> {
        let mut combined = Vec::new();
        for (index, (profile, raw)) in self
            .params
            .profiles
            .iter()
            .zip(regions_by_profile)
            .enumerate()
        {
            let kept = filter_regions(raw, &profile.filter);
            debug!(
                "profile '{}': {} raw regions, {} kept",
                profile.name,
                raw.len(),
                kept.len()
            );
            for region in &kept {
                on_region(region, index);
            }
            combined.extend(kept);
        }

        let pairs = match_pairs(&combined, &self.params.pairing);
        let pairs = collapse_pairs(&pairs, self.params.midpoint_tolerance);
        debug!("{} regions -> {} targets", combined.len(), pairs.len());

        pairs
            .into_iter()
            .map(|pair| HatchTarget::new(pair, frame_width))
            .collect()
    }

    /// Run one full frame through an injected segmentation stage.
    ///
    /// `segment` is called once per configured profile with the profile's
    /// index and definition, and returns that pass's raw candidate regions.
    /// This keeps the image-processing library behind a seam: tests and
    /// offline runs supply synthetic region lists instead.
    pub fn find_with<S>(
        &self,
        frame_width: f32,
        mut segment: S,
        on_region: impl FnMut(&OrientedRegion, usize),
    ) -> Vec<HatchTarget>
    where
        S: FnMut(usize, &ColorProfile) -> Vec<OrientedRegion>,
    {
        let regions_by_profile: Vec<Vec<OrientedRegion>> = self
            .params
            .profiles
            .iter()
            .enumerate()
            .map(|(index, profile)| segment(index, profile))
            .collect();
        self.recognize_with(&regions_by_profile, frame_width, on_region)
    }
}

fn validate(params: &RecognizerParams) -> Result<(), RecognizerConfigError> {
    for profile in &params.profiles {
        let f = &profile.filter;
        if !(f.min_area < f.max_area) {
            return Err(RecognizerConfigError::InvalidAreaBounds {
                profile: profile.name.clone(),
                min: f.min_area,
                max: f.max_area,
            });
        }
        if !(f.ratio_tolerance > 0.0 && f.ratio_tolerance < f.target_ratio) {
            return Err(RecognizerConfigError::InvalidRatioBand {
                profile: profile.name.clone(),
                target: f.target_ratio,
                tolerance: f.ratio_tolerance,
            });
        }
    }

    let p = &params.pairing;
    if !(p.min_x_separation >= 0.0 && p.min_x_separation < p.max_x_separation) {
        return Err(RecognizerConfigError::InvalidXSeparation {
            min: p.min_x_separation,
            max: p.max_x_separation,
        });
    }
    if !(p.max_y_separation > 0.0) {
        return Err(RecognizerConfigError::InvalidYSeparation {
            max: p.max_y_separation,
        });
    }
    if !(params.midpoint_tolerance >= 0.0) {
        return Err(RecognizerConfigError::InvalidMidpointTolerance {
            tolerance: params.midpoint_tolerance,
        });
    }
    Ok(())
}
