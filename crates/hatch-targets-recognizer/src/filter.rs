use hatch_targets_core::OrientedRegion;

use crate::params::RegionFilterParams;

/// Keep the regions whose bounding rectangle looks like a single strip:
/// area strictly inside `(min_area, max_area)` and aspect ratio inside the
/// accepted band.
///
/// The band handles both reported orientations of a long thin rectangle: a
/// ratio `r >= 1` is accepted inside `[target - tol, target + tol]`, a ratio
/// `r < 1` inside the reciprocal range `[1/(target + tol), 1/(target - tol)]`.
/// The decision is therefore the same whether the fitting routine reports the
/// strip as tall-and-narrow or (rotated ~90°) wide-and-flat.
///
/// Input order is preserved; an empty input yields an empty output.
pub fn filter_regions(regions: &[OrientedRegion], params: &RegionFilterParams) -> Vec<OrientedRegion> {
    regions
        .iter()
        .copied()
        .filter(|r| area_in_bounds(r, params) && ratio_in_band(r.aspect_ratio(), params))
        .collect()
}

#[inline]
fn area_in_bounds(region: &OrientedRegion, params: &RegionFilterParams) -> bool {
    let area = region.area();
    area > params.min_area && area < params.max_area
}

#[inline]
fn ratio_in_band(ratio: f32, params: &RegionFilterParams) -> bool {
    let lo = params.target_ratio - params.ratio_tolerance;
    let hi = params.target_ratio + params.ratio_tolerance;
    if ratio >= 1.0 {
        ratio >= lo && ratio <= hi
    } else {
        ratio >= 1.0 / hi && ratio <= 1.0 / lo
    }
}
