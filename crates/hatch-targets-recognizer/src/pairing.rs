use hatch_targets_core::{OrientedRegion, RegionPair};

use crate::params::PairingParams;

/// Scan the filtered regions for two-region combinations whose spatial
/// relationship matches the left/right strip geometry.
///
/// Every unordered combination is examined exactly once, so `(i, j)` and
/// `(j, i)` can never both appear. A combination qualifies iff the vertical
/// center distance is below `max_y_separation` and the horizontal center
/// distance lies strictly between the two x-separation bounds. Output order
/// follows the enumeration: ascending first index, then ascending second.
///
/// Quadratic in the number of regions, which stays small after filtering.
pub fn match_pairs(regions: &[OrientedRegion], params: &PairingParams) -> Vec<RegionPair> {
    let mut pairs = Vec::new();
    for (i, a) in regions.iter().enumerate() {
        for b in &regions[i + 1..] {
            let dx = (a.center.x - b.center.x).abs();
            let dy = (a.center.y - b.center.y).abs();
            if dy < params.max_y_separation
                && dx > params.min_x_separation
                && dx < params.max_x_separation
            {
                pairs.push(RegionPair::new(*a, *b));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn region_at(cx: f32, cy: f32) -> OrientedRegion {
        OrientedRegion::new(cx, cy, 17.0, 88.0, -5.0)
    }

    fn params() -> PairingParams {
        PairingParams {
            min_x_separation: 50.0,
            max_x_separation: 200.0,
            max_y_separation: 10.0,
        }
    }

    #[test]
    fn one_pair_per_unordered_combination() {
        let pairs = match_pairs(&[region_at(100.0, 50.0), region_at(180.0, 52.0)], &params());
        assert_eq!(pairs.len(), 1, "(A,B) and (B,A) are the same candidate");
        assert_relative_eq!(pairs[0].left().center.x, 100.0);
        assert_relative_eq!(pairs[0].right().center.x, 180.0);
    }

    #[test]
    fn rejects_vertically_offset_regions() {
        let pairs = match_pairs(&[region_at(100.0, 50.0), region_at(180.0, 65.0)], &params());
        assert!(pairs.is_empty(), "dy = 15 exceeds max_y_separation = 10");
    }

    #[test]
    fn rejects_too_close_and_too_far() {
        // dx = 40 < min separation: likely the same strip counted twice.
        assert!(match_pairs(&[region_at(100.0, 50.0), region_at(140.0, 50.0)], &params()).is_empty());
        // dx = 400 > max separation: unrelated strips.
        assert!(match_pairs(&[region_at(100.0, 50.0), region_at(500.0, 50.0)], &params()).is_empty());
    }

    #[test]
    fn separation_bounds_are_strict() {
        assert!(match_pairs(&[region_at(100.0, 50.0), region_at(150.0, 50.0)], &params()).is_empty());
        assert!(match_pairs(&[region_at(100.0, 50.0), region_at(300.0, 50.0)], &params()).is_empty());
    }

    #[test]
    fn pairs_come_out_in_enumeration_order() {
        // Three strips on a line; all three combinations qualify except the
        // outermost one (dx = 240).
        let regions = [
            region_at(100.0, 50.0),
            region_at(220.0, 51.0),
            region_at(340.0, 52.0),
        ];
        let pairs = match_pairs(&regions, &params());
        assert_eq!(pairs.len(), 2);
        assert_relative_eq!(pairs[0].midpoint(), 160.0);
        assert_relative_eq!(pairs[1].midpoint(), 280.0);
    }

    #[test]
    fn fewer_than_two_regions_yield_nothing() {
        assert!(match_pairs(&[], &params()).is_empty());
        assert!(match_pairs(&[region_at(100.0, 50.0)], &params()).is_empty());
    }
}
