use hatch_targets_core::RegionPair;

/// Collapse near-duplicate pairs into one representative per physical target.
///
/// When several segmentation passes each produce a qualifying rectangle for
/// the same physical strip, the matcher emits multiple pairs with nearly
/// identical midpoints. This pass repeatedly takes the first remaining pair
/// as the representative, drops every other remaining pair whose midpoint is
/// less than `midpoint_tolerance` pixels away, and keeps the representative.
///
/// This is single-linkage clustering against the *first* element of each
/// pass only, not a transitive closure: a chain of midpoints each within
/// tolerance of the next, but with far-apart ends, splits into several
/// clusters. That behavior is intentional and must not be tightened
/// silently. Deterministic for a fixed input order; the first pair of each
/// cluster, in original order, survives. Inputs with fewer than two pairs
/// are returned unchanged.
pub fn collapse_pairs(pairs: &[RegionPair], midpoint_tolerance: f32) -> Vec<RegionPair> {
    if pairs.len() < 2 {
        return pairs.to_vec();
    }

    let mut remaining = pairs.to_vec();
    let mut kept = Vec::new();
    while !remaining.is_empty() {
        let representative = remaining.remove(0);
        let mid = representative.midpoint();
        remaining.retain(|p| (p.midpoint() - mid).abs() >= midpoint_tolerance);
        kept.push(representative);
    }
    kept
}
