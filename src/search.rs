// ─── Sorted occurrence count ────────────────────────────────────────────────

/// Number of occurrences of `target` in a sorted slice. O(log n): the
/// equal range is found with two binary searches, so a long run of equal
/// elements costs the same as a miss.
///
/// Out-of-range targets and empty slices return 0.
pub fn occurrences_in_sorted<T: Ord>(sorted: &[T], target: &T) -> usize {
    let start = sorted.partition_point(|x| x < target);
    let end = sorted.partition_point(|x| x <= target);
    end - start
}

// ═══════════════════════════════════════════════════════════════════════════
