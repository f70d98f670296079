//! Per-vertex coloring state: candidate-color domains and neighbor bookkeeping.
//!
//! Domains are `u64` bitmasks over color indices. A domain starts as the full
//! set `{0, ..., k-1}` and only ever shrinks, so the mask is observably an
//! ordered ascending sequence of the remaining candidates: `pop_smallest`
//! takes the lowest set bit. Snapshots are plain copies of a `Copy` word,
//! so a frame's saved domain can never alias the live one.

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << v
}

// ============================================================================
// ColorSet
// ============================================================================

/// Set of candidate colors still considered possible for an unassigned vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSet(u64);

impl ColorSet {
    /// Creates the full domain `{0, ..., k-1}` for a color budget of `k`.
    ///
    /// # Panics
    /// Panics in debug builds if `k > 64`.
    #[inline]
    pub fn full(k: usize) -> Self {
        debug_assert!(k <= 64, "color budgets are limited to 64");
        if k >= 64 {
            Self(u64::MAX)
        } else {
            Self((1u64 << k) - 1)
        }
    }

    /// Creates an empty domain.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns whether `color` is still a candidate.
    #[inline(always)]
    pub const fn contains(self, color: u8) -> bool {
        (self.0 & bit(color as usize)) != 0
    }

    /// Removes `color` from the domain. Removing an absent color is a no-op.
    #[inline(always)]
    pub fn remove(&mut self, color: u8) {
        self.0 &= !bit(color as usize);
    }

    /// Removes and returns the smallest remaining candidate, or `None` if the
    /// domain is exhausted.
    #[inline]
    pub fn pop_smallest(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let color = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1; // Clear lowest set bit
        Some(color)
    }

    /// Returns the number of remaining candidates.
    #[inline(always)]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns whether no candidates remain.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the remaining candidates in ascending color order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut t = self.0;
        std::iter::from_fn(move || {
            if t == 0 {
                return None;
            }
            let color = t.trailing_zeros() as u8;
            t &= t - 1;
            Some(color)
        })
    }
}

// ============================================================================
// Vertex
// ============================================================================

/// Mutable coloring state of one vertex during a single search attempt.
///
/// Neighbor relationships are index-based: `neighbors` is a bitmask of vertex
/// ids taken from the adjacency matrix at attempt initialization, fixed for
/// the attempt's lifetime.
#[derive(Clone, Debug)]
pub struct Vertex {
    /// Stable vertex id in `0..n`.
    pub id: usize,
    /// Assigned color, or `None` while unassigned.
    pub color: Option<u8>,
    /// Remaining candidate colors. Only consulted while unassigned.
    pub domain: ColorSet,
    /// Neighbor id bitmask, derived from the adjacency matrix.
    pub neighbors: u64,
}

impl Vertex {
    /// Creates an unassigned vertex with the full domain for `budget` colors.
    pub fn new(id: usize, neighbors: u64, budget: usize) -> Self {
        debug_assert!(id < 64);
        debug_assert_eq!(neighbors & bit(id), 0, "self-loop at vertex {id}");
        Self {
            id,
            color: None,
            domain: ColorSet::full(budget),
            neighbors,
        }
    }

    /// Returns whether this vertex has an assigned color.
    #[inline(always)]
    pub const fn is_assigned(&self) -> bool {
        self.color.is_some()
    }

    /// Counts this vertex's neighbors within the given unassigned-id mask.
    ///
    /// This is the degree used by the most-constraining-variable heuristic.
    #[inline(always)]
    pub const fn unassigned_neighbor_count(&self, unassigned_mask: u64) -> u32 {
        (self.neighbors & unassigned_mask).count_ones()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_domain_holds_exactly_the_budget() {
        let d = ColorSet::full(5);
        assert_eq!(d.len(), 5);
        for c in 0..5 {
            assert!(d.contains(c));
        }
        assert!(!d.contains(5));
    }

    #[test]
    fn full_domain_of_64_colors_is_all_ones() {
        let d = ColorSet::full(64);
        assert_eq!(d.len(), 64);
        assert!(d.contains(63));
    }

    #[test]
    fn pop_smallest_yields_ascending_order() {
        let mut d = ColorSet::full(4);
        let popped: Vec<u8> = std::iter::from_fn(|| d.pop_smallest()).collect();
        assert_eq!(popped, vec![0, 1, 2, 3]);
        assert!(d.is_empty());
        assert_eq!(d.pop_smallest(), None);
    }

    #[test]
    fn pop_smallest_skips_removed_colors() {
        let mut d = ColorSet::full(4);
        d.remove(0);
        d.remove(2);
        assert_eq!(d.pop_smallest(), Some(1));
        assert_eq!(d.pop_smallest(), Some(3));
        assert_eq!(d.pop_smallest(), None);
    }

    #[test]
    fn remove_absent_color_is_noop() {
        let mut d = ColorSet::full(3);
        d.remove(7);
        assert_eq!(d, ColorSet::full(3));
    }

    #[test]
    fn snapshot_is_independent_of_live_domain() {
        let mut live = ColorSet::full(4);
        let snapshot = live;
        live.remove(1);
        live.remove(2);
        assert_eq!(snapshot, ColorSet::full(4));
        assert_eq!(live.len(), 2);
    }

    #[test]
    fn iter_matches_remaining_candidates() {
        let mut d = ColorSet::full(6);
        d.remove(1);
        d.remove(4);
        let rest: Vec<u8> = d.iter().collect();
        assert_eq!(rest, vec![0, 2, 3, 5]);
    }

    #[test]
    fn unassigned_neighbor_count_respects_mask() {
        // Vertex 1 with neighbors {0, 2, 3}
        let v = Vertex::new(1, 0b1101, 3);
        assert_eq!(v.unassigned_neighbor_count(0b1111), 3);
        assert_eq!(v.unassigned_neighbor_count(0b0101), 2);
        assert_eq!(v.unassigned_neighbor_count(0b0010), 0);
        assert_eq!(v.unassigned_neighbor_count(0), 0);
    }

    #[test]
    fn new_vertex_is_unassigned_with_full_domain() {
        let v = Vertex::new(0, 0b10, 4);
        assert!(!v.is_assigned());
        assert_eq!(v.domain, ColorSet::full(4));
    }
}
