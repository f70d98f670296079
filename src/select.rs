//! Variable-ordering heuristics for the forward-checking search.
//!
//! Two heuristics decide which vertex to color next:
//! 1. Most constrained variable (fail first): smallest remaining domain.
//! 2. Most constraining variable: among domain-size ties, the vertex with the
//!    most unassigned neighbors, so its assignment prunes the most domains.
//!
//! Remaining ties go to the earliest position in the unassigned list, which
//! makes the search fully deterministic.

use crate::vertex::Vertex;

/// Picks the next vertex to assign.
///
/// `unassigned` lists the ids of the not-yet-colored vertices in scan order;
/// `unassigned_mask` is the same set as an id bitmask. Returns the position
/// of the chosen vertex within `unassigned`.
///
/// # Panics
/// Panics in debug builds if `unassigned` is empty (precondition violation).
pub fn select_next(vertices: &[Vertex], unassigned: &[usize], unassigned_mask: u64) -> usize {
    debug_assert!(!unassigned.is_empty(), "selector requires a non-empty unassigned set");

    let mut best_pos = 0;
    let mut best_domain = vertices[unassigned[0]].domain.len();
    let mut best_degree = vertices[unassigned[0]].unassigned_neighbor_count(unassigned_mask);

    for (pos, &id) in unassigned.iter().enumerate().skip(1) {
        let v = &vertices[id];
        let domain = v.domain.len();
        if domain < best_domain {
            best_pos = pos;
            best_domain = domain;
            best_degree = v.unassigned_neighbor_count(unassigned_mask);
        } else if domain == best_domain {
            let degree = v.unassigned_neighbor_count(unassigned_mask);
            if degree > best_degree {
                best_pos = pos;
                best_degree = degree;
            }
        }
    }
    best_pos
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::ColorSet;

    fn vertex(id: usize, neighbors: u64, budget: usize) -> Vertex {
        Vertex::new(id, neighbors, budget)
    }

    #[test]
    fn smallest_domain_wins() {
        let mut vertices = vec![
            vertex(0, 0, 3),
            vertex(1, 0, 3),
            vertex(2, 0, 3),
        ];
        vertices[2].domain = {
            let mut d = ColorSet::full(3);
            d.remove(0);
            d
        };
        let unassigned = vec![0, 1, 2];
        assert_eq!(select_next(&vertices, &unassigned, 0b111), 2);
    }

    #[test]
    fn domain_tie_broken_by_unassigned_degree() {
        // Star around vertex 1: it touches both other vertices, they touch
        // only the center. Equal domains, so the center must win.
        let vertices = vec![
            vertex(0, 0b010, 2),
            vertex(1, 0b101, 2),
            vertex(2, 0b010, 2),
        ];
        let unassigned = vec![0, 1, 2];
        assert_eq!(select_next(&vertices, &unassigned, 0b111), 1);
    }

    #[test]
    fn degree_counts_only_unassigned_neighbors() {
        // Edges (0,1) and (0,2), with vertex 2 already assigned. Vertex 0
        // then ties vertex 1 at one unassigned neighbor, so the earlier scan
        // position wins; with vertex 2 counted it would win outright.
        let vertices = vec![
            vertex(0, 0b0110, 2),
            vertex(1, 0b0001, 2),
            vertex(2, 0b0001, 2),
            vertex(3, 0b0000, 2),
        ];
        let unassigned = vec![0, 1, 3];
        let unassigned_mask = 0b1011;
        assert_eq!(select_next(&vertices, &unassigned, unassigned_mask), 0);
    }

    #[test]
    fn full_tie_takes_first_in_scan_order() {
        let vertices = vec![
            vertex(0, 0b10, 2),
            vertex(1, 0b01, 2),
        ];
        // Scan order decides, not id order.
        assert_eq!(select_next(&vertices, &[1, 0], 0b11), 0);
        assert_eq!(select_next(&vertices, &[0, 1], 0b11), 0);
    }

    #[test]
    fn degree_does_not_promote_larger_domains() {
        // Vertex 1 is highly connected but has a larger domain; the smaller
        // domain of vertex 0 must still win.
        let mut vertices = vec![
            vertex(0, 0b10, 3),
            vertex(1, 0b01, 3),
        ];
        vertices[0].domain = {
            let mut d = ColorSet::full(3);
            d.remove(2);
            d
        };
        assert_eq!(select_next(&vertices, &[1, 0], 0b11), 1);
    }

    #[test]
    fn single_candidate_is_returned() {
        let vertices = vec![vertex(0, 0, 1)];
        assert_eq!(select_next(&vertices, &[0], 0b1), 0);
    }
}
