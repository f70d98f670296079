//! Forward-checking backtracking search and the iterative-deepening driver.
//!
//! One [`Attempt`] searches for a complete coloring under a fixed color
//! budget k. Each recursion level snapshots the unassigned domains, picks a
//! vertex via the ordering heuristics, and walks its candidate colors
//! smallest-first. After every tentative assignment the colors of ALL
//! assigned vertices are propagated against ALL unassigned neighbor domains;
//! an emptied domain means the color choice cannot extend to a full coloring,
//! so the snapshot is restored and the next candidate is tried. The driver
//! retries with budgets k = 1, 2, ... until an attempt succeeds, which yields
//! the minimum-color solution reachable by this search order.
//!
//! Re-propagating every assigned color each retry is redundant work, but it
//! keeps the pruning state trivially consistent and leaves the order-sensitive
//! tie-breaks (and therefore which solution is found first) untouched.

use crate::graph::Graph;
use crate::select::select_next;
use crate::vertex::{ColorSet, Vertex};

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << v
}

// ============================================================================
// Coloring
// ============================================================================

/// A complete proper coloring: one color per vertex id, using colors
/// `0..color_count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<u8>,
    color_count: usize,
}

impl Coloring {
    /// Returns the color assigned to vertex `v`.
    #[inline]
    pub fn color(&self, v: usize) -> u8 {
        self.colors[v]
    }

    /// Returns the colors indexed by vertex id.
    #[inline]
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Returns the color budget of the successful attempt. Because budgets
    /// are tried in increasing order and the search is exhaustive per budget,
    /// this equals the number of distinct colors used.
    #[inline]
    pub fn color_count(&self) -> usize {
        self.color_count
    }
}

// ============================================================================
// Search attempt (one color budget)
// ============================================================================

/// Search state for a single color-budget attempt. Built fresh per budget and
/// discarded afterwards; nothing is shared across attempts.
struct Attempt<'a> {
    graph: &'a Graph,
    /// All vertices, indexed by id.
    vertices: Vec<Vertex>,
    /// Ids of colored vertices in assignment order (the last one is the
    /// vertex whose candidates the current retry loop is walking).
    assigned: Vec<usize>,
    /// Ids of uncolored vertices in scan order. Vertices backtracked out of
    /// an assignment are appended at the end, not restored to their old
    /// position.
    unassigned: Vec<usize>,
    /// Bitmask mirror of `unassigned`, for degree queries.
    unassigned_mask: u64,
}

impl<'a> Attempt<'a> {
    fn new(graph: &'a Graph, budget: usize) -> Self {
        let n = graph.order();
        debug_assert!(budget >= 1 && budget <= n);
        let vertices = (0..n)
            .map(|id| Vertex::new(id, graph.neighbors(id), budget))
            .collect();
        Self {
            graph,
            vertices,
            assigned: Vec::with_capacity(n),
            unassigned: (0..n).collect(),
            unassigned_mask: if n >= 64 { u64::MAX } else { (1u64 << n) - 1 },
        }
    }

    /// One recursion level of the forward-checking search. Returns whether a
    /// complete coloring was reached below this level.
    fn forward_check(&mut self) -> bool {
        // Domain snapshot for this frame, indexed by vertex id. Restoration
        // only touches vertices that are unassigned at that point, so the
        // stale entries for assigned ids are never read.
        let snapshot: Vec<ColorSet> = self.vertices.iter().map(|v| v.domain).collect();

        let pos = select_next(&self.vertices, &self.unassigned, self.unassigned_mask);
        let chosen = self.unassigned.remove(pos);
        self.unassigned_mask &= !bit(chosen);
        self.assigned.push(chosen);

        // Retry loop over the chosen vertex's candidates, smallest color
        // first. Its own domain is consumed across iterations and is
        // deliberately not restored with the others.
        while let Some(color) = self.vertices[chosen].domain.pop_smallest() {
            self.vertices[chosen].color = Some(color);

            if self.unassigned.is_empty() {
                return true;
            }

            if self.propagate() && self.forward_check() {
                return true;
            }
            // Either propagation emptied a domain or the deeper search
            // failed; undo all pruning below this frame.
            self.restore(&snapshot);
        }

        // Candidates exhausted: undo the tentative assignment and report
        // failure to the level above.
        self.vertices[chosen].color = None;
        self.assigned.pop();
        self.unassigned.push(chosen);
        self.unassigned_mask |= bit(chosen);
        false
    }

    /// Prunes every assigned vertex's color from every unassigned neighbor's
    /// domain. Returns `false` if any domain was left empty (dead end).
    fn propagate(&mut self) -> bool {
        let mut all_nonempty = true;
        for ui in 0..self.unassigned.len() {
            let u = self.unassigned[ui];
            for ai in 0..self.assigned.len() {
                let a = self.assigned[ai];
                if self.graph.has_edge(u, a) {
                    if let Some(color) = self.vertices[a].color {
                        self.vertices[u].domain.remove(color);
                    }
                }
            }
            if self.vertices[u].domain.is_empty() {
                all_nonempty = false;
            }
        }
        all_nonempty
    }

    /// Overwrites every unassigned vertex's domain from the frame snapshot.
    fn restore(&mut self, snapshot: &[ColorSet]) {
        for &u in &self.unassigned {
            self.vertices[u].domain = snapshot[u];
        }
    }

    /// Reads out the finished coloring after a successful search.
    fn into_colors(self) -> Vec<u8> {
        debug_assert!(self.unassigned.is_empty());
        self.vertices
            .into_iter()
            .map(|v| {
                debug_assert!(v.is_assigned());
                v.color.unwrap_or(0)
            })
            .collect()
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Searches for a coloring of `graph` under exactly `budget` colors.
///
/// Returns the colors indexed by vertex id, or `None` if no proper coloring
/// with `budget` colors exists (the search is exhaustive per budget).
pub fn try_budget(graph: &Graph, budget: usize) -> Option<Vec<u8>> {
    let mut attempt = Attempt::new(graph, budget);
    if attempt.forward_check() {
        Some(attempt.into_colors())
    } else {
        None
    }
}

/// Finds the minimum-color assignment by iterative deepening over the color
/// budget: k = 1, 2, ..., n, first success wins. A fresh vertex set is built
/// per budget; failed attempts are discarded whole.
///
/// Cannot fail for a valid graph: n colors always suffice (give every vertex
/// its own color), so the k = n attempt is guaranteed to succeed.
pub fn color_graph(graph: &Graph) -> Coloring {
    color_graph_with_progress(graph, |_| {})
}

/// Like [`color_graph`], invoking `on_failed_budget` with each exhausted
/// budget before the next one is tried. Used by the CLI for progress lines.
pub fn color_graph_with_progress(
    graph: &Graph,
    mut on_failed_budget: impl FnMut(usize),
) -> Coloring {
    let n = graph.order();
    for budget in 1..=n {
        if let Some(colors) = try_budget(graph, budget) {
            return Coloring {
                colors,
                color_count: budget,
            };
        }
        on_failed_budget(budget);
    }
    unreachable!("every simple graph on n vertices is n-colorable")
}

// ============================================================================
// Tests
// ============================================================================
