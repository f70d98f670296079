//! Deterministic post-hoc verification of colorings.

use crate::graph::Graph;
use crate::solve::Coloring;

/// Checks that `coloring` is a proper coloring of `graph`:
/// one color per vertex, every color within the budget, and no edge joining
/// two same-colored vertices.
///
/// # Errors
/// Returns a descriptive message naming the first violation found.
pub fn verify_coloring(graph: &Graph, coloring: &Coloring) -> Result<(), String> {
    let n = graph.order();
    if coloring.colors().len() != n {
        return Err(format!(
            "coloring covers {} vertices, graph has {n}",
            coloring.colors().len()
        ));
    }

    for (v, &color) in coloring.colors().iter().enumerate() {
        if (color as usize) >= coloring.color_count() {
            return Err(format!(
                "vertex {v} has color {color}, outside budget {}",
                coloring.color_count()
            ));
        }
    }

    for (u, v) in graph.edges() {
        if coloring.color(u) == coloring.color(v) {
            return Err(format!(
                "edge ({u},{v}) joins two vertices of color {}",
                coloring.color(u)
            ));
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
