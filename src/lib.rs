//! # Chromatic
//!
//! Minimum vertex-coloring of undirected simple graphs via backtracking
//! search with forward checking.
//!
//! This crate provides:
//! - A compact bitset graph representation with strict adjacency-matrix
//!   parsing and random/complete/empty generators.
//! - A forward-checking search engine: after every tentative assignment the
//!   domains of the unassigned vertices are pruned, so dead ends are caught
//!   before recursing.
//! - Two variable-ordering heuristics (most constrained variable, tie-broken
//!   by most constraining variable) with deterministic tie-breaks.
//! - An iterative-deepening driver that tries color budgets k = 1, 2, ...
//!   and stops at the first success, which is the minimum.
//!
//! ## Quick Start
//!
//! ```
//! use chromatic::graph::parse_adjacency_matrix;
//! use chromatic::solve::color_graph;
//!
//! // A path on three vertices: two colors suffice.
//! let graph = parse_adjacency_matrix("010\n101\n010\n").unwrap();
//! let coloring = color_graph(&graph);
//! assert_eq!(coloring.color_count(), 2);
//! assert_ne!(coloring.color(0), coloring.color(1));
//! ```
//!
//! ## Checking a Single Budget
//!
//! ```
//! use chromatic::graph::Graph;
//! use chromatic::solve::try_budget;
//!
//! // K4 is not 3-colorable.
//! let graph = Graph::complete(4);
//! assert!(try_budget(&graph, 3).is_none());
//! assert!(try_budget(&graph, 4).is_some());
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Adjacency bitsets, parsing, generation, file I/O.
//! - [`vertex`]: Per-vertex search state: color, candidate domain, neighbors.
//! - [`select`]: Variable-ordering heuristics.
//! - [`solve`]: The forward-checking engine and the budget-deepening driver.
//! - [`validate`]: Post-hoc verification of colorings.
//!
//! ## Notes
//!
//! - Graphs are limited to 64 vertices (one `u64` bitset row per vertex).
//!   Exhaustive coloring search is intractable well before that bound.
//! - The search is single-threaded and fully deterministic: identical input
//!   yields the identical coloring.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing

pub mod graph;
pub mod select;
pub mod solve;
pub mod validate;
pub mod vertex;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::graph::{parse_adjacency_matrix, Graph, GraphError};
    pub use crate::solve::{color_graph, try_budget, Coloring};
    pub use crate::validate::verify_coloring;
}
