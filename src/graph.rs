//! Undirected simple graphs as symmetric adjacency bitsets (order `1..=64`).

use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

/// Largest supported graph order; one `u64` bitset row per vertex.
pub const MAX_VERTICES: usize = 64;

#[inline(always)]
const fn bit(v: usize) -> u64 {
    1u64 << v
}

/// Returns a mask with the lowest `n` bits set.
#[inline(always)]
const fn all_bits(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

// ============================================================================
// Graph
// ============================================================================

/// An undirected graph without self-loops, stored as one neighbor bitset per
/// vertex. Immutable once constructed; the single source of truth for
/// adjacency during a coloring search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    rows: Vec<u64>,
}

impl Graph {
    /// Creates a graph from prebuilt neighbor bitsets.
    ///
    /// # Panics
    /// Panics in debug builds if the rows contain out-of-range bits,
    /// self-loops, or are not symmetric. Release builds do not validate;
    /// malformed rows are a documented precondition violation.
    pub fn from_rows(rows: Vec<u64>) -> Self {
        let n = rows.len();
        debug_assert!((1..=MAX_VERTICES).contains(&n), "graph order must be 1..=64");
        let mask = all_bits(n);
        for (i, &row) in rows.iter().enumerate() {
            debug_assert_eq!(row & !mask, 0, "row {i} has bits outside the graph order");
            debug_assert_eq!((row >> i) & 1, 0, "self-loop at vertex {i}");
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let a_ij = (rows[i] >> j) & 1;
                let a_ji = (rows[j] >> i) & 1;
                debug_assert_eq!(a_ij, a_ji, "adjacency is not symmetric at ({i},{j})");
            }
        }
        Self { n, rows }
    }

    /// Creates a graph with no edges.
    pub fn empty(n: usize) -> Self {
        debug_assert!((1..=MAX_VERTICES).contains(&n), "graph order must be 1..=64");
        Self {
            n,
            rows: vec![0u64; n],
        }
    }

    /// Creates a complete graph: every edge present, zero diagonal.
    pub fn complete(n: usize) -> Self {
        debug_assert!((1..=MAX_VERTICES).contains(&n), "graph order must be 1..=64");
        let mask = all_bits(n);
        let rows = (0..n).map(|i| mask & !bit(i)).collect();
        Self { n, rows }
    }

    /// Creates a random graph: each upper-triangle pair becomes an edge with
    /// probability `p`, mirrored below the diagonal.
    pub fn random<R: Rng>(rng: &mut R, n: usize, p: f64) -> Self {
        debug_assert!((1..=MAX_VERTICES).contains(&n), "graph order must be 1..=64");
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");

        let mut rows = vec![0u64; n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    rows[i] |= bit(j);
                    rows[j] |= bit(i);
                }
            }
        }
        Self { n, rows }
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Returns the neighbor bitset of vertex `v`.
    #[inline(always)]
    pub fn neighbors(&self, v: usize) -> u64 {
        debug_assert!(v < self.n);
        self.rows[v]
    }

    /// Returns whether the edge `(u, v)` exists.
    #[inline(always)]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.n && v < self.n);
        (self.rows[u] & bit(v)) != 0
    }

    /// Returns the degree of vertex `v`.
    #[inline(always)]
    pub fn degree(&self, v: usize) -> u32 {
        debug_assert!(v < self.n);
        self.rows[v].count_ones()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        let sum: u32 = self.rows.iter().map(|r| r.count_ones()).sum();
        (sum as usize) / 2
    }

    /// Iterates all edges as `(u, v)` pairs with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.n).flat_map(move |u| {
            // Neighbors strictly above u
            let mut t = self.rows[u] & !all_bits(u + 1);
            std::iter::from_fn(move || {
                if t == 0 {
                    return None;
                }
                let v = t.trailing_zeros() as usize;
                t &= t - 1;
                Some((u, v))
            })
        })
    }

    /// Writes the adjacency matrix to a writer as `n` rows of `0/1` characters.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for i in 0..self.n {
            for j in 0..self.n {
                let edge = (self.rows[i] >> j) & 1;
                write!(w, "{edge}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Saves the adjacency matrix to a file as `n` rows of `0/1` characters.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, filename: impl AsRef<Path>) -> io::Result<()> {
        let mut f = File::create(filename)?;
        self.write_to(&mut f)
    }

    /// Loads a graph from a file containing a `0/1` adjacency matrix.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the matrix is malformed.
    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Self, GraphError> {
        let file = File::open(filename)?;
        let reader = BufReader::new(file);
        let mut text = String::new();
        for line in reader.lines() {
            let line = line?;
            text.push_str(&line);
            text.push('\n');
        }
        parse_adjacency_matrix(&text)
    }
}

/// Space-separated matrix rows, one line per vertex.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            for j in 0..self.n {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", (self.rows[i] >> j) & 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Errors encountered while parsing or loading an adjacency matrix.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No non-empty rows were found.
    #[error("adjacency matrix is empty")]
    Empty,
    /// Matrix is not square.
    #[error("adjacency matrix is not square: row {row} has length {got}, expected {expected}")]
    NonSquare {
        /// The row index with the wrong length.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// Encountered a non `0/1` character.
    #[error("invalid character at ({row}, {col}): {ch:?} (expected '0' or '1')")]
    InvalidChar {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The invalid character.
        ch: char,
    },
    /// The matrix is larger than 64 vertices, which doesn't fit in a `u64` bitset.
    #[error("matrix has {n} vertices; this implementation supports n <= 64")]
    TooManyVertices {
        /// Number of vertices in the matrix.
        n: usize,
    },
    /// Diagonal contains a `1`.
    #[error("self-loop detected at vertex {vertex}")]
    SelfLoop {
        /// The vertex with a self-loop.
        vertex: usize,
    },
    /// `A[i][j] != A[j][i]`.
    #[error("matrix is not symmetric at ({i},{j})")]
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },
    /// I/O error (file not found, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses a `0/1` adjacency matrix from text.
///
/// Rules:
/// - Blank lines and surrounding whitespace are ignored.
/// - The matrix must be square, symmetric, and have a zero diagonal.
/// - The order must be `<= 64`.
///
/// # Errors
/// Returns an error if the input is empty, non-square, contains invalid
/// characters, has self-loops, or is not symmetric.
pub fn parse_adjacency_matrix(text: &str) -> Result<Graph, GraphError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(GraphError::Empty);
    }
    let n = lines.len();
    if n > MAX_VERTICES {
        return Err(GraphError::TooManyVertices { n });
    }

    let mut rows = Vec::with_capacity(n);
    for (i, line) in lines.iter().enumerate() {
        let bytes = line.as_bytes();
        if bytes.len() != n {
            return Err(GraphError::NonSquare {
                row: i,
                expected: n,
                got: bytes.len(),
            });
        }
        let mut mask = 0u64;
        for (j, &b) in bytes.iter().enumerate() {
            match b {
                b'0' => {}
                b'1' => mask |= bit(j),
                _ => {
                    return Err(GraphError::InvalidChar {
                        row: i,
                        col: j,
                        ch: b as char,
                    })
                }
            }
        }
        rows.push(mask);
    }

    // Validate diagonal and symmetry.
    for i in 0..n {
        if ((rows[i] >> i) & 1) != 0 {
            return Err(GraphError::SelfLoop { vertex: i });
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if ((rows[i] >> j) & 1) != ((rows[j] >> i) & 1) {
                return Err(GraphError::NotSymmetric { i, j });
            }
        }
    }

    Ok(Graph { n, rows })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn empty_graph_has_no_edges() {
        let g = Graph::empty(6);
        assert_eq!(g.order(), 6);
        assert_eq!(g.edge_count(), 0);
        for v in 0..6 {
            assert_eq!(g.degree(v), 0);
        }
    }

    #[test]
    fn complete_graph_has_all_edges() {
        let g = Graph::complete(5);
        assert_eq!(g.edge_count(), 10);
        for u in 0..5 {
            assert_eq!(g.degree(u), 4);
            for v in 0..5 {
                assert_eq!(g.has_edge(u, v), u != v);
            }
        }
    }

    #[test]
    fn single_vertex_graph() {
        let g = Graph::empty(1);
        assert_eq!(g.order(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn random_graph_is_symmetric_with_zero_diagonal() {
        let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);
        for _ in 0..20 {
            let g = Graph::random(&mut rng, 16, 0.4);
            for u in 0..16 {
                assert!(!g.has_edge(u, u));
                for v in 0..16 {
                    assert_eq!(g.has_edge(u, v), g.has_edge(v, u));
                }
            }
        }
    }

    #[test]
    fn random_graph_extreme_probabilities() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let g0 = Graph::random(&mut rng, 10, 0.0);
        assert_eq!(g0.edge_count(), 0);
        let g1 = Graph::random(&mut rng, 10, 1.0);
        assert_eq!(g1, Graph::complete(10));
    }

    #[test]
    fn edges_iterates_upper_triangle_pairs() {
        // Path: 0-1-2-3
        let g = Graph::from_rows(vec![0b0010, 0b0101, 0b1010, 0b0100]);
        let edges: Vec<(usize, usize)> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn parse_accepts_valid_matrix() {
        let g = parse_adjacency_matrix("0100\n1010\n0101\n0010\n").unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(g.edge_count(), 3);
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(0, 2));
    }

    #[test]
    fn parse_ignores_blank_lines_and_whitespace() {
        let g = parse_adjacency_matrix("\n 01 \n10\n\n").unwrap();
        assert_eq!(g.order(), 2);
        assert!(g.has_edge(0, 1));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            parse_adjacency_matrix("  \n\n"),
            Err(GraphError::Empty)
        ));
    }

    #[test]
    fn parse_rejects_non_square_matrix() {
        assert!(matches!(
            parse_adjacency_matrix("0100\n101\n0101\n0010\n"),
            Err(GraphError::NonSquare { row: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_invalid_character() {
        assert!(matches!(
            parse_adjacency_matrix("01\n1x\n"),
            Err(GraphError::InvalidChar {
                row: 1,
                col: 1,
                ch: 'x'
            })
        ));
    }

    #[test]
    fn parse_rejects_self_loop() {
        assert!(matches!(
            parse_adjacency_matrix("10\n00\n"),
            Err(GraphError::SelfLoop { vertex: 0 })
        ));
    }

    #[test]
    fn parse_rejects_asymmetric_matrix() {
        assert!(matches!(
            parse_adjacency_matrix("01\n00\n"),
            Err(GraphError::NotSymmetric { i: 0, j: 1 })
        ));
    }

    #[test]
    fn parse_rejects_oversized_matrix() {
        let row = "0".repeat(65);
        let text = std::iter::repeat(row.as_str())
            .take(65)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(matches!(
            parse_adjacency_matrix(&text),
            Err(GraphError::TooManyVertices { n: 65 })
        ));
    }

    #[test]
    fn write_then_parse_roundtrips() {
        let mut rng = XorShiftRng::seed_from_u64(0xBEEF);
        let g = Graph::random(&mut rng, 12, 0.5);
        let mut buf = Vec::new();
        g.write_to(&mut buf).unwrap();
        let reparsed = parse_adjacency_matrix(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(g, reparsed);
    }

    #[test]
    fn display_prints_space_separated_rows() {
        let g = parse_adjacency_matrix("01\n10\n").unwrap();
        assert_eq!(g.to_string(), "0 1\n1 0\n");
    }
}
