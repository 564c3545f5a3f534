//! Seeded random graph builders shared by the test-suites of the algorithm
//! modules.

use rand::Rng;

use crate::repr::{Bigraph, Graph};

/// Creates a bigraph with at most `m` random edges between U-side vertices
/// `0..nu` and V-side vertices `-nv..0`. Duplicate draws accumulate weight.
pub(crate) fn random_bigraph<R: Rng>(
    rng: &mut R,
    nu: i32,
    nv: i32,
    m: usize,
) -> Bigraph<i32, i32, i64> {
    let mut graph = Bigraph::new();
    for _ in 0..m {
        let u = rng.random_range(0..nu);
        let v = -rng.random_range(1..=nv);
        graph.add_edge(u, v);
    }
    graph
}

/// Creates a graph with at most `m` random edges between vertices `0..n`.
/// Self-loop draws are discarded, duplicate draws accumulate weight.
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: i32, m: usize) -> Graph<i32, i64> {
    let mut graph = Graph::new();
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            graph.add_edge(u, v);
        }
    }
    graph
}
