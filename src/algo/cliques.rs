/*!
Enumeration of all maximal cliques of a unipartite graph.

Implementation of the Bron-Kerbosch algorithm (version 2, with pivoting): a
pivot vertex is chosen from the already-tried set so that as few candidates
as possible are disconnected from it, and only candidates *not* adjacent to
the pivot open new branches. The candidates adjacent to the pivot never need
branches of their own: any maximal clique built from them alone could be
extended by the pivot. A branch whose pivot is adjacent to *every* candidate
is pruned entirely for the same reason.

As everywhere in this crate, the recursion is replaced by an explicit stack
of search frames and the search is packaged as a lazy iterator. A frame holds
the classic Bron-Kerbosch state: the growing clique (`compsub`), the
candidate set, the already-tried set (`not`), plus the pivot selected for
this level and its number of disconnected candidates that drives the
branch/bound decisions.

Cliques smaller than a configurable minimum size (3 by default) are
suppressed at emission time only; the search itself still explores through
them, so the bound does not change which larger cliques are found.
*/

use std::iter::FusedIterator;

use fxhash::FxHashSet;

use crate::{repr::Graph, vertex::Vertex, weight::EdgeWeight};

/// One level of the branch-and-bound search
struct SearchFrame<V> {
    /// The clique grown so far
    compsub: FxHashSet<V>,
    /// Vertices that may still extend `compsub`
    candidates: FxHashSet<V>,
    /// Vertices already tried at an enclosing level
    not_set: FxHashSet<V>,
    /// The pivot selected for this level (`None` while `not_set` is empty)
    pivot: Option<V>,
    /// Number of candidates not adjacent to `pivot`; these are the vertices
    /// this level still has to branch on
    disconnections: usize,
}

/// Iterator enumerating all maximal cliques of a [`Graph`] with at least
/// [`min_clique_size`](Cliques::min_clique_size) vertices (3 by default).
///
/// The search space can be restricted to a subset of the vertices via
/// [`restrict_to`](Cliques::restrict_to). No ordering between the emitted
/// cliques is guaranteed, but a given graph always produces the same
/// sequence.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = Graph::<i32, i64>::from_edges([(1, 2), (2, 3), (1, 3), (3, 4)]);
///
/// let cliques: Vec<_> = g.find_cliques().collect();
/// assert_eq!(cliques.len(), 1);
/// assert_eq!(cliques[0].len(), 3); // the triangle {1, 2, 3}
/// ```
pub struct Cliques<'a, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    graph: &'a Graph<V, W>,
    stack: Vec<SearchFrame<V>>,
    min_clique_size: usize,
}

impl<'a, V, W> Cliques<'a, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    /// Construct the iterator for some graph, searching the full vertex set
    pub fn new(graph: &'a Graph<V, W>) -> Self {
        let candidates: FxHashSet<V> = graph.nodes().cloned().collect();
        let disconnections = candidates.len();

        Self {
            graph,
            stack: vec![SearchFrame {
                compsub: FxHashSet::default(),
                candidates,
                not_set: FxHashSet::default(),
                pivot: None,
                disconnections,
            }],
            min_clique_size: 3,
        }
    }

    /// Sets the minimum number of vertices an emitted clique must have.
    /// This is an acceptance gate, not a search bound: smaller maximal
    /// cliques are explored but not reported.
    pub fn set_min_clique_size(&mut self, size: usize) {
        self.min_clique_size = size;
    }

    /// Sets the minimum number of vertices an emitted clique must have
    pub fn min_clique_size(mut self, size: usize) -> Self {
        self.set_min_clique_size(size);
        self
    }

    /// Restricts the search to the given subset of vertices
    pub fn set_restrict_to<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = V>,
    {
        let candidates: FxHashSet<V> = nodes.into_iter().collect();
        self.stack[0].disconnections = candidates.len();
        self.stack[0].candidates = candidates;
    }

    /// Restricts the search to the given subset of vertices
    pub fn restrict_to<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        self.set_restrict_to(nodes);
        self
    }
}

/// Picks, among `not_set`, the vertex with the fewest non-neighbors among
/// `candidates`, returning it with its non-neighbor count. Returns
/// `(None, candidates.len())` while the not-set is empty; every candidate
/// must be branched on then.
fn select_pivot<V, W>(
    graph: &Graph<V, W>,
    candidates: &FxHashSet<V>,
    not_set: &FxHashSet<V>,
) -> (Option<V>, usize)
where
    V: Vertex,
    W: EdgeWeight,
{
    let no_neighbors = FxHashSet::default();

    let mut best: Option<(V, usize)> = None;
    for q in not_set {
        let q_neighbors = graph.neighbors_of(q).unwrap_or(&no_neighbors);
        let disconnections = candidates
            .iter()
            .filter(|v| !q_neighbors.contains(*v))
            .count();

        if best.as_ref().is_none_or(|(_, d)| disconnections < *d) {
            best = Some((q.clone(), disconnections));
        }
    }

    match best {
        Some((pivot, disconnections)) => (Some(pivot), disconnections),
        None => (None, candidates.len()),
    }
}

impl<V, W> Iterator for Cliques<'_, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    type Item = FxHashSet<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let no_neighbors = FxHashSet::default();

        while let Some(frame) = self.stack.pop() {
            if frame.candidates.is_empty() && frame.not_set.is_empty() {
                // fully explored: compsub is maximal
                if frame.compsub.len() >= self.min_clique_size {
                    return Some(frame.compsub);
                }
                continue;
            }

            let SearchFrame {
                compsub,
                mut candidates,
                mut not_set,
                pivot,
                disconnections,
            } = frame;

            let snapshot: Vec<V> = candidates.iter().cloned().collect();
            // each disconnected candidate opens at most one branch
            let mut children = Vec::with_capacity(disconnections);

            for u in snapshot {
                let u_neighbors = graph.neighbors_of(&u).unwrap_or(&no_neighbors);

                // candidates adjacent to the pivot are covered by the branch
                // that extends through the pivot itself
                if let Some(p) = &pivot {
                    if u_neighbors.contains(p) {
                        continue;
                    }
                }

                candidates.remove(&u);

                let mut compsub_ext = compsub.clone();
                compsub_ext.insert(u.clone());
                let candidates_ext: FxHashSet<V> = candidates
                    .iter()
                    .filter(|v| u_neighbors.contains(*v))
                    .cloned()
                    .collect();
                let not_ext: FxHashSet<V> = not_set
                    .iter()
                    .filter(|v| u_neighbors.contains(*v))
                    .cloned()
                    .collect();

                let (child_pivot, child_disconnections) =
                    select_pivot(graph, &candidates_ext, &not_ext);

                // a pivot adjacent to every remaining candidate closes the
                // branch: whatever clique the candidates could complete, the
                // pivot would extend it
                if child_pivot.is_none() || child_disconnections > 0 {
                    children.push(SearchFrame {
                        compsub: compsub_ext,
                        candidates: candidates_ext,
                        not_set: not_ext,
                        pivot: child_pivot,
                        disconnections: child_disconnections,
                    });
                }

                not_set.insert(u);
            }

            // leftover candidates are all adjacent to this level's pivot and
            // need no branches of their own
            self.stack.extend(children);
        }

        None
    }
}

impl<V, W> FusedIterator for Cliques<'_, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_graph;

    fn sorted_cliques(cliques: Vec<FxHashSet<i32>>) -> Vec<Vec<i32>> {
        cliques
            .into_iter()
            .map(|c| c.into_iter().sorted().collect_vec())
            .sorted()
            .collect_vec()
    }

    #[test]
    fn single_triangle() {
        let g = Graph::<i32, i64>::from_edges([
            (1, 5),
            (1, 2),
            (2, 5),
            (2, 3),
            (3, 4),
            (4, 5),
            (10, 20),
        ]);

        let cliques = sorted_cliques(g.find_cliques().collect_vec());
        assert_eq!(cliques, vec![vec![1, 2, 5]]);
    }

    #[test]
    fn square_has_no_triangle() {
        let g = Graph::<i32, i64>::from_edges([(3, 7), (7, 8), (4, 8), (4, 3)]);
        assert_eq!(g.find_cliques().count(), 0);
    }

    #[test]
    fn minimum_size_is_an_acceptance_gate() {
        let g = Graph::<i32, i64>::from_edges([(3, 7), (7, 8), (4, 8), (4, 3)]);

        // the same search with the gate lowered reports the maximal edges
        let cliques = sorted_cliques(g.find_cliques().min_clique_size(2).collect_vec());
        assert_eq!(cliques, vec![vec![3, 4], vec![3, 7], vec![4, 8], vec![7, 8]]);
    }

    #[test]
    fn cliques_after_algebra() {
        let a = Graph::<i32, i64>::from_edges([
            (1, 5),
            (1, 2),
            (2, 5),
            (2, 3),
            (3, 4),
            (4, 5),
            (10, 20),
        ]);
        let b = Graph::from_edges([(3, 7), (7, 8), (4, 8), (4, 3)]);

        assert_eq!((&a & &b).find_cliques().count(), 0);
        assert_eq!(
            sorted_cliques((&a - &b).find_cliques().collect_vec()),
            vec![vec![1, 2, 5]]
        );
        assert_eq!((&b - &a).find_cliques().count(), 0);
        assert_eq!(
            sorted_cliques((&a | &b).find_cliques().collect_vec()),
            vec![vec![1, 2, 5]]
        );
    }

    #[test]
    fn overlapping_triangles() {
        let g = Graph::<i32, i64>::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);

        let cliques = sorted_cliques(g.find_cliques().collect_vec());
        assert_eq!(cliques, vec![vec![0, 1, 2], vec![2, 3, 4]]);
    }

    #[test]
    fn restricted_search() {
        let g = Graph::<i32, i64>::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);

        let cliques = sorted_cliques(g.find_cliques().restrict_to([0, 1, 2]).collect_vec());
        assert_eq!(cliques, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn four_clique_is_reported_once() {
        let mut g = Graph::<i32, i64>::new();
        g.add_clique([0, 1, 2, 3]);
        g.add_edge(3, 4);

        let cliques = sorted_cliques(g.find_cliques().collect_vec());
        assert_eq!(cliques, vec![vec![0, 1, 2, 3]]);
    }

    /// Brute-force reference: every subset that is pairwise connected and
    /// cannot be extended.
    fn brute_force_cliques(g: &Graph<i32, i64>, min_size: usize) -> Vec<Vec<i32>> {
        let nodes = g.nodes().copied().sorted().collect_vec();
        nodes
            .iter()
            .copied()
            .powerset()
            .filter(|subset| subset.len() >= min_size)
            .filter(|subset| {
                subset
                    .iter()
                    .tuple_combinations()
                    .all(|(u, v)| g.has_edge(u, v))
            })
            .filter(|subset| {
                !nodes.iter().any(|u| {
                    !subset.contains(u) && subset.iter().all(|v| g.has_edge(u, v))
                })
            })
            .sorted()
            .collect_vec()
    }

    #[test]
    fn random_graphs_match_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for _ in 0..10 {
            let g = random_graph(rng, 10, 25);
            let cliques = sorted_cliques(g.find_cliques().collect_vec());
            assert_eq!(cliques, brute_force_cliques(&g, 3));
        }
    }

    #[test]
    fn long_cycle_does_not_recurse() {
        // assert that we can deal with very deep search trees
        let n: i64 = 10_000;
        let g = Graph::<i64, i64>::from_edges((0..n).map(|i| (i, (i + 1) % n)));

        assert_eq!(g.find_cliques().count(), 0);
        assert_eq!(g.find_cliques().min_clique_size(2).count(), n as usize);
    }
}
