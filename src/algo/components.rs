/*!
Decomposition of a graph into its maximal connected subgraphs.

Both decompositions run an iterative flood fill over an explicit vertex stack:
a `remaining` working set starts out holding every vertex, each discovered
vertex is removed from it exactly once, and every traversed edge is inserted
(with its weight) into the component under construction. The components
therefore partition both the vertex set and the edge set of the input.

The searches are designed as iterators that emit one component at a time and
never recurse, so arbitrarily large components cannot exhaust the call stack.
*/

use std::iter::FusedIterator;

use fxhash::FxHashSet;

use crate::{
    repr::{Bigraph, Graph},
    vertex::{BiVertex, Vertex},
    weight::EdgeWeight,
};

/// Iterator over the connected components of a [`Bigraph`].
///
/// The traversal walks both vertex universes at once; vertices are tagged
/// with their [`Side`](crate::vertex::Side) so cross-side edges end up in the
/// component with their original orientation. Each edge is copied into its
/// component exactly once (when its U-side endpoint is expanded).
pub struct BigraphComponents<'a, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
    graph: &'a Bigraph<U, V, W>,
    remaining: FxHashSet<BiVertex<U, V>>,
    stack: Vec<BiVertex<U, V>>,
}

impl<'a, U, V, W> BigraphComponents<'a, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a Bigraph<U, V, W>) -> Self {
        let remaining = graph
            .unodes()
            .map(|u| BiVertex::Left(u.clone()))
            .chain(graph.vnodes().map(|v| BiVertex::Right(v.clone())))
            .collect();

        Self {
            graph,
            remaining,
            stack: Vec::with_capacity(32),
        }
    }
}

impl<U, V, W> Iterator for BigraphComponents<'_, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
    type Item = Bigraph<U, V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        // pick an arbitrary unvisited vertex as the seed of the component
        let seed = self.remaining.iter().next().cloned()?;
        self.remaining.remove(&seed);

        let mut component = Bigraph::new();
        self.stack.push(seed);

        while let Some(tagged) = self.stack.pop() {
            match tagged {
                BiVertex::Left(u) => {
                    if let Some(neighbors) = self.graph.neighbors_of_unode(&u) {
                        for v in neighbors {
                            let weight = self.graph.edge_weight(&u, v).cloned().unwrap();
                            component.add_weighted_edge(u.clone(), v.clone(), weight);

                            let neighbor = BiVertex::Right(v.clone());
                            if self.remaining.remove(&neighbor) {
                                self.stack.push(neighbor);
                            }
                        }
                    }
                }
                BiVertex::Right(v) => {
                    // edges were (or will be) copied when expanding the
                    // U-side endpoint
                    if let Some(neighbors) = self.graph.neighbors_of_vnode(&v) {
                        for u in neighbors {
                            let neighbor = BiVertex::Left(u.clone());
                            if self.remaining.remove(&neighbor) {
                                self.stack.push(neighbor);
                            }
                        }
                    }
                }
            }
        }

        Some(component)
    }
}

impl<U, V, W> FusedIterator for BigraphComponents<'_, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
}

/// Iterator over the connected components of a [`Graph`].
///
/// Each edge is copied into its component exactly once (when its smaller
/// endpoint is expanded).
pub struct GraphComponents<'a, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    graph: &'a Graph<V, W>,
    remaining: FxHashSet<V>,
    stack: Vec<V>,
}

impl<'a, V, W> GraphComponents<'a, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a Graph<V, W>) -> Self {
        Self {
            graph,
            remaining: graph.nodes().cloned().collect(),
            stack: Vec::with_capacity(32),
        }
    }
}

impl<V, W> Iterator for GraphComponents<'_, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    type Item = Graph<V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let seed = self.remaining.iter().next().cloned()?;
        self.remaining.remove(&seed);

        let mut component = Graph::new();
        self.stack.push(seed);

        while let Some(v) = self.stack.pop() {
            if let Some(neighbors) = self.graph.neighbors_of(&v) {
                for u in neighbors {
                    if v < *u {
                        let weight = self.graph.edge_weight(&v, u).cloned().unwrap();
                        component.add_weighted_edge(v.clone(), u.clone(), weight);
                    }

                    if self.remaining.remove(u) {
                        self.stack.push(u.clone());
                    }
                }
            }
        }

        Some(component)
    }
}

impl<V, W> FusedIterator for GraphComponents<'_, V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use crate::prelude::*;

    /// Sorts each component's vertex sets and then the components themselves
    fn sorted_side_pairs<W: EdgeWeight>(
        components: Vec<Bigraph<i32, i32, W>>,
    ) -> Vec<(Vec<i32>, Vec<i32>)> {
        components
            .into_iter()
            .map(|c| {
                (
                    c.unodes().copied().sorted().collect_vec(),
                    c.vnodes().copied().sorted().collect_vec(),
                )
            })
            .sorted()
            .collect_vec()
    }

    fn example_bigraph() -> Bigraph<i32, i32, i64> {
        let mut g = Bigraph::new();
        g.add_clique([1, 2, 3], [-1, -2, -3]);
        g.add_clique([4], [-4, -5]);
        g.add_clique([5], [-5, -6]);
        g.add_edge(10, 20);
        g.add_edge(30, 20);
        g.add_edge(30, 40);
        g
    }

    #[test]
    fn bigraph_components() {
        let g = example_bigraph();

        let components = g.find_connected_components().collect_vec();
        assert_eq!(components.len(), 3);

        let pairs = sorted_side_pairs(components);
        assert_eq!(
            pairs,
            vec![
                (vec![1, 2, 3], vec![-3, -2, -1]),
                (vec![4, 5], vec![-6, -5, -4]),
                (vec![10, 30], vec![20, 40]),
            ]
        );
    }

    #[test]
    fn bridged_bigraph_components() {
        let mut g = example_bigraph();
        g.add_edge(4, -1); // bridges the first two components

        let pairs = sorted_side_pairs(g.find_connected_components().collect_vec());
        assert_eq!(
            pairs,
            vec![
                (vec![1, 2, 3, 4, 5], vec![-6, -5, -4, -3, -2, -1]),
                (vec![10, 30], vec![20, 40]),
            ]
        );
    }

    #[test]
    fn components_partition_the_edge_set() {
        let g = example_bigraph();

        let components = g.find_connected_components().collect_vec();
        let total_edges: usize = components.iter().map(|c| c.number_of_edges()).sum();
        assert_eq!(total_edges, g.number_of_edges());

        // weights must survive the decomposition untouched
        let rebuilt = Bigraph::from_components(components);
        assert_eq!(rebuilt, g);
    }

    #[test]
    fn graph_components() {
        let g = Graph::<i32, i64>::from_edges([
            (1, 5),
            (1, 2),
            (2, 5),
            (2, 3),
            (3, 4),
            (4, 5),
            (10, 20),
        ]);

        let components = g.find_connected_components().collect_vec();
        assert_eq!(components.len(), 2);

        let node_sets = components
            .iter()
            .map(|c| c.nodes().copied().sorted().collect_vec())
            .sorted()
            .collect_vec();
        assert_eq!(node_sets, vec![vec![1, 2, 3, 4, 5], vec![10, 20]]);

        let rebuilt = Graph::from_components(components);
        assert_eq!(rebuilt, g);
    }

    #[test]
    fn components_act_as_disjoint_sets() {
        // union(0, 1), union(2, 3), union(3, 0) merge into a single set
        let g = Graph::<i32, i64>::from_edges([(0, 1), (2, 3), (3, 0)]);

        let components = g.find_connected_components().collect_vec();
        assert_eq!(components.len(), 1);
        assert_eq!(
            components[0].nodes().copied().sorted().collect_vec(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn component_vertex_sets_are_disjoint() {
        let g = example_bigraph();

        let mut seen = 0usize;
        let mut all_nodes = std::collections::HashSet::new();
        for component in g.find_connected_components() {
            seen += component.number_of_nodes();
            all_nodes.extend(component.unodes().map(|&u| (Side::Left, u)));
            all_nodes.extend(component.vnodes().map(|&v| (Side::Right, v)));
        }

        // no vertex appears in two components and none is lost
        assert_eq!(all_nodes.len(), seen);
        assert_eq!(seen, g.number_of_nodes());
    }

    #[test]
    fn long_path_does_not_recurse() {
        let n = 10_000;
        let g = Graph::<u32, i64>::from_edges((0..n).map(|i| (i, i + 1)));

        let components = g.find_connected_components().collect_vec();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].number_of_nodes(), n as usize + 1);
        assert_eq!(components[0].number_of_edges(), n as usize);
    }
}
