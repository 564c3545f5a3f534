use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use num::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{
    algo::{Cliques, GraphComponents},
    edge::Edge,
    ops::*,
    repr::Bigraph,
    vertex::Vertex,
    weight::EdgeWeight,
};

/// Undirected unipartite graph `G = (V, E)` with accumulating edge weights.
///
/// A single adjacency map serves both edge directions: inserting `{u, v}`
/// registers `v` as a neighbor of `u` and `u` as a neighbor of `v` in one
/// operation, so the symmetric views can never drift apart. Edges are keyed
/// by the normalized pair `{min, max}` (see [`Edge`]); self-loops are a
/// structural violation and rejected fatally.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = Graph::<i32, i64>::from_edges([(1, 2), (2, 3), (1, 3), (3, 4)]);
///
/// assert_eq!(g.find_connected_components().count(), 1);
/// let cliques: Vec<_> = g.find_cliques().collect();
/// assert_eq!(cliques.len(), 1); // the triangle {1, 2, 3}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<V, W>
where
    V: Vertex,
    W: EdgeWeight,
{
    adj: FxHashMap<V, FxHashSet<V>>,
    weights: FxHashMap<Edge<V>, W>,
}

impl<V: Vertex, W: EdgeWeight> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adj: FxHashMap::default(),
            weights: FxHashMap::default(),
        }
    }
}

/// Equality is defined purely by the weight tables; the adjacency index is a
/// derived structure.
impl<V: Vertex, W: EdgeWeight> PartialEq for Graph<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.weights == other.weights
    }
}

impl<V: Vertex, W: EdgeWeight> Eq for Graph<V, W> {}

impl<V: Vertex, W: EdgeWeight> Graph<V, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a graph from an iterator of edges, each inserted with
    /// weight one.
    /// ** Panics if any edge is a self-loop **
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Constructs a graph from an iterator of `(u, v, weight)` triples.
    /// ** Panics if any edge is a self-loop **
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_weighted_edge(u, v, weight);
        }
        graph
    }

    /// Derives a copy keeping only the edges whose weight is at least
    /// `min_edge_weight`
    pub fn with_min_edge_weight(&self, min_edge_weight: &W) -> Self {
        let mut graph = Self::new();
        for (edge, weight) in &self.weights {
            if weight >= min_edge_weight {
                graph.insert_edge(edge.clone(), weight.clone());
            }
        }
        graph
    }

    /// Adds a single undirected edge with weight one.
    /// ** Panics if `u == v` **
    pub fn add_edge(&mut self, u: V, v: V) {
        self.add_weighted_edge(u, v, W::one());
    }

    /// Adds a single undirected edge, accumulating `weight` onto any
    /// existing entry. Insertion order of the endpoints does not matter.
    /// ** Panics if `u == v` **
    pub fn add_weighted_edge(&mut self, u: V, v: V, weight: W) {
        self.insert_edge(Edge::new(u, v), weight);
    }

    /// Adds a complete subgraph over the given vertices: every unordered
    /// pair of distinct members is inserted once with weight one
    pub fn add_clique<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.add_weighted_clique(nodes, W::one());
    }

    /// Adds a complete subgraph with a given per-edge weight
    pub fn add_weighted_clique<I>(&mut self, nodes: I, weight: W)
    where
        I: IntoIterator<Item = V>,
    {
        let nodes: Vec<V> = nodes.into_iter().collect();
        for (u, v) in nodes.iter().tuple_combinations() {
            self.add_weighted_edge(u.clone(), v.clone(), weight.clone());
        }
    }

    /// Returns an iterator over all vertices
    pub fn nodes(&self) -> impl Iterator<Item = &V> + '_ {
        self.adj.keys()
    }

    /// Returns the neighbors of a vertex, or `None` if the vertex is unknown
    pub fn neighbors_of(&self, v: &V) -> Option<&FxHashSet<V>> {
        self.adj.get(v)
    }

    /// Returns *true* if the edge `{u, v}` exists
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adj.get(u).is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Returns the weight of the edge `{u, v}`, if present
    pub fn edge_weight(&self, u: &V, v: &V) -> Option<&W> {
        self.weights.get(&Edge::new(u.clone(), v.clone()))
    }

    /// Returns the summed weight of all edges incident to a vertex.
    /// Runs in O(degree).
    pub fn node_weight(&self, v: &V) -> W {
        let mut weight = W::zero();
        if let Some(neighbors) = self.adj.get(v) {
            for u in neighbors {
                weight += self.weights[&Edge::new(u.clone(), v.clone())].clone();
            }
        }
        weight
    }

    /// Returns the ratio of existing edges to the `|V| · (|V| - 1) / 2`
    /// possible ones, or `None` for graphs with fewer than two vertices
    pub fn density(&self) -> Option<f64> {
        let n = self.adj.len();
        if n < 2 {
            return None;
        }

        debug_assert!(2 * self.weights.len() <= n * (n - 1));
        Some((2 * self.weights.len()) as f64 / (n * (n - 1)) as f64)
    }

    /// Returns an iterator over all edges as endpoint pairs
    pub fn to_edgelist(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.weights.keys().map(|edge| (&edge.0, &edge.1))
    }

    /// Derives a graph with every vertex passed through a renamer, typically
    /// to reduce a graph onto coarser vertex classes. A renamer returning
    /// `None` signals that the edge at hand should be skipped; the reduction
    /// continues with the remaining edges.
    /// ** Panics if renaming maps both endpoints of an edge to one vertex **
    pub fn rename_nodes<V2, F>(&self, mut renamer: F) -> Graph<V2, W>
    where
        V2: Vertex,
        F: FnMut(&V) -> Option<V2>,
    {
        let mut graph = Graph::new();
        for (edge, weight) in &self.weights {
            let (Some(u2), Some(v2)) = (renamer(&edge.0), renamer(&edge.1)) else {
                continue;
            };
            graph.add_weighted_edge(u2, v2, weight.clone());
        }
        graph
    }

    /// Returns a lazy iterator over the maximal connected subgraphs.
    /// Components partition both the vertex set and the edge set.
    pub fn find_connected_components(&self) -> GraphComponents<'_, V, W> {
        GraphComponents::new(self)
    }

    /// Returns a lazy iterator enumerating all maximal cliques of at least
    /// the configured minimum size (3 by default)
    pub fn find_cliques(&self) -> Cliques<'_, V, W> {
        Cliques::new(self)
    }
}

impl<V: Vertex, W: EdgeWeight> GraphOrder for Graph<V, W> {
    fn number_of_nodes(&self) -> usize {
        self.adj.len()
    }

    fn number_of_edges(&self) -> usize {
        self.weights.len()
    }
}

impl<V: Vertex, W: EdgeWeight> WeightTable for Graph<V, W> {
    type EdgeKey = Edge<V>;
    type Weight = W;

    fn edge_weights(&self) -> impl Iterator<Item = (&Self::EdgeKey, &Self::Weight)> + '_ {
        self.weights.iter()
    }

    fn edge_weight_of(&self, key: &Self::EdgeKey) -> Option<&W> {
        self.weights.get(key)
    }

    fn insert_edge(&mut self, key: Self::EdgeKey, weight: W) {
        assert!(!key.is_loop(), "an edge must connect two distinct nodes");
        debug_assert!(key.is_normalized());

        let Edge(u, v) = key;
        self.adj.entry(u.clone()).or_default().insert(v.clone());
        self.adj.entry(v.clone()).or_default().insert(u.clone());
        *self.weights.entry(Edge(u, v)).or_insert_with(W::zero) += weight;
    }
}

/// Collapses a bipartite graph over a shared vertex type into a unipartite
/// one: the two adjacency directions are merged into the symmetric index and
/// edges are re-keyed by their normalized pair. Where both `(a, b)` and
/// `(b, a)` existed, the later entry wins.
///
/// ** Panics if the bipartite graph contains an edge `(a, a)` **
impl<V: Vertex, W: EdgeWeight> From<&Bigraph<V, V, W>> for Graph<V, W> {
    fn from(base: &Bigraph<V, V, W>) -> Self {
        let mut graph = Graph::new();
        for ((u, v), weight) in base.edge_weights() {
            let edge = Edge::new(u.clone(), v.clone());
            assert!(!edge.is_loop(), "an edge must connect two distinct nodes");

            let Edge(a, b) = &edge;
            graph.adj.entry(a.clone()).or_default().insert(b.clone());
            graph.adj.entry(b.clone()).or_default().insert(a.clone());
            graph.weights.insert(edge, weight.clone());
        }
        graph
    }
}

impl_algebra_ops!(Graph<V; W>);
