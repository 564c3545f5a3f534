use fxhash::{FxHashMap, FxHashSet};
use num::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{
    algo::{Bicliques, BigraphComponents},
    edge::BiEdge,
    ops::*,
    vertex::Vertex,
    weight::EdgeWeight,
};

/// Undirected bipartite graph `G = (U ∪ V, E)` with accumulating edge weights.
///
/// The two vertex universes may be different types. Edges are ordered pairs
/// `(u, v)` with `u` from the U-side and `v` from the V-side; both adjacency
/// directions (`U → V` and `V → U`) are indexed, and each edge owns one weight
/// entry that *accumulates* on repeated insertion. With the default integer
/// weights a `Bigraph` therefore doubles as an edge counter.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = Bigraph::<i32, i32, i64>::new();
/// g.add_clique([1, 2, 3], [-1, -2, -3]);
/// g.add_edge(4, -3);
///
/// assert_eq!(g.number_of_edges(), 10);
/// assert_eq!(g.find_connected_components().count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bigraph<U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
    u2v: FxHashMap<U, FxHashSet<V>>,
    v2u: FxHashMap<V, FxHashSet<U>>,
    weights: FxHashMap<BiEdge<U, V>, W>,
}

impl<U: Vertex, V: Vertex, W: EdgeWeight> Default for Bigraph<U, V, W> {
    fn default() -> Self {
        Self {
            u2v: FxHashMap::default(),
            v2u: FxHashMap::default(),
            weights: FxHashMap::default(),
        }
    }
}

/// Equality is defined purely by the weight tables; the adjacency index is a
/// derived structure.
impl<U: Vertex, V: Vertex, W: EdgeWeight> PartialEq for Bigraph<U, V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.weights == other.weights
    }
}

impl<U: Vertex, V: Vertex, W: EdgeWeight> Eq for Bigraph<U, V, W> {}

impl<U: Vertex, V: Vertex, W: EdgeWeight> Bigraph<U, V, W> {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a graph from an iterator of edges, each inserted with
    /// weight one
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (U, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Constructs a graph from an iterator of `(u, v, weight)` triples
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (U, V, W)>,
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
        for ((u, v), weight) in &self.weights {
            if weight >= min_edge_weight {
                graph.add_weighted_edge(u.clone(), v.clone(), weight.clone());
            }
        }
        graph
    }

    /// Adds a single edge with weight one
    pub fn add_edge(&mut self, u: U, v: V) {
        self.add_weighted_edge(u, v, W::one());
    }

    /// Adds a single edge, accumulating `weight` onto any existing entry
    pub fn add_weighted_edge(&mut self, u: U, v: V, weight: W) {
        self.insert_edge((u, v), weight);
    }

    /// Adds a complete bipartite subgraph: every `(u, v)` pair of the
    /// Cartesian product `unodes × vnodes` is inserted with weight one.
    /// This is the bulk primitive for building bicliques directly.
    pub fn add_clique<I, J>(&mut self, unodes: I, vnodes: J)
    where
        I: IntoIterator<Item = U>,
        J: IntoIterator<Item = V>,
    {
        self.add_weighted_clique(unodes, vnodes, W::one());
    }

    /// Adds a complete bipartite subgraph with a given per-edge weight
    pub fn add_weighted_clique<I, J>(&mut self, unodes: I, vnodes: J, weight: W)
    where
        I: IntoIterator<Item = U>,
        J: IntoIterator<Item = V>,
    {
        let vnodes: Vec<V> = vnodes.into_iter().collect();
        for u in unodes {
            for v in &vnodes {
                self.add_weighted_edge(u.clone(), v.clone(), weight.clone());
            }
        }
    }

    /// Returns an iterator over all U-side vertices
    pub fn unodes(&self) -> impl Iterator<Item = &U> + '_ {
        self.u2v.keys()
    }

    /// Returns an iterator over all V-side vertices
    pub fn vnodes(&self) -> impl Iterator<Item = &V> + '_ {
        self.v2u.keys()
    }

    /// Returns the number of U-side vertices
    pub fn number_of_unodes(&self) -> usize {
        self.u2v.len()
    }

    /// Returns the number of V-side vertices
    pub fn number_of_vnodes(&self) -> usize {
        self.v2u.len()
    }

    /// Returns the V-side neighbors of a U-side vertex, or `None` if the
    /// vertex is unknown
    pub fn neighbors_of_unode(&self, u: &U) -> Option<&FxHashSet<V>> {
        self.u2v.get(u)
    }

    /// Returns the U-side neighbors of a V-side vertex, or `None` if the
    /// vertex is unknown
    pub fn neighbors_of_vnode(&self, v: &V) -> Option<&FxHashSet<U>> {
        self.v2u.get(v)
    }

    /// Returns *true* if the edge `(u, v)` exists
    pub fn has_edge(&self, u: &U, v: &V) -> bool {
        self.u2v.get(u).is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Returns the weight of the edge `(u, v)`, if present
    pub fn edge_weight(&self, u: &U, v: &V) -> Option<&W> {
        self.weights.get(&(u.clone(), v.clone()))
    }

    /// Returns the summed weight of all edges incident to a U-side vertex.
    /// Runs in O(degree).
    pub fn unode_weight(&self, u: &U) -> W {
        let mut weight = W::zero();
        if let Some(neighbors) = self.u2v.get(u) {
            for v in neighbors {
                weight += self.weights[&(u.clone(), v.clone())].clone();
            }
        }
        weight
    }

    /// Returns the summed weight of all edges incident to a V-side vertex.
    /// Runs in O(degree).
    pub fn vnode_weight(&self, v: &V) -> W {
        let mut weight = W::zero();
        if let Some(neighbors) = self.v2u.get(v) {
            for u in neighbors {
                weight += self.weights[&(u.clone(), v.clone())].clone();
            }
        }
        weight
    }

    /// Returns the ratio of existing edges to the `|U| · |V|` possible ones,
    /// or `None` if either side is empty
    pub fn density(&self) -> Option<f64> {
        let (nu, nv) = (self.u2v.len(), self.v2u.len());
        if nu == 0 || nv == 0 {
            return None;
        }

        debug_assert!(self.weights.len() <= nu * nv);
        Some(self.weights.len() as f64 / (nu * nv) as f64)
    }

    /// Returns an iterator over all edges as endpoint pairs
    pub fn to_edgelist(&self) -> impl Iterator<Item = (&U, &V)> + '_ {
        self.weights.keys().map(|(u, v)| (u, v))
    }

    /// Derives a graph with every vertex passed through a renamer, typically
    /// to reduce a graph onto coarser vertex classes. A renamer returning
    /// `None` signals that the edge at hand should be skipped; the reduction
    /// continues with the remaining edges.
    pub fn rename_nodes<U2, V2, FU, FV>(
        &self,
        mut unode_renamer: FU,
        mut vnode_renamer: FV,
    ) -> Bigraph<U2, V2, W>
    where
        U2: Vertex,
        V2: Vertex,
        FU: FnMut(&U) -> Option<U2>,
        FV: FnMut(&V) -> Option<V2>,
    {
        let mut graph = Bigraph::new();
        for ((u, v), weight) in &self.weights {
            let (Some(u2), Some(v2)) = (unode_renamer(u), vnode_renamer(v)) else {
                continue;
            };
            graph.add_weighted_edge(u2, v2, weight.clone());
        }
        graph
    }

    /// Returns a lazy iterator over the maximal connected subgraphs.
    /// Components partition both the vertex set and the edge set.
    pub fn find_connected_components(&self) -> BigraphComponents<'_, U, V, W> {
        BigraphComponents::new(self)
    }

    /// Returns a lazy iterator enumerating all maximal bicliques
    pub fn find_bicliques(&self) -> Bicliques<'_, U, V, W> {
        Bicliques::new(self)
    }
}

impl<U: Vertex, V: Vertex, W: EdgeWeight> GraphOrder for Bigraph<U, V, W> {
    fn number_of_nodes(&self) -> usize {
        self.u2v.len() + self.v2u.len()
    }

    fn number_of_edges(&self) -> usize {
        self.weights.len()
    }
}

impl<U: Vertex, V: Vertex, W: EdgeWeight> WeightTable for Bigraph<U, V, W> {
    type EdgeKey = BiEdge<U, V>;
    type Weight = W;

    fn edge_weights(&self) -> impl Iterator<Item = (&Self::EdgeKey, &Self::Weight)> + '_ {
        self.weights.iter()
    }

    fn edge_weight_of(&self, key: &Self::EdgeKey) -> Option<&W> {
        self.weights.get(key)
    }

    fn insert_edge(&mut self, key: Self::EdgeKey, weight: W) {
        let (u, v) = key;
        self.u2v.entry(u.clone()).or_default().insert(v.clone());
        self.v2u.entry(v.clone()).or_default().insert(u.clone());
        *self.weights.entry((u, v)).or_insert_with(W::zero) += weight;
    }
}

impl_algebra_ops!(Bigraph<U, V; W>);
