use std::hash::Hash;

use num::Zero;

use crate::weight::EdgeWeight;

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of vertices of the graph (both sides for a
    /// bipartite graph)
    fn number_of_nodes(&self) -> usize;

    /// Returns the number of distinct edge keys of the graph
    fn number_of_edges(&self) -> usize;

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// The edge-weight table at the heart of every graph in this crate: a mapping
/// from edge keys to accumulated weights.
///
/// Two graphs of the same type compare equal exactly if their weight tables
/// are equal; the adjacency index is a derived structure.
pub trait WeightTable {
    /// Key identifying one edge: an ordered `(U, V)` pair for bipartite
    /// graphs, a normalized [`Edge`](crate::edge::Edge) for unipartite ones.
    type EdgeKey: Clone + Eq + Hash;

    /// The weight monoid
    type Weight: EdgeWeight;

    /// Returns an iterator over all edge keys with their weights
    fn edge_weights(&self) -> impl Iterator<Item = (&Self::EdgeKey, &Self::Weight)> + '_;

    /// Returns the weight of an edge, or `None` if the edge is not present
    fn edge_weight_of(&self, key: &Self::EdgeKey) -> Option<&Self::Weight>;

    /// Returns *true* if the edge key is present in the table
    fn has_edge_key(&self, key: &Self::EdgeKey) -> bool {
        self.edge_weight_of(key).is_some()
    }

    /// Registers both endpoints of the edge in the adjacency index and
    /// *accumulates* `weight` into the edge's weight entry. Inserting the
    /// same edge twice sums the weights instead of overwriting.
    fn insert_edge(&mut self, key: Self::EdgeKey, weight: Self::Weight);

    /// Returns the sum of all edge weights
    fn total_weight(&self) -> Self::Weight {
        let mut total = Self::Weight::zero();
        for (_, weight) in self.edge_weights() {
            total += weight.clone();
        }
        total
    }
}

/// Binary set operations over the edge tables of two same-typed graphs.
///
/// All three operators build a brand-new instance through
/// [`WeightTable::insert_edge`]; the operands are never mutated. The
/// [`BitAnd`](std::ops::BitAnd) / [`BitOr`](std::ops::BitOr) /
/// [`Sub`](std::ops::Sub) operators on graph references delegate here.
pub trait GraphAlgebra: WeightTable + Default + Sized {
    /// Intersection of edge sets: an edge is present iff it is present in
    /// both operands, with the *minimum* of the two weights. Commutative.
    fn intersection(&self, other: &Self) -> Self {
        let mut graph = Self::default();
        for (key, weight) in self.edge_weights() {
            if let Some(other_weight) = other.edge_weight_of(key) {
                graph.insert_edge(key.clone(), weight.min(other_weight).clone());
            }
        }
        graph
    }

    /// Union of edge sets: an edge is present iff it is present in either
    /// operand, with the *sum* of the two weights (a missing edge counts as
    /// zero). Commutative.
    fn union_with(&self, other: &Self) -> Self {
        let mut graph = Self::default();
        for (key, weight) in self.edge_weights().chain(other.edge_weights()) {
            graph.insert_edge(key.clone(), weight.clone());
        }
        graph
    }

    /// Difference of edge sets: the edges present in `self` but absent in
    /// `other`, carrying `self`'s weights. Non-commutative.
    fn difference(&self, other: &Self) -> Self {
        let mut graph = Self::default();
        for (key, weight) in self.edge_weights() {
            if !other.has_edge_key(key) {
                graph.insert_edge(key.clone(), weight.clone());
            }
        }
        graph
    }

    /// Constructs a graph as the union of a series of graphs, typically the
    /// components yielded by a previous decomposition.
    fn from_components<I>(components: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        components
            .into_iter()
            .fold(Self::default(), |acc, component| acc.union_with(&component))
    }
}

impl<G> GraphAlgebra for G where G: WeightTable + Default {}

/// Implements `&G & &G`, `&G | &G` and `&G - &G` in terms of [`GraphAlgebra`]
/// for a concrete graph type.
macro_rules! impl_algebra_ops {
    ($graph:ident<$($v:ident),+ ; $w:ident>) => {
        impl<$($v: $crate::vertex::Vertex,)+ $w: $crate::weight::EdgeWeight> std::ops::BitAnd
            for &$graph<$($v,)+ $w>
        {
            type Output = $graph<$($v,)+ $w>;

            fn bitand(self, other: Self) -> Self::Output {
                self.intersection(other)
            }
        }

        impl<$($v: $crate::vertex::Vertex,)+ $w: $crate::weight::EdgeWeight> std::ops::BitOr
            for &$graph<$($v,)+ $w>
        {
            type Output = $graph<$($v,)+ $w>;

            fn bitor(self, other: Self) -> Self::Output {
                self.union_with(other)
            }
        }

        impl<$($v: $crate::vertex::Vertex,)+ $w: $crate::weight::EdgeWeight> std::ops::Sub
            for &$graph<$($v,)+ $w>
        {
            type Output = $graph<$($v,)+ $w>;

            fn sub(self, other: Self) -> Self::Output {
                self.difference(other)
            }
        }
    };
}

pub(crate) use impl_algebra_ops;

#[cfg(test)]
mod test {
    use crate::prelude::*;

    fn left() -> Graph<i32, i64> {
        Graph::from_edges([(1, 5), (1, 2), (2, 5), (2, 3), (3, 4), (4, 5), (10, 20)])
    }

    fn right() -> Graph<i32, i64> {
        Graph::from_edges([(3, 7), (7, 8), (4, 8), (4, 3)])
    }

    #[test]
    fn intersection() {
        let (a, b) = (left(), right());
        let a_and_b = &a & &b;

        assert_eq!(a_and_b.number_of_edges(), 1);
        assert_eq!(a_and_b.edge_weight(&3, &4), Some(&1));
    }

    #[test]
    fn intersection_takes_minimum_weight() {
        let mut a = Bigraph::<u32, u32, i64>::new();
        let mut b = Bigraph::new();
        a.add_weighted_edge(1, 2, 5);
        b.add_weighted_edge(1, 2, 3);
        b.add_weighted_edge(1, 3, 7);

        let a_and_b = &a & &b;
        assert_eq!(a_and_b.number_of_edges(), 1);
        assert_eq!(a_and_b.edge_weight(&1, &2), Some(&3));
    }

    #[test]
    fn union_sums_weights() {
        let mut a = Bigraph::<u32, u32, i64>::new();
        let mut b = Bigraph::new();
        a.add_weighted_edge(1, 2, 5);
        b.add_weighted_edge(1, 2, 3);
        b.add_weighted_edge(1, 3, 7);

        let a_or_b = &a | &b;
        assert_eq!(a_or_b.number_of_edges(), 2);
        assert_eq!(a_or_b.edge_weight(&1, &2), Some(&8));
        assert_eq!(a_or_b.edge_weight(&1, &3), Some(&7));
    }

    #[test]
    fn commutativity() {
        let (a, b) = (left(), right());

        assert_eq!(&a | &b, &b | &a);
        assert_eq!(&a & &b, &b & &a);
    }

    #[test]
    fn difference_carries_left_weights() {
        let (a, b) = (left(), right());

        let a_sub_b = &a - &b;
        assert_eq!(a_sub_b.number_of_edges(), a.number_of_edges() - 1);
        assert!(!a_sub_b.has_edge(&3, &4));
        assert_eq!(a_sub_b.edge_weight(&1, &5), Some(&1));

        let b_sub_a = &b - &a;
        assert_eq!(b_sub_a.number_of_edges(), 3);
    }

    #[test]
    fn difference_and_intersection_are_disjoint() {
        let a = left();
        let b = {
            let mut b = Graph::new();
            b.add_edge(1, 5);
            b.add_edge(2, 5);
            b
        };

        // A ⊇ B, so (A - B) ∩ B must have no edges
        let witness = &(&a - &b) & &b;
        assert!(witness.is_singleton_graph());
    }

    #[test]
    fn equality_ignores_everything_but_weights() {
        let a = left();
        let mut b = Graph::new();
        for (edge, weight) in a.edge_weights() {
            b.insert_edge(edge.clone(), weight.clone());
        }
        assert_eq!(a, b);

        b.add_edge(1, 5); // accumulates onto an existing edge
        assert_ne!(a, b);
    }

    #[test]
    fn total_weight() {
        let a = left();
        assert_eq!(a.total_weight(), 7);
    }

    #[test]
    fn from_components_rebuilds_the_graph() {
        let a = left();
        let rebuilt = Graph::from_components(a.find_connected_components());
        assert_eq!(a, rebuilt);
    }
}
