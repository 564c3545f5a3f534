/*!
# Vertex Representation

Vertices are opaque, hashable values: any `Clone + Eq + Hash + Ord` type works
as a vertex, so callers can use integers, strings, interned ids, or their own
key types without an indexing step. `Ord` is required to give undirected edges
a canonical key (see [`Edge`](crate::edge::Edge)).

For bipartite graphs the two vertex universes may be different types entirely.
During traversals that walk both sides at once, a vertex is tagged with the
[`Side`] it came from via [`BiVertex`].
*/

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Marker trait for types usable as graph vertices.
///
/// Blanket-implemented; you never implement this yourself.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Vertex for T {}

/// The partition a vertex of a bipartite graph belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The U-side of `G = (U ∪ V, E)`
    Left,
    /// The V-side of `G = (U ∪ V, E)`
    Right,
}

impl Side {
    /// Returns the opposite side. Neighbors of a vertex always live on the
    /// flipped side.
    pub fn flipped(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A vertex tagged with the side it belongs to.
///
/// Used by the bipartite component search to keep one working set over both
/// vertex universes while still reconstructing cross-side edges with the
/// correct orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BiVertex<U, V> {
    Left(U),
    Right(V),
}

impl<U, V> BiVertex<U, V> {
    /// Returns the side this vertex is tagged with.
    pub fn side(&self) -> Side {
        match self {
            BiVertex::Left(_) => Side::Left,
            BiVertex::Right(_) => Side::Right,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn side_flipped() {
        assert_eq!(Side::Left.flipped(), Side::Right);
        assert_eq!(Side::Right.flipped(), Side::Left);
    }

    #[test]
    fn bivertex_side() {
        let left: BiVertex<u32, &str> = BiVertex::Left(3);
        let right: BiVertex<u32, &str> = BiVertex::Right("a");
        assert_eq!(left.side(), Side::Left);
        assert_eq!(right.side(), Side::Right);
        assert_eq!(left.side().flipped(), right.side());
    }
}
