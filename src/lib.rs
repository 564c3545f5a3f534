/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Every edge carries a weight that *accumulates* on repeated insertion,
  so the default integer weights double as edge-multiplicity counters.
- **w**ide-keyed : Vertices are opaque hashable values (integers, strings, your own key
  types), so no dense numbering or index mapping is required.
- undirected : Either bipartite ([`Bigraph`](crate::repr::Bigraph), two possibly
  differently-typed vertex universes) or unipartite ([`Graph`](crate::repr::Graph)).

# Representation

Both containers keep a bidirectional adjacency index next to a weight table keyed by the
edge: an ordered `(u, v)` pair for bipartite graphs, a canonically normalized pair for
unipartite ones (see [`Edge`](crate::edge::Edge)). The unipartite graph uses a *single*
symmetric adjacency map for both directions, so the two views cannot drift apart.

Graphs are mutated only through `add_edge` / `add_clique`; everything else derives fresh
instances. The edge-set algebra (`&g1 & &g2`, `&g1 | &g2`, `&g1 - &g2`) combines two
graphs by intersection (minimum weight), union (summed weight), or difference, and two
graphs compare equal exactly if their weight tables are equal.

# Design

All algorithms are provided as **lazy iterators**: component decomposition yields one
maximal connected subgraph at a time, and the clique searches emit one maximal
clique/biclique per step. Naturally recursive searches (the bipartite branch-and-bound
biclique enumeration and Bron-Kerbosch with pivoting) are driven by explicit frame
stacks instead, so deep search trees and large components cannot exhaust the call
stack. Abandoning an iterator mid-way is always safe: it owns only its local search
state and merely reads the source graph.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes both graph representations, edge/vertex/weight definitions, and the size & algebra traits,
- [`algo`] includes the algorithm iterators returned by `find_connected_components`, `find_bicliques`, and `find_cliques`,
- [`ops`] includes the trait seams ([`GraphOrder`](crate::ops::GraphOrder), [`WeightTable`](crate::ops::WeightTable), [`GraphAlgebra`](crate::ops::GraphAlgebra)) the operators are built on,
- [`io`] includes binary persistence with a type-checked header and a GraphViz-Dot writer with decorator callbacks.

In most use-cases, `use wgraphs::prelude::*;` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod io;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod vertex;
pub mod weight;

/// `wgraphs::prelude` includes definitions for vertices, edges and weights, all graph operation traits as well as both implemented representations.
pub mod prelude {
    pub use super::{edge::*, ops::*, repr::*, vertex::*, weight::*};
}
