/*!
# Graph Representations

The two graph containers of this crate:
- [`Bigraph`]: undirected bipartite graph with two (possibly differently
  typed) vertex universes and ordered `(u, v)` edge keys,
- [`Graph`]: undirected unipartite graph with a single symmetric adjacency
  index and normalized edge keys.

Both index adjacency in both directions, accumulate edge weights on repeated
insertion, and are mutated only through `add_edge` / `add_clique` (plus the
accumulating [`insert_edge`](crate::ops::WeightTable::insert_edge) the algebra
operators build on).
*/

mod bigraph;
mod graph;

pub use bigraph::*;
pub use graph::*;
