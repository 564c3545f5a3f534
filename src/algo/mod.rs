/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to component decomposition and maximal clique/biclique enumeration.
All algorithms are provided as **iterators**, making it easy to consume results lazily,
and use explicit frame stacks instead of recursion so that large or deep graphs cannot
exhaust the call stack.
*/

mod bicliques;
mod cliques;
mod components;

pub use bicliques::*;
pub use cliques::*;
pub use components::*;
