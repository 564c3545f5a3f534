/*!
# IO

Utilities for writing graphs to (and reading them back from) external
consumers.

## Binary persistence

[`BinaryWrite`] / [`BinaryRead`] serialize a whole graph to a byte stream and
back. The stream is tagged with a magic number and the graph kind; loading a
stream written for a different graph type fails loudly instead of producing a
silently wrong graph.

## Output Formats

For visualization, the [DOT language](https://graphviz.org/doc/info/lang.html)
of [GraphViz](https://graphviz.org/) is supported via [`DotWriter`]. Node and
edge rendering is customizable through decorator callbacks.
*/

pub mod binary;
pub mod dot;

pub use binary::*;
pub use dot::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
