/*!
# Edge Weights

Edge weights form a monoid under addition: repeated insertion of the same edge
*accumulates* instead of overwriting, so the default integer weights double as
edge-multiplicity counters. The graph algebra additionally needs a total order
(`min` for intersections, threshold filtering on derivation).
*/

use std::ops::AddAssign;

use num::{One, Zero};

/// Capability trait for the pluggable weight type of a graph.
///
/// - [`Zero`] is the additive identity assumed for a missing edge,
/// - [`AddAssign`] accumulates repeated insertions of the same edge,
/// - [`One`] is the weight of an unweighted insert,
/// - [`Ord`] backs `min` in intersections and minimum-weight filters.
///
/// Blanket-implemented for all integer types (and anything else satisfying
/// the bounds).
pub trait EdgeWeight: Zero + One + AddAssign + Ord + Clone {}

impl<W: Zero + One + AddAssign + Ord + Clone> EdgeWeight for W {}

#[cfg(test)]
mod test {
    use super::*;

    fn accumulate<W: EdgeWeight>(values: impl IntoIterator<Item = W>) -> W {
        let mut total = W::zero();
        for value in values {
            total += value;
        }
        total
    }

    #[test]
    fn integers_are_edge_weights() {
        assert_eq!(accumulate([1i64, 2, 3]), 6);
        assert_eq!(accumulate::<u32>([]), 0);
        assert_eq!(i64::one(), 1);
    }
}
