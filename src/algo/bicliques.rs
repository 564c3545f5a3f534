/*!
Enumeration of all maximal bicliques of a bipartite graph.

Implementation of the branch-and-bound algorithm from

> Zhang, Y., Chesler, E. J. & Langston, M. A.
> "On finding bicliques in bipartite graphs: a novel algorithm with
> application to the integration of diverse biological data types."
> Hawaii International Conference on System Sciences 0, 473+ (2008).

The recursion of the paper is replaced by an explicit stack of search frames
so that deep search trees cannot exhaust the call stack, and the search is
packaged as an iterator that emits one maximal biclique at a time.

Terminology (kept close to the paper):
- `L`: U-side vertices adjacent to every member of the current `R`
- `R`: V-side vertices committed to the current biclique
- `P`: V-side candidates not yet tried at this level
- `Q`: V-side vertices already tried at this level
*/

use std::iter::FusedIterator;

use fxhash::FxHashSet;

use crate::{repr::Bigraph, vertex::Vertex, weight::EdgeWeight};

/// A maximal biclique: every vertex in `left` is adjacent to every vertex in
/// `right`, and neither side can be extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biclique<U, V>
where
    U: Vertex,
    V: Vertex,
{
    pub left: FxHashSet<U>,
    pub right: FxHashSet<V>,
}

/// One level of the branch-and-bound search
struct SearchFrame<U, V> {
    /// `L`: common U-side neighbors of everything in `right`
    left: FxHashSet<U>,
    /// `R`: committed V-side vertices
    right: FxHashSet<V>,
    /// `P`: untried candidates, popped back to front
    candidates: Vec<V>,
    /// `Q`: tried candidates, drives the maximality check
    excluded: FxHashSet<V>,
}

/// Iterator enumerating all maximal bicliques of a [`Bigraph`].
///
/// The search space can be restricted to a subset of either side via
/// [`restrict_left`](Bicliques::restrict_left) /
/// [`restrict_right`](Bicliques::restrict_right); by default the full vertex
/// sets are searched. No ordering between the emitted bicliques is
/// guaranteed, but a given graph always produces the same sequence.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// // the example bigraph from Fig. 2 of the MBEA paper
/// let g = Bigraph::<&str, &str, i64>::from_edges([
///     ("u1", "v1"),
///     ("u1", "v2"),
///     ("u2", "v2"),
///     ("u3", "v1"),
///     ("u3", "v2"),
/// ]);
///
/// assert_eq!(g.find_bicliques().count(), 2);
/// ```
pub struct Bicliques<'a, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
    graph: &'a Bigraph<U, V, W>,
    stack: Vec<SearchFrame<U, V>>,
}

impl<'a, U, V, W> Bicliques<'a, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
    /// Construct the iterator for some graph, searching the full vertex sets
    pub fn new(graph: &'a Bigraph<U, V, W>) -> Self {
        let root = SearchFrame {
            left: graph.unodes().cloned().collect(),
            right: FxHashSet::default(),
            candidates: graph.vnodes().cloned().collect(),
            excluded: FxHashSet::default(),
        };

        Self {
            graph,
            stack: vec![root],
        }
    }

    /// Restricts the starting `L` to a subset of the U-side
    pub fn set_restrict_left<I>(&mut self, unodes: I)
    where
        I: IntoIterator<Item = U>,
    {
        self.stack[0].left = unodes.into_iter().collect();
    }

    /// Restricts the starting `L` to a subset of the U-side
    pub fn restrict_left<I>(mut self, unodes: I) -> Self
    where
        I: IntoIterator<Item = U>,
    {
        self.set_restrict_left(unodes);
        self
    }

    /// Restricts the starting candidate set `P` to a subset of the V-side
    pub fn set_restrict_right<I>(&mut self, vnodes: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.stack[0].candidates = vnodes.into_iter().collect();
    }

    /// Restricts the starting candidate set `P` to a subset of the V-side
    pub fn restrict_right<I>(mut self, vnodes: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        self.set_restrict_right(vnodes);
        self
    }
}

impl<U, V, W> Iterator for Bicliques<'_, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
    type Item = Biclique<U, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let no_neighbors = FxHashSet::default();

        loop {
            let Some(frame) = self.stack.last_mut() else {
                return None;
            };
            let Some(x) = frame.candidates.pop() else {
                // every candidate at this level has been tried
                self.stack.pop();
                continue;
            };

            let x_neighbors = graph.neighbors_of_vnode(&x).unwrap_or(&no_neighbors);

            // extend the biclique: L' = N(x) ∩ L
            let left_ext: FxHashSet<U> = x_neighbors
                .iter()
                .filter(|u| frame.left.contains(*u))
                .cloned()
                .collect();

            // check maximality: if a previously tried vertex is adjacent to
            // all of L', this extension was already covered by an earlier
            // branch and must not be reported again
            let mut excluded_ext = FxHashSet::default();
            let mut is_maximal = true;
            for q in &frame.excluded {
                let common = graph
                    .neighbors_of_vnode(q)
                    .unwrap_or(&no_neighbors)
                    .iter()
                    .filter(|u| left_ext.contains(*u))
                    .count();

                if common == left_ext.len() {
                    is_maximal = false;
                    break;
                } else if common > 0 {
                    // q still overlaps L' and stays relevant one level down
                    excluded_ext.insert(q.clone());
                }
            }

            if !is_maximal {
                frame.excluded.insert(x);
                continue;
            }

            let mut right_ext = frame.right.clone();
            right_ext.insert(x.clone());

            // split the remaining candidates against L': full overlap means
            // the vertex is a forced member of the extended biclique, partial
            // overlap keeps it as a candidate one level down, no overlap
            // drops it
            let mut candidates_ext = Vec::new();
            for v in &frame.candidates {
                let common = graph
                    .neighbors_of_vnode(v)
                    .unwrap_or(&no_neighbors)
                    .iter()
                    .filter(|u| left_ext.contains(*u))
                    .count();

                if common == left_ext.len() {
                    right_ext.insert(v.clone());
                } else if common > 0 {
                    candidates_ext.push(v.clone());
                }
            }

            frame.excluded.insert(x);

            let child = (!candidates_ext.is_empty()).then(|| SearchFrame {
                left: left_ext.clone(),
                right: right_ext.clone(),
                candidates: candidates_ext,
                excluded: excluded_ext,
            });
            if let Some(child) = child {
                self.stack.push(child);
            }

            return Some(Biclique {
                left: left_ext,
                right: right_ext,
            });
        }
    }
}

impl<U, V, W> FusedIterator for Bicliques<'_, U, V, W>
where
    U: Vertex,
    V: Vertex,
    W: EdgeWeight,
{
}
