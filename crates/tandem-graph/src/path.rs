// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Arc sequences.
//!
//! A `Path` is an ordered list of arcs, each one starting where the previous
//! one ended. The container itself does not enforce that; `is_walk_between`
//! checks it against a graph. Most paths produced by the disjoint path
//! algorithms are short, so the arcs live inline in a `SmallVec` and only
//! spill to the heap for long routes.

use crate::{
    digraph::Digraph,
    index::{ArcIndex, NodeIndex},
    map::ArcMap,
};
use num_traits::PrimInt;
use smallvec::SmallVec;

/// Number of arcs stored inline before a path allocates.
const INLINE_ARCS: usize = 8;

/// An ordered sequence of arcs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    arcs: SmallVec<[ArcIndex; INLINE_ARCS]>,
}

impl Path {
    /// Creates an empty path.
    #[inline]
    pub fn new() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Creates an empty path with room for `capacity` arcs.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arcs: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns the number of arcs.
    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns `true` if the path has no arcs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Appends `arc` to the end of the path.
    #[inline]
    pub fn push_back(&mut self, arc: ArcIndex) {
        self.arcs.push(arc);
    }

    /// Removes all arcs, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.arcs.clear();
    }

    /// Returns the `i`-th arc, or `None` if `i >= len()`.
    #[inline]
    pub fn nth(&self, i: usize) -> Option<ArcIndex> {
        self.arcs.get(i).copied()
    }

    /// Returns the first arc.
    #[inline]
    pub fn front(&self) -> Option<ArcIndex> {
        self.arcs.first().copied()
    }

    /// Returns the last arc.
    #[inline]
    pub fn back(&self) -> Option<ArcIndex> {
        self.arcs.last().copied()
    }

    /// Returns the arcs as a slice.
    #[inline]
    pub fn arcs(&self) -> &[ArcIndex] {
        &self.arcs
    }

    /// Returns an iterator over the arcs.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, ArcIndex>> {
        self.arcs.iter().copied()
    }

    /// Returns the sum of `length` over the arcs of the path.
    #[inline]
    pub fn length<L>(&self, length: &ArcMap<L>) -> L
    where
        L: PrimInt,
    {
        self.arcs
            .iter()
            .fold(L::zero(), |acc, &arc| acc + length[arc])
    }

    /// Returns the nodes visited by the path, starting with the source of
    /// the first arc. Empty paths visit no nodes.
    pub fn nodes<G>(&self, graph: &G) -> Vec<NodeIndex>
    where
        G: Digraph,
    {
        let mut nodes = Vec::with_capacity(self.arcs.len() + 1);
        if let Some(first) = self.front() {
            nodes.push(graph.source(first));
            nodes.extend(self.arcs.iter().map(|&arc| graph.target(arc)));
        }
        nodes
    }

    /// Returns `true` if the path is a walk in `graph` that starts at
    /// `source` and ends at `target`. An empty path is a walk only when
    /// `source == target`.
    pub fn is_walk_between<G>(&self, graph: &G, source: NodeIndex, target: NodeIndex) -> bool
    where
        G: Digraph,
    {
        let mut at = source;
        for &arc in &self.arcs {
            if !graph.contains_arc(arc) || graph.source(arc) != at {
                return false;
            }
            at = graph.target(arc);
        }
        at == target
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = ArcIndex;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ArcIndex>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ArcIndex> for Path {
    #[inline]
    fn from_iter<I: IntoIterator<Item = ArcIndex>>(iter: I) -> Self {
        Self {
            arcs: iter.into_iter().collect(),
        }
    }
}

impl Extend<ArcIndex> for Path {
    #[inline]
    fn extend<I: IntoIterator<Item = ArcIndex>>(&mut self, iter: I) {
        self.arcs.extend(iter);
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.arcs.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for arc in iter {
                write!(f, " -> {}", arc)?;
            }
        }
        Ok(())
    }
}
