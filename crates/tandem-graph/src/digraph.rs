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

//! Directed graphs.
//!
//! The `Digraph` trait is the capability contract the path algorithms are
//! written against: enumerate nodes and arcs, list the outgoing and incoming
//! arcs of a node, and map an arc to its endpoints. Absent arcs or nodes are
//! expressed with `Option`, there is no sentinel index.
//!
//! `StaticDigraph` is the bundled implementation. It is built once through
//! `DigraphBuilder` and is immutable afterwards. Adjacency is stored in
//! compressed form (one offset array plus one arc array per direction), so
//! `out_arcs` and `in_arcs` are plain slices.
//!
//! Enumeration order is deterministic: arcs are numbered in insertion order,
//! and the outgoing (incoming) arcs of a node are listed in the order they
//! were added. Algorithms whose tie-breaking depends on enumeration order
//! therefore produce identical results for identical inputs.

use crate::{
    index::{ArcIndex, NodeIndex},
    map::{ArcMap, NodeMap},
};

/// Read-only access to a directed graph.
pub trait Digraph {
    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs.
    fn num_arcs(&self) -> usize;

    /// Returns the node the arc `arc` leaves.
    fn source(&self, arc: ArcIndex) -> NodeIndex;

    /// Returns the node the arc `arc` enters.
    fn target(&self, arc: ArcIndex) -> NodeIndex;

    /// Returns the arcs leaving `node`.
    fn out_arcs(&self, node: NodeIndex) -> &[ArcIndex];

    /// Returns the arcs entering `node`.
    fn in_arcs(&self, node: NodeIndex) -> &[ArcIndex];

    /// Returns an iterator over all nodes in ascending order.
    #[inline]
    fn nodes(&self) -> impl DoubleEndedIterator<Item = NodeIndex> + ExactSizeIterator {
        NodeIndex::range(self.num_nodes())
    }

    /// Returns an iterator over all arcs in ascending order.
    #[inline]
    fn arcs(&self) -> impl DoubleEndedIterator<Item = ArcIndex> + ExactSizeIterator {
        ArcIndex::range(self.num_arcs())
    }

    /// Returns `true` if `node` is a node of this graph.
    #[inline]
    fn contains_node(&self, node: NodeIndex) -> bool {
        node.get() < self.num_nodes()
    }

    /// Returns `true` if `arc` is an arc of this graph.
    #[inline]
    fn contains_arc(&self, arc: ArcIndex) -> bool {
        arc.get() < self.num_arcs()
    }

    /// Creates a node map for this graph with every entry set to `value`.
    #[inline]
    fn node_map<V: Clone>(&self, value: V) -> NodeMap<V> {
        NodeMap::with_len(self.num_nodes(), value)
    }

    /// Creates an arc map for this graph with every entry set to `value`.
    #[inline]
    fn arc_map<V: Clone>(&self, value: V) -> ArcMap<V> {
        ArcMap::with_len(self.num_arcs(), value)
    }
}

/// An immutable digraph with compressed adjacency lists.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticDigraph {
    sources: Vec<NodeIndex>,   // len = num_arcs
    targets: Vec<NodeIndex>,   // len = num_arcs
    out_offsets: Vec<usize>,   // len = num_nodes + 1
    out_arcs: Vec<ArcIndex>,   // len = num_arcs
    in_offsets: Vec<usize>,    // len = num_nodes + 1
    in_arcs: Vec<ArcIndex>,    // len = num_arcs
}

impl StaticDigraph {
    /// Returns `(source, target)` of `arc`.
    #[inline]
    pub fn endpoints(&self, arc: ArcIndex) -> (NodeIndex, NodeIndex) {
        (self.sources[arc.get()], self.targets[arc.get()])
    }

    /// Returns the number of arcs leaving `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        let n = node.get();
        self.out_offsets[n + 1] - self.out_offsets[n]
    }

    /// Returns the number of arcs entering `node`.
    #[inline]
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        let n = node.get();
        self.in_offsets[n + 1] - self.in_offsets[n]
    }
}

impl Digraph for StaticDigraph {
    #[inline]
    fn num_nodes(&self) -> usize {
        self.out_offsets.len() - 1
    }

    #[inline]
    fn num_arcs(&self) -> usize {
        self.sources.len()
    }

    #[inline]
    fn source(&self, arc: ArcIndex) -> NodeIndex {
        self.sources[arc.get()]
    }

    #[inline]
    fn target(&self, arc: ArcIndex) -> NodeIndex {
        self.targets[arc.get()]
    }

    #[inline]
    fn out_arcs(&self, node: NodeIndex) -> &[ArcIndex] {
        let n = node.get();
        &self.out_arcs[self.out_offsets[n]..self.out_offsets[n + 1]]
    }

    #[inline]
    fn in_arcs(&self, node: NodeIndex) -> &[ArcIndex] {
        let n = node.get();
        &self.in_arcs[self.in_offsets[n]..self.in_offsets[n + 1]]
    }
}

impl std::fmt::Debug for StaticDigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticDigraph")
            .field("num_nodes", &self.num_nodes())
            .field("num_arcs", &self.num_arcs())
            .finish()
    }
}

impl std::fmt::Display for StaticDigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StaticDigraph(nodes: {}, arcs: {})",
            self.num_nodes(),
            self.num_arcs()
        )
    }
}

/// A builder for `StaticDigraph`.
///
/// # Examples
///
/// ```rust
/// # use tandem_graph::digraph::{Digraph, DigraphBuilder};
/// let mut builder = DigraphBuilder::new();
/// let s = builder.add_node();
/// let t = builder.add_node();
/// let a = builder.add_arc(s, t);
///
/// let graph = builder.build();
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.source(a), s);
/// assert_eq!(graph.out_arcs(s), &[a]);
/// assert_eq!(graph.in_arcs(t), &[a]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DigraphBuilder {
    num_nodes: usize,
    sources: Vec<NodeIndex>,
    targets: Vec<NodeIndex>,
}

impl DigraphBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that already holds `num_nodes` nodes, numbered
    /// `0..num_nodes`.
    #[inline]
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            sources: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Creates a builder with `num_nodes` nodes and room for `num_arcs` arcs.
    #[inline]
    pub fn preallocated(num_nodes: usize, num_arcs: usize) -> Self {
        Self {
            num_nodes,
            sources: Vec::with_capacity(num_arcs),
            targets: Vec::with_capacity(num_arcs),
        }
    }

    /// Returns the number of nodes added so far.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of arcs added so far.
    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.sources.len()
    }

    /// Adds a node and returns its index.
    #[inline]
    pub fn add_node(&mut self) -> NodeIndex {
        let node = NodeIndex::new(self.num_nodes);
        self.num_nodes += 1;
        node
    }

    /// Adds `count` nodes and returns the index of the first one.
    #[inline]
    pub fn add_nodes(&mut self, count: usize) -> NodeIndex {
        let first = NodeIndex::new(self.num_nodes);
        self.num_nodes += count;
        first
    }

    /// Adds an arc from `source` to `target` and returns its index.
    /// Parallel arcs and loops are allowed.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a node added to this builder.
    #[inline]
    pub fn add_arc(&mut self, source: NodeIndex, target: NodeIndex) -> ArcIndex {
        assert!(
            source.get() < self.num_nodes && target.get() < self.num_nodes,
            "called `DigraphBuilder::add_arc` with node out of bounds: the number of nodes is {} but the arc is {} -> {}",
            self.num_nodes,
            source,
            target
        );

        let arc = ArcIndex::new(self.sources.len());
        self.sources.push(source);
        self.targets.push(target);
        arc
    }

    /// Freezes the builder into a `StaticDigraph`.
    pub fn build(self) -> StaticDigraph {
        let n = self.num_nodes;
        assert!(
            n < usize::MAX,
            "called `DigraphBuilder::build` with {} nodes, which overflows the offset table",
            n
        );
        let (out_offsets, out_arcs) = compress(n, &self.sources);
        let (in_offsets, in_arcs) = compress(n, &self.targets);

        StaticDigraph {
            sources: self.sources,
            targets: self.targets,
            out_offsets,
            out_arcs,
            in_offsets,
            in_arcs,
        }
    }
}

/// Groups arc indices by `key[arc]` using a counting sort. Within a group
/// arcs keep ascending order.
fn compress(num_nodes: usize, key: &[NodeIndex]) -> (Vec<usize>, Vec<ArcIndex>) {
    let mut offsets = vec![0usize; num_nodes + 1];
    for node in key {
        offsets[node.get() + 1] += 1;
    }
    for i in 0..num_nodes {
        offsets[i + 1] += offsets[i];
    }

    let mut cursor = offsets.clone();
    let mut arcs = vec![ArcIndex::new(0); key.len()];
    for (arc, node) in key.iter().enumerate() {
        let slot = &mut cursor[node.get()];
        arcs[*slot] = ArcIndex::new(arc);
        *slot += 1;
    }

    debug_assert_eq!(offsets[num_nodes], key.len());
    (offsets, arcs)
}
