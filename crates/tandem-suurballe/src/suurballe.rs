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

//! Minimum total length arc-disjoint paths.
//!
//! `Suurballe` finds up to `k` arc-disjoint paths from a source to a target
//! whose total length is minimal among all sets of that many arc-disjoint
//! paths. It treats the problem as a minimum cost flow with unit arc
//! capacities and augments one unit at a time along shortest paths of the
//! residual network (`ResidualDijkstra`). A later path may traverse an arc
//! of an earlier one backwards, which cancels that arc; the flow is only
//! decomposed into paths once all augmentations are done.
//!
//! The instance moves through four phases:
//!
//! ```raw
//! Uninitialized --init--> Ready --find_flow--> FlowComputed --find_paths--> PathsReady
//! ```
//!
//! `run` performs all three steps. Flow queries need `FlowComputed`, path
//! queries need `PathsReady`; calling them earlier is a bug and panics.
//!
//! # Examples
//!
//! ```rust
//! use tandem_graph::{digraph::DigraphBuilder, index::NodeIndex, map::ArcMap};
//! use tandem_suurballe::Suurballe;
//!
//! let mut builder = DigraphBuilder::with_nodes(4);
//! let (s, a, b, t) = (NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(2), NodeIndex::new(3));
//! builder.add_arc(s, a);
//! builder.add_arc(a, t);
//! builder.add_arc(s, b);
//! builder.add_arc(b, t);
//! let graph = builder.build();
//! let length = ArcMap::from_vec(vec![1i64, 1, 2, 2]);
//!
//! let mut suurballe = Suurballe::new(&graph, &length);
//! assert_eq!(suurballe.run(s, t, 2), 2);
//! assert_eq!(suurballe.total_length(), 6);
//! ```

use crate::{
    dijkstra::{ResidualDijkstra, ResidualNetwork},
    error::LengthError,
    monitor::{no_op::NoOperationMonitor, search_monitor::SuurballeMonitor},
    stats::SuurballeStatistics,
    storage::MapStorage,
    validation,
};
use fixedbitset::FixedBitSet;
use std::time::Instant;
use tandem_core::num::LengthNumeric;
use tandem_graph::{
    digraph::Digraph,
    index::{ArcIndex, NodeIndex},
    map::{ArcMap, NodeMap},
    path::Path,
};
use tandem_heap::{BinaryHeap, Heap};

/// The lifecycle phase of a `Suurballe` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SuurballePhase {
    #[default]
    Uninitialized,
    Ready,
    FlowComputed,
    PathsReady,
}

impl std::fmt::Display for SuurballePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuurballePhase::Uninitialized => write!(f, "Uninitialized"),
            SuurballePhase::Ready => write!(f, "Ready"),
            SuurballePhase::FlowComputed => write!(f, "FlowComputed"),
            SuurballePhase::PathsReady => write!(f, "PathsReady"),
        }
    }
}

/// Successive shortest path solver for arc-disjoint paths of minimum total
/// length.
pub struct Suurballe<'a, G, L, H = BinaryHeap<NodeIndex, L>> {
    graph: &'a G,
    length: &'a ArcMap<L>,
    flow: MapStorage<'a, ArcMap<i32>>,
    potential: MapStorage<'a, NodeMap<L>>,
    pred: NodeMap<Option<ArcIndex>>,
    dijkstra: ResidualDijkstra<L, H>,
    monitor: Box<dyn SuurballeMonitor<L> + 'a>,
    statistics: SuurballeStatistics,
    source: Option<NodeIndex>,
    target: Option<NodeIndex>,
    path_num: usize,
    paths: Vec<Path>,
    phase: SuurballePhase,
}

impl<'a, G, L> Suurballe<'a, G, L>
where
    G: Digraph,
    L: LengthNumeric + 'a,
{
    /// Creates a solver using a binary heap.
    ///
    /// Lengths must be non-negative; this is only checked in debug builds.
    /// Use `try_new` to validate them.
    #[inline]
    pub fn new(graph: &'a G, length: &'a ArcMap<L>) -> Self {
        Self::with_heap(graph, length)
    }

    /// Creates a solver using a binary heap after validating `length`.
    #[inline]
    pub fn try_new(graph: &'a G, length: &'a ArcMap<L>) -> Result<Self, LengthError<L>> {
        Self::try_with_heap(graph, length)
    }
}

impl<'a, G, L, H> Suurballe<'a, G, L, H>
where
    G: Digraph,
    L: LengthNumeric + 'a,
    H: Heap<NodeIndex, L>,
{
    /// Creates a solver using the heap `H`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `length` does not hold one non-negative
    /// length per arc.
    pub fn with_heap(graph: &'a G, length: &'a ArcMap<L>) -> Self {
        debug_assert!(
            validation::check_lengths(graph, length).is_ok(),
            "called `Suurballe::with_heap` with an invalid length map: {}",
            validation::check_lengths(graph, length)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default()
        );

        Self {
            graph,
            length,
            flow: MapStorage::Owned(ArcMap::from_vec(Vec::new())),
            potential: MapStorage::Owned(NodeMap::from_vec(Vec::new())),
            pred: graph.node_map(None),
            dijkstra: ResidualDijkstra::new(graph.num_nodes()),
            monitor: Box::new(NoOperationMonitor::new()),
            statistics: SuurballeStatistics::new(),
            source: None,
            target: None,
            path_num: 0,
            paths: Vec::new(),
            phase: SuurballePhase::Uninitialized,
        }
    }

    /// Creates a solver using the heap `H` after validating `length`.
    pub fn try_with_heap(graph: &'a G, length: &'a ArcMap<L>) -> Result<Self, LengthError<L>> {
        validation::check_lengths(graph, length)?;
        Ok(Self::with_heap(graph, length))
    }

    /// Stores the flow in `map` instead of an internal map. The caller
    /// keeps the map and every value written to it.
    ///
    /// # Panics
    ///
    /// Panics if `map` does not hold one entry per arc.
    pub fn with_flow_map(mut self, map: &'a mut ArcMap<i32>) -> Self {
        assert_eq!(
            map.len(),
            self.graph.num_arcs(),
            "called `Suurballe::with_flow_map` with a map of the wrong size"
        );

        self.flow = MapStorage::Borrowed(map);
        self.phase = SuurballePhase::Uninitialized;
        self
    }

    /// Stores the potentials in `map` instead of an internal map. The
    /// caller keeps the map and every value written to it.
    ///
    /// # Panics
    ///
    /// Panics if `map` does not hold one entry per node.
    pub fn with_potential_map(mut self, map: &'a mut NodeMap<L>) -> Self {
        assert_eq!(
            map.len(),
            self.graph.num_nodes(),
            "called `Suurballe::with_potential_map` with a map of the wrong size"
        );

        self.potential = MapStorage::Borrowed(map);
        self.phase = SuurballePhase::Uninitialized;
        self
    }

    /// Reports search events to `monitor`.
    pub fn with_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SuurballeMonitor<L> + 'a,
    {
        self.monitor = Box::new(monitor);
        self
    }

    /// Finds up to `k` arc-disjoint paths of minimum total length from
    /// `source` to `target` and returns how many were found.
    pub fn run(&mut self, source: NodeIndex, target: NodeIndex, k: usize) -> usize {
        self.init(source);
        self.find_flow(target, k);
        self.find_paths();
        self.path_num
    }

    /// Sets the source, zeroes the flow and the potentials and resets the
    /// statistics.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a node of the graph.
    pub fn init(&mut self, source: NodeIndex) {
        assert!(
            self.graph.contains_node(source),
            "called `Suurballe::init` with source out of bounds: the graph has {} nodes but the source is {}",
            self.graph.num_nodes(),
            source
        );

        if let MapStorage::Owned(flow) = &mut self.flow {
            if flow.len() != self.graph.num_arcs() {
                *flow = self.graph.arc_map(0);
            }
        }
        if let MapStorage::Owned(potential) = &mut self.potential {
            if potential.len() != self.graph.num_nodes() {
                *potential = self.graph.node_map(L::zero());
            }
        }

        self.flow.fill(0);
        self.potential.fill(L::zero());
        self.pred.fill(None);
        self.statistics.reset();
        self.source = Some(source);
        self.target = None;
        self.path_num = 0;
        self.paths.clear();
        self.phase = SuurballePhase::Ready;
    }

    /// Augments up to `k` units of flow from the source to `target` along
    /// successive shortest residual paths and returns the number of units,
    /// which is the number of arc-disjoint paths found.
    ///
    /// If a flow was already computed since the last `init`, the solver is
    /// re-initialized with the same source first. If the source equals
    /// `target`, no path is found.
    ///
    /// # Panics
    ///
    /// Panics if `init` was never called or `target` is not a node of the
    /// graph.
    pub fn find_flow(&mut self, target: NodeIndex, k: usize) -> usize {
        let Some(source) = self.source else {
            panic!("called `Suurballe::find_flow` before `Suurballe::init`");
        };
        assert!(
            self.graph.contains_node(target),
            "called `Suurballe::find_flow` with target out of bounds: the graph has {} nodes but the target is {}",
            self.graph.num_nodes(),
            target
        );

        if self.phase != SuurballePhase::Ready {
            self.init(source);
        }

        let start = Instant::now();
        self.target = Some(target);
        self.monitor.on_enter_search(source, target, k);

        if source != target {
            while self.path_num < k {
                let network = ResidualNetwork {
                    graph: self.graph,
                    flow: &*self.flow,
                    length: self.length,
                };
                let Some(length) = self.dijkstra.run(
                    &network,
                    &mut self.potential,
                    &mut self.pred,
                    source,
                    target,
                    &mut self.statistics,
                ) else {
                    self.monitor.on_exhausted(self.path_num, &self.statistics);
                    break;
                };

                self.augment(target);
                self.statistics.on_path_found();
                self.monitor
                    .on_path_found(self.path_num, length, &self.statistics);
                self.path_num += 1;
            }
        }

        debug_assert!(
            validation::is_dual_certificate(
                self.graph,
                &*self.flow,
                self.length,
                &*self.potential
            ),
            "potentials do not certify the flow after `Suurballe::find_flow`"
        );

        self.statistics.add_time(start.elapsed());
        self.phase = SuurballePhase::FlowComputed;
        self.monitor.on_exit_search(&self.statistics);
        self.path_num
    }

    /// Pushes one unit along the predecessor chain ending at `target`.
    /// Arcs entered along their direction gain flow; arcs walked backwards
    /// lose theirs.
    fn augment(&mut self, target: NodeIndex) {
        let flow = &mut *self.flow;
        let mut node = target;
        while let Some(arc) = self.pred[node] {
            if node == self.graph.target(arc) {
                flow[arc] = 1;
                node = self.graph.source(arc);
            } else {
                flow[arc] = 0;
                node = self.graph.target(arc);
                self.statistics.on_arc_cancelled();
            }
        }
    }

    /// Decomposes the flow into `path_num` arc-disjoint paths.
    ///
    /// Each path starts at the source and repeatedly takes the first
    /// outgoing arc that still carries undistributed flow.
    ///
    /// # Panics
    ///
    /// Panics if no flow was computed since the last `init`.
    pub fn find_paths(&mut self) {
        self.assert_phase(SuurballePhase::FlowComputed, "find_paths");
        let (Some(source), Some(target)) = (self.source, self.target) else {
            panic!("called `Suurballe::find_paths` without endpoints");
        };

        let start = Instant::now();
        let mut remaining = FixedBitSet::with_capacity(self.graph.num_arcs());
        for (arc, &f) in self.flow.iter() {
            if f == 1 {
                remaining.insert(arc.get());
            }
        }

        self.paths.clear();
        self.paths.reserve(self.path_num);
        for _ in 0..self.path_num {
            let mut path = Path::new();
            let mut node = source;
            while node != target {
                let next = self
                    .graph
                    .out_arcs(node)
                    .iter()
                    .copied()
                    .find(|arc| remaining.contains(arc.get()));
                let Some(arc) = next else {
                    panic!(
                        "flow is not conserved at {} while decomposing path {}",
                        node,
                        self.paths.len()
                    );
                };
                remaining.set(arc.get(), false);
                path.push_back(arc);
                node = self.graph.target(arc);
            }
            self.paths.push(path);
        }

        self.statistics.add_time(start.elapsed());
        self.phase = SuurballePhase::PathsReady;
    }

    /// Returns the total length of the found paths, the sum of `length`
    /// over all arcs carrying flow.
    ///
    /// # Panics
    ///
    /// Panics if no flow was computed since the last `init`.
    pub fn total_length(&self) -> L {
        self.assert_phase(SuurballePhase::FlowComputed, "total_length");
        self.flow
            .iter()
            .filter(|&(_, &f)| f == 1)
            .fold(L::zero(), |acc, (arc, _)| acc + self.length[arc])
    }

    /// Returns the flow on `arc`: `1` if a found path uses it, `0` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if no flow was computed since the last `init`.
    #[inline]
    pub fn flow(&self, arc: ArcIndex) -> i32 {
        self.assert_phase(SuurballePhase::FlowComputed, "flow");
        self.flow[arc]
    }

    /// Returns the flow map.
    ///
    /// # Panics
    ///
    /// Panics if no flow was computed since the last `init`.
    #[inline]
    pub fn flow_map(&self) -> &ArcMap<i32> {
        self.assert_phase(SuurballePhase::FlowComputed, "flow_map");
        &self.flow
    }

    /// Returns the potential of `node`. The potentials are an optimal
    /// dual solution of the underlying minimum cost flow problem.
    ///
    /// # Panics
    ///
    /// Panics if no flow was computed since the last `init`.
    #[inline]
    pub fn potential(&self, node: NodeIndex) -> L {
        self.assert_phase(SuurballePhase::FlowComputed, "potential");
        self.potential[node]
    }

    /// Returns the potential map.
    ///
    /// # Panics
    ///
    /// Panics if no flow was computed since the last `init`.
    #[inline]
    pub fn potential_map(&self) -> &NodeMap<L> {
        self.assert_phase(SuurballePhase::FlowComputed, "potential_map");
        &self.potential
    }

    /// Returns the number of paths found by the last `find_flow`.
    ///
    /// # Panics
    ///
    /// Panics if no flow was computed since the last `init`.
    #[inline]
    pub fn path_num(&self) -> usize {
        self.assert_phase(SuurballePhase::FlowComputed, "path_num");
        self.path_num
    }

    /// Returns the `i`-th path.
    ///
    /// # Panics
    ///
    /// Panics if the paths were not computed or `i >= path_num()`.
    #[inline]
    pub fn path(&self, i: usize) -> &Path {
        self.assert_phase(SuurballePhase::PathsReady, "path");
        assert!(
            i < self.path_num,
            "called `Suurballe::path` with index out of bounds: the path count is {} but the index is {}",
            self.path_num,
            i
        );
        &self.paths[i]
    }

    /// Returns an iterator over the found paths.
    ///
    /// # Panics
    ///
    /// Panics if the paths were not computed.
    #[inline]
    pub fn paths(&self) -> std::slice::Iter<'_, Path> {
        self.assert_phase(SuurballePhase::PathsReady, "paths");
        self.paths.iter()
    }

    /// Returns the statistics of the searches since the last `init`.
    #[inline]
    pub fn statistics(&self) -> &SuurballeStatistics {
        &self.statistics
    }

    /// Returns the current phase.
    #[inline]
    pub fn phase(&self) -> SuurballePhase {
        self.phase
    }

    /// Returns the source set by the last `init`.
    #[inline]
    pub fn source(&self) -> Option<NodeIndex> {
        self.source
    }

    /// Returns the target of the last `find_flow`.
    #[inline]
    pub fn target(&self) -> Option<NodeIndex> {
        self.target
    }

    #[inline(always)]
    fn assert_phase(&self, required: SuurballePhase, method: &str) {
        assert!(
            self.phase >= required,
            "called `Suurballe::{}` in phase {}: the call requires phase {}",
            method,
            self.phase,
            required
        );
    }
}

impl<G, L, H> std::fmt::Debug for Suurballe<'_, G, L, H>
where
    L: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suurballe")
            .field("phase", &self.phase)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("path_num", &self.path_num)
            .field("monitor", &self.monitor.name())
            .finish()
    }
}

impl<G, L, H> std::fmt::Display for Suurballe<'_, G, L, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Suurballe(phase: {}, paths: {})",
            self.phase, self.path_num
        )
    }
}
