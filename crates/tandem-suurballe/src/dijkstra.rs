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

//! Shortest augmenting path search on a 0/1 residual network.
//!
//! The residual network of a 0/1 flow contains, for every arc `e = (u, v)`,
//! the forward arc `u -> v` with length `length(e)` if `flow(e) == 0`, and
//! the reverse arc `v -> u` with length `-length(e)` if `flow(e) == 1`.
//! Reverse arcs make lengths negative, so the search runs on reduced lengths
//! `length + potential[u] - potential[v]`, which stay non-negative as long
//! as the potentials are maintained after every successful search.
//!
//! The search is a label-setting Dijkstra that stops as soon as the target
//! reaches the top of the heap. On success every node settled during the
//! search has its potential shifted by `dist - target_dist`, which keeps all
//! reduced lengths non-negative for the next search and leaves the new path
//! tight. Nodes that were not settled keep their potential.

use crate::stats::SuurballeStatistics;
use tandem_core::num::LengthNumeric;
use tandem_graph::{
    digraph::Digraph,
    index::{ArcIndex, NodeIndex},
    map::{ArcMap, NodeMap},
};
use tandem_heap::{Heap, HeapState};

/// The read-only inputs of a residual search.
#[derive(Debug, Clone, Copy)]
pub struct ResidualNetwork<'a, G, L> {
    pub graph: &'a G,
    pub flow: &'a ArcMap<i32>,
    pub length: &'a ArcMap<L>,
}

/// Reusable state for residual shortest path searches.
///
/// The heap and its cross reference are sized once and reset between
/// searches by touching only the nodes the previous search reached.
#[derive(Debug, Clone)]
pub struct ResidualDijkstra<L, H> {
    heap: H,
    dist: NodeMap<L>,
    processed: Vec<NodeIndex>,
}

impl<L, H> ResidualDijkstra<L, H>
where
    L: LengthNumeric,
    H: Heap<NodeIndex, L>,
{
    /// Creates search state for graphs with `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            heap: H::with_items(num_nodes),
            dist: NodeMap::with_len(num_nodes, L::zero()),
            processed: Vec::with_capacity(num_nodes),
        }
    }

    /// Returns the nodes settled by the last search, in settling order.
    #[inline]
    pub fn processed(&self) -> &[NodeIndex] {
        &self.processed
    }

    /// Returns the heap.
    #[inline]
    pub fn heap(&self) -> &H {
        &self.heap
    }

    /// Returns every node touched by the previous search to `Absent`.
    fn reset(&mut self) {
        self.heap.clear();
        for &node in &self.processed {
            self.heap.set_state(node, HeapState::Absent);
        }
        self.processed.clear();
    }

    /// Searches a shortest `source -> target` path in the residual network.
    ///
    /// On success `pred` holds, for every node on the path except `source`,
    /// the graph arc through which the search reached it (`pred[source]` is
    /// `None`), `potential` is updated, and the length of the path in the
    /// residual network is returned. Returns `None` if `target` is not
    /// reachable; `potential` is left untouched in that case.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `target` is not a node of the graph.
    pub fn run<G>(
        &mut self,
        network: &ResidualNetwork<'_, G, L>,
        potential: &mut NodeMap<L>,
        pred: &mut NodeMap<Option<ArcIndex>>,
        source: NodeIndex,
        target: NodeIndex,
        stats: &mut SuurballeStatistics,
    ) -> Option<L>
    where
        G: Digraph,
    {
        let graph = network.graph;
        assert!(
            graph.contains_node(source) && graph.contains_node(target),
            "called `ResidualDijkstra::run` with nodes out of bounds: the graph has {} nodes but the endpoints are {} and {}",
            graph.num_nodes(),
            source,
            target
        );

        self.reset();
        stats.on_search();

        self.heap.push(source, L::zero());
        pred[source] = None;

        while !self.heap.is_empty() && self.heap.top() != target {
            let u = self.heap.top();
            let key = self.heap.prio();
            let d = key + potential[u];
            self.dist[u] = key;
            self.heap.pop();
            self.processed.push(u);
            stats.on_node_settled();

            for &arc in graph.out_arcs(u) {
                if network.flow[arc] == 0 {
                    let v = graph.target(arc);
                    let key = d + network.length[arc] - potential[v];
                    Self::relax(&mut self.heap, pred, stats, v, arc, key);
                }
            }

            for &arc in graph.in_arcs(u) {
                if network.flow[arc] == 1 {
                    let v = graph.source(arc);
                    let key = d - network.length[arc] - potential[v];
                    Self::relax(&mut self.heap, pred, stats, v, arc, key);
                }
            }
        }

        if self.heap.is_empty() {
            return None;
        }

        let target_dist = self.heap.prio();
        let path_length = target_dist - potential[source] + potential[target];
        for &u in &self.processed {
            potential[u] = potential[u] + self.dist[u] - target_dist;
        }
        Some(path_length)
    }

    #[inline(always)]
    fn relax(
        heap: &mut H,
        pred: &mut NodeMap<Option<ArcIndex>>,
        stats: &mut SuurballeStatistics,
        node: NodeIndex,
        arc: ArcIndex,
        key: L,
    ) {
        stats.on_arc_relaxed();
        match heap.state(node) {
            HeapState::Absent => {
                heap.push(node, key);
                pred[node] = Some(arc);
            }
            HeapState::Present(_) => {
                if key < heap.priority(node) {
                    heap.decrease(node, key);
                    pred[node] = Some(arc);
                    stats.on_decrease_key();
                }
            }
            HeapState::Removed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_graph::digraph::{DigraphBuilder, StaticDigraph};
    use tandem_heap::{BinaryHeap, QuadHeap};

    fn ni(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn ai(i: usize) -> ArcIndex {
        ArcIndex::new(i)
    }

    fn build(num_nodes: usize, arcs: &[(usize, usize, i64)]) -> (StaticDigraph, ArcMap<i64>) {
        let mut b = DigraphBuilder::with_nodes(num_nodes);
        for &(u, v, _) in arcs {
            b.add_arc(ni(u), ni(v));
        }
        let length = arcs.iter().map(|&(_, _, l)| l).collect();
        (b.build(), length)
    }

    fn pred_path(
        pred: &NodeMap<Option<ArcIndex>>,
        graph: &StaticDigraph,
        target: NodeIndex,
    ) -> Vec<ArcIndex> {
        let mut arcs = Vec::new();
        let mut node = target;
        while let Some(arc) = pred[node] {
            arcs.push(arc);
            node = if graph.target(arc) == node {
                graph.source(arc)
            } else {
                graph.target(arc)
            };
        }
        arcs.reverse();
        arcs
    }

    #[test]
    fn test_first_search_is_plain_dijkstra() {
        // 0 -> 1 (1), 1 -> 3 (1), 0 -> 2 (2), 2 -> 3 (2), 0 -> 3 (5)
        let (g, length) = build(
            4,
            &[(0, 1, 1), (1, 3, 1), (0, 2, 2), (2, 3, 2), (0, 3, 5)],
        );
        let flow = g.arc_map(0);
        let mut potential = g.node_map(0i64);
        let mut pred = g.node_map(None);
        let mut stats = SuurballeStatistics::new();

        let mut dijkstra = ResidualDijkstra::<i64, BinaryHeap<NodeIndex, i64>>::new(4);
        let network = ResidualNetwork {
            graph: &g,
            flow: &flow,
            length: &length,
        };
        let found = dijkstra.run(&network, &mut potential, &mut pred, ni(0), ni(3), &mut stats);

        assert_eq!(found, Some(2));
        assert_eq!(pred_path(&pred, &g, ni(3)), vec![ai(0), ai(1)]);
        // target stays on the heap, so it is never settled
        assert!(!dijkstra.processed().contains(&ni(3)));
        assert_eq!(stats.searches, 1);
        assert_eq!(stats.nodes_settled, dijkstra.processed().len() as u64);
        // settled nodes are shifted by dist - target_dist
        assert_eq!(potential[ni(0)], -2);
        assert_eq!(potential[ni(1)], -1);
        assert_eq!(potential[ni(3)], 0);
    }

    #[test]
    fn test_unreachable_target_leaves_potentials() {
        let (g, length) = build(3, &[(0, 1, 4), (2, 1, 1)]);
        let flow = g.arc_map(0);
        let mut potential = NodeMap::from_vec(vec![3i64, 1, 0]);
        let mut pred = g.node_map(None);
        let mut stats = SuurballeStatistics::new();

        let mut dijkstra = ResidualDijkstra::<i64, BinaryHeap<NodeIndex, i64>>::new(3);
        let network = ResidualNetwork {
            graph: &g,
            flow: &flow,
            length: &length,
        };
        assert_eq!(
            dijkstra.run(&network, &mut potential, &mut pred, ni(0), ni(2), &mut stats),
            None
        );
        assert_eq!(potential.as_slice(), &[3, 1, 0]);
    }

    #[test]
    fn test_reverse_arcs_are_used_for_flow_arcs() {
        // 0 -> 1 -> 2 -> 3 carries flow; the residual path 0 -> 2 -> 1 -> 3
        // walks arc 1 -> 2 backwards.
        let (g, length) = build(
            4,
            &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 2, 2), (1, 3, 2)],
        );
        let flow = ArcMap::from_vec(vec![1, 1, 1, 0, 0]);
        // potentials after the first augmentation along 0 -> 1 -> 2 -> 3
        let mut potential = NodeMap::from_vec(vec![-3i64, -2, -1, 0]);
        let mut pred = g.node_map(None);
        let mut stats = SuurballeStatistics::new();

        let mut dijkstra = ResidualDijkstra::<i64, QuadHeap<NodeIndex, i64>>::new(4);
        let network = ResidualNetwork {
            graph: &g,
            flow: &flow,
            length: &length,
        };
        let found = dijkstra.run(&network, &mut potential, &mut pred, ni(0), ni(3), &mut stats);

        // 2 - 1 + 2
        assert_eq!(found, Some(3));
        assert_eq!(pred_path(&pred, &g, ni(3)), vec![ai(3), ai(1), ai(4)]);
    }

    #[test]
    fn test_state_is_reset_between_searches() {
        let (g, length) = build(3, &[(0, 1, 1), (1, 2, 1)]);
        let flow = g.arc_map(0);
        let mut pred = g.node_map(None);
        let mut stats = SuurballeStatistics::new();
        let network = ResidualNetwork {
            graph: &g,
            flow: &flow,
            length: &length,
        };

        let mut dijkstra = ResidualDijkstra::<i64, BinaryHeap<NodeIndex, i64>>::new(3);
        for _ in 0..3 {
            let mut potential = g.node_map(0i64);
            assert_eq!(
                dijkstra.run(&network, &mut potential, &mut pred, ni(0), ni(2), &mut stats),
                Some(2)
            );
            // settled nodes are removed, the target is left on the heap
            let heap = dijkstra.heap();
            assert_eq!(heap.len(), 1);
            assert_eq!(heap.state(ni(0)), HeapState::Removed);
            assert_eq!(heap.state(ni(1)), HeapState::Removed);
            assert_eq!(heap.state(ni(2)), HeapState::Present(0));
        }
        assert_eq!(stats.searches, 3);
        assert_eq!(stats.nodes_settled, 6);
    }

    #[test]
    #[should_panic(expected = "called `ResidualDijkstra::run` with nodes out of bounds")]
    fn test_run_out_of_bounds_panics() {
        let (g, length) = build(2, &[(0, 1, 1)]);
        let flow = g.arc_map(0);
        let mut potential = g.node_map(0i64);
        let mut pred = g.node_map(None);
        let mut stats = SuurballeStatistics::new();
        let mut dijkstra = ResidualDijkstra::<i64, BinaryHeap<NodeIndex, i64>>::new(2);
        let network = ResidualNetwork {
            graph: &g,
            flow: &flow,
            length: &length,
        };
        dijkstra.run(&network, &mut potential, &mut pred, ni(0), ni(5), &mut stats);
    }
}
