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

//! Certificates for computed flows and paths.
//!
//! These checks are independent of how a result was produced. The solver
//! uses `is_dual_certificate` as a debug assertion after every `find_flow`;
//! tests use all of them to verify results on random instances.

use crate::error::LengthError;
use fixedbitset::FixedBitSet;
use tandem_core::num::LengthNumeric;
use tandem_graph::{
    digraph::Digraph,
    index::NodeIndex,
    map::{ArcMap, NodeMap},
    path::Path,
};

/// Checks that `length` holds one non-negative length per arc of `graph`.
///
/// Returns the first violation in arc order.
pub fn check_lengths<G, L>(graph: &G, length: &ArcMap<L>) -> Result<(), LengthError<L>>
where
    G: Digraph,
    L: LengthNumeric,
{
    if length.len() != graph.num_arcs() {
        return Err(LengthError::SizeMismatch {
            num_arcs: graph.num_arcs(),
            len: length.len(),
        });
    }

    match length.iter().find(|(_, l)| l.is_negative()) {
        Some((arc, &length)) => Err(LengthError::Negative { arc, length }),
        None => Ok(()),
    }
}

/// Returns `true` if no arc of `graph` is used by more than one path, and
/// no path uses an arc twice.
pub fn are_arc_disjoint<'p, G, P>(graph: &G, paths: P) -> bool
where
    G: Digraph,
    P: IntoIterator<Item = &'p Path>,
{
    let mut used = FixedBitSet::with_capacity(graph.num_arcs());
    for path in paths {
        for arc in path.iter() {
            if used.put(arc.get()) {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if `flow` is a 0/1 flow of `value` units from `source` to
/// `target`: every node other than the endpoints is balanced, `source` has
/// an excess of `-value` and `target` of `+value`.
pub fn is_feasible_flow<G>(
    graph: &G,
    flow: &ArcMap<i32>,
    source: NodeIndex,
    target: NodeIndex,
    value: usize,
) -> bool
where
    G: Digraph,
{
    if flow.len() != graph.num_arcs() || flow.values().any(|&f| f != 0 && f != 1) {
        return false;
    }

    let Ok(value) = i64::try_from(value) else {
        return false;
    };

    let mut excess: NodeMap<i64> = graph.node_map(0);
    for arc in graph.arcs() {
        let f = i64::from(flow[arc]);
        excess[graph.source(arc)] -= f;
        excess[graph.target(arc)] += f;
    }

    graph.nodes().all(|node| {
        let expected = if source == target {
            0
        } else if node == source {
            -value
        } else if node == target {
            value
        } else {
            0
        };
        excess[node] == expected
    })
}

/// Returns `true` if `potential` proves `flow` optimal: every residual arc
/// has a non-negative reduced length. An arc `u -> v` without flow needs
/// `length + potential[u] - potential[v] >= 0`; an arc carrying flow needs
/// `length <= potential[v] - potential[u]`.
pub fn is_dual_certificate<G, L>(
    graph: &G,
    flow: &ArcMap<i32>,
    length: &ArcMap<L>,
    potential: &NodeMap<L>,
) -> bool
where
    G: Digraph,
    L: LengthNumeric,
{
    graph.arcs().all(|arc| {
        let (u, v) = (graph.source(arc), graph.target(arc));
        let reduced = length[arc] + potential[u] - potential[v];
        if flow[arc] == 0 {
            reduced >= L::zero()
        } else {
            reduced <= L::zero()
        }
    })
}

/// Returns `true` if `target` can be reached from `source` along arcs of
/// `graph`.
pub fn is_reachable<G>(graph: &G, source: NodeIndex, target: NodeIndex) -> bool
where
    G: Digraph,
{
    let mut visited = FixedBitSet::with_capacity(graph.num_nodes());
    let mut stack = vec![source];
    visited.insert(source.get());

    while let Some(node) = stack.pop() {
        if node == target {
            return true;
        }
        for &arc in graph.out_arcs(node) {
            let next = graph.target(arc);
            if !visited.put(next.get()) {
                stack.push(next);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_graph::{digraph::DigraphBuilder, digraph::StaticDigraph, index::ArcIndex};

    fn ni(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn ai(i: usize) -> ArcIndex {
        ArcIndex::new(i)
    }

    // 0 -> 1 -> 3, 0 -> 2 -> 3, 1 -> 2
    fn diamond() -> StaticDigraph {
        let mut b = DigraphBuilder::with_nodes(4);
        b.add_arc(ni(0), ni(1));
        b.add_arc(ni(1), ni(3));
        b.add_arc(ni(0), ni(2));
        b.add_arc(ni(2), ni(3));
        b.add_arc(ni(1), ni(2));
        b.build()
    }

    #[test]
    fn test_check_lengths() {
        let g = diamond();
        let ok = ArcMap::from_vec(vec![1i64, 2, 3, 4, 0]);
        assert_eq!(check_lengths(&g, &ok), Ok(()));

        let negative = ArcMap::from_vec(vec![1i64, -2, 3, -4, 0]);
        assert_eq!(
            check_lengths(&g, &negative),
            Err(LengthError::Negative {
                arc: ai(1),
                length: -2
            })
        );

        let short = ArcMap::from_vec(vec![1i64, 2]);
        assert_eq!(
            check_lengths(&g, &short),
            Err(LengthError::SizeMismatch { num_arcs: 5, len: 2 })
        );
    }

    #[test]
    fn test_are_arc_disjoint() {
        let g = diamond();
        let p1: Path = [ai(0), ai(1)].into_iter().collect();
        let p2: Path = [ai(2), ai(3)].into_iter().collect();
        let p3: Path = [ai(0), ai(4), ai(3)].into_iter().collect();

        assert!(are_arc_disjoint(&g, [&p1, &p2]));
        assert!(!are_arc_disjoint(&g, [&p1, &p3]));
        assert!(are_arc_disjoint(&g, std::iter::empty::<&Path>()));
    }

    #[test]
    fn test_is_feasible_flow() {
        let g = diamond();
        let two = ArcMap::from_vec(vec![1, 1, 1, 1, 0]);
        assert!(is_feasible_flow(&g, &two, ni(0), ni(3), 2));
        assert!(!is_feasible_flow(&g, &two, ni(0), ni(3), 1));

        let broken = ArcMap::from_vec(vec![1, 0, 1, 1, 0]);
        assert!(!is_feasible_flow(&g, &broken, ni(0), ni(3), 2));

        let not_binary = ArcMap::from_vec(vec![2, 2, 0, 0, 0]);
        assert!(!is_feasible_flow(&g, &not_binary, ni(0), ni(3), 2));

        let zero = g.arc_map(0);
        assert!(is_feasible_flow(&g, &zero, ni(0), ni(3), 0));
        assert!(is_feasible_flow(&g, &zero, ni(2), ni(2), 0));
    }

    #[test]
    fn test_is_dual_certificate() {
        let g = diamond();
        let length = ArcMap::from_vec(vec![1i64, 1, 2, 2, 5]);
        let zero_flow = g.arc_map(0);
        let zero_pot = g.node_map(0i64);
        assert!(is_dual_certificate(&g, &zero_flow, &length, &zero_pot));

        // shortest path 0 -> 1 -> 3 is tight when potentials are distances
        let flow = ArcMap::from_vec(vec![1, 1, 0, 0, 0]);
        let potential = NodeMap::from_vec(vec![0i64, 1, 2, 2]);
        assert!(is_dual_certificate(&g, &flow, &length, &potential));

        // without potentials the flow arcs are not tight
        assert!(!is_dual_certificate(&g, &flow, &length, &zero_pot));
    }

    #[test]
    fn test_is_reachable() {
        let g = diamond();
        assert!(is_reachable(&g, ni(0), ni(3)));
        assert!(is_reachable(&g, ni(1), ni(1)));
        assert!(!is_reachable(&g, ni(3), ni(0)));
    }
}
