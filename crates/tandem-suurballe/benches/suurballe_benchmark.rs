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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use tandem_graph::{
    digraph::{Digraph, DigraphBuilder, StaticDigraph},
    index::NodeIndex,
    map::ArcMap,
};
use tandem_heap::QuadHeap;
use tandem_suurballe::Suurballe;

/// A `side x side` grid with arcs in all four directions and random lengths.
fn grid(side: usize, seed: u64) -> (StaticDigraph, ArcMap<i64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let node = |r: usize, c: usize| NodeIndex::new(r * side + c);

    let mut builder = DigraphBuilder::preallocated(side * side, 4 * side * side);
    let mut lengths = Vec::with_capacity(4 * side * side);
    for r in 0..side {
        for c in 0..side {
            let mut add = |to: NodeIndex| {
                builder.add_arc(node(r, c), to);
                lengths.push(rng.random_range(1..100i64));
            };
            if c + 1 < side {
                add(node(r, c + 1));
            }
            if r + 1 < side {
                add(node(r + 1, c));
            }
            if c > 0 {
                add(node(r, c - 1));
            }
            if r > 0 {
                add(node(r - 1, c));
            }
        }
    }
    (builder.build(), ArcMap::from_vec(lengths))
}

fn bench_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("suurballe_grid");

    for side in [10usize, 30, 60] {
        let (graph, length) = grid(side, side as u64);
        let source = NodeIndex::new(0);
        let target = NodeIndex::new(graph.num_nodes() - 1);
        group.throughput(Throughput::Elements(graph.num_arcs() as u64));

        for k in [1usize, 2] {
            let label = format!("{}x{}/k{}", side, side, k);

            group.bench_with_input(BenchmarkId::new("binary", &label), &k, |b, &k| {
                let mut suurballe = Suurballe::new(&graph, &length);
                b.iter(|| black_box(suurballe.run(black_box(source), black_box(target), k)))
            });

            group.bench_with_input(BenchmarkId::new("quad", &label), &k, |b, &k| {
                let mut suurballe =
                    Suurballe::<_, _, QuadHeap<NodeIndex, i64>>::with_heap(&graph, &length);
                b.iter(|| black_box(suurballe.run(black_box(source), black_box(target), k)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_grids);
criterion_main!(benches);
