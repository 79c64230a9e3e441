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
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rangers_model::scenario::Scenario;
use rangers_search::bfs::BfsSolver;
use rangers_search::config::BfsConfig;
use rangers_search::monitor::no_op::NoOperationMonitor;
use std::hint::black_box;

/// Nodes expanded by a run bounded at `max_depth` with the forced opening.
fn expanded_nodes(max_depth: usize) -> u64 {
    (1..max_depth).map(|depth| 4u64.pow(depth as u32 - 1)).sum()
}

fn bench_bounded_search(c: &mut Criterion) {
    let scenario = Scenario::rangers();
    let mut group = c.benchmark_group("bfs_benchmark");

    for max_depth in [6usize, 8, 10] {
        group.throughput(Throughput::Elements(expanded_nodes(max_depth)));
        group.bench_with_input(
            BenchmarkId::new("bounded_exhaustive", max_depth),
            &max_depth,
            |b, &max_depth| {
                let config = BfsConfig::new().with_max_depth(max_depth);
                let mut solver = BfsSolver::with_config(config, ChaCha8Rng::seed_from_u64(42));
                b.iter(|| {
                    let outcome = solver.solve(black_box(&scenario), NoOperationMonitor::new());
                    black_box(outcome.statistics().nodes_expanded)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_bounded_search);
criterion_main!(benches);
