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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rota_model::problem::{Problem, ProblemBuilder};
use rota_odometer::engine::ScheduleEnumerator;
use rota_odometer::permutation::PermutationSets;
use rota_search::collector::CountingCollector;
use rota_search::monitor::no_op::NoOpMonitor;
use std::hint::black_box;

/// Builds a synthetic instance where every picker contests the same leading
/// pickees, which exercises both the pruning path and the valid-day path.
fn contested_instance(num_pickers: usize, num_picks: usize, num_timeslots: usize) -> Problem {
    let mut builder = ProblemBuilder::new();
    let num_pickees = num_pickers + num_picks;
    let pickees: Vec<_> = (0..num_pickees)
        .map(|i| builder.add_pickee(format!("pickee-{i}"), format!("p{i}@example.com")))
        .collect();
    for t in 0..num_timeslots {
        builder.add_timeslot(format!("slot-{t}"));
    }
    for p in 0..num_pickers {
        // Overlapping windows of picks: picker p picks pickees p..p+num_picks.
        builder.add_picker(
            format!("picker-{p}"),
            format!("picker{p}@example.com"),
            pickees[p..p + num_picks].to_vec(),
        );
    }
    builder.build().expect("benchmark instance must be valid")
}

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");

    for (num_pickers, num_picks, num_timeslots) in [(2, 2, 4), (3, 2, 4), (3, 3, 5)] {
        let problem = contested_instance(num_pickers, num_picks, num_timeslots);
        let sets = PermutationSets::generate(&problem);
        let label = format!("{num_pickers}x{num_picks}x{num_timeslots}");

        group.bench_with_input(
            BenchmarkId::new("pruned_walk", &label),
            &sets,
            |b, sets| {
                b.iter(|| {
                    let enumerator = ScheduleEnumerator::new(black_box(sets));
                    let mut collector = CountingCollector::new();
                    let mut monitor = NoOpMonitor;
                    let outcome = enumerator.run(&mut collector, &mut monitor);
                    black_box((collector.count(), outcome))
                })
            },
        );
    }

    group.finish();
}

fn bench_schedule_generation(c: &mut Criterion) {
    let problem = contested_instance(4, 3, 6);

    c.bench_function("schedule_generation_4x3x6", |b| {
        b.iter(|| black_box(PermutationSets::generate(black_box(&problem))))
    });
}

criterion_group!(benches, bench_enumeration, bench_schedule_generation);
criterion_main!(benches);
