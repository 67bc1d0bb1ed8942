//! Generation throughput benchmarks

use conway::{Seeding, Simulator};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn benchmark_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    // 900px window at cell sizes 5 and 2
    for side in [180usize, 450].iter() {
        let seeding = Seeding { seed: Some(42), density: 0.5 };
        let mut sim = Simulator::new(*side, *side, seeding).unwrap();

        group.bench_with_input(BenchmarkId::new("side", side), side, |b, _| {
            b.iter(|| {
                sim.step();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_step);
criterion_main!(benches);
