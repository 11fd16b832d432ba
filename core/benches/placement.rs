use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use sweeper_core::BoardEngine;

fn initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for (name, size, mines) in [
        ("beginner", (9, 9), 10),
        ("expert", (30, 16), 99),
        ("dense", (30, 16), 470),
        ("full", (30, 16), 480),
    ] {
        group.bench_function(name, |b| {
            let mut rng = StdRng::seed_from_u64(0xdecaf);
            let mut engine = BoardEngine::new(size).unwrap();
            b.iter(|| {
                engine.initialize(black_box(mines), &mut rng).unwrap();
                black_box(engine.mine_count())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, initialize);
criterion_main!(benches);
