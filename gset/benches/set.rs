use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gset::{intersection, union, Set};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sets(rng: &mut StdRng, num_sets: usize, len: usize) -> Vec<Set<u64>> {
    (0..num_sets)
        .map(|_| (0..len).map(|_| rng.random_range(0..(2 * len as u64))).collect())
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(79837224973);

    for &n in &[20, 100, 1000, 10000] {
        let sets = random_sets(&mut rng, 4, n);

        c.bench_function(&format!("set-union-{n}"), |b| b.iter(|| union(black_box(&sets))));
        c.bench_function(&format!("set-intersection-{n}"), |b| {
            b.iter(|| intersection(black_box(&sets)))
        });

        let a = &sets[0];
        let same = a.clone();
        c.bench_function(&format!("set-equals-{n}"), |b| b.iter(|| black_box(a).equals(black_box(&same))));
        c.bench_function(&format!("set-safe-equals-{n}"), |b| {
            b.iter(|| black_box(a).safe_equals(black_box(&same)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);

criterion_main!(benches);
