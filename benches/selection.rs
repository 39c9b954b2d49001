use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use prism::{
    CoverageModel, DEFAULT_ALPHA, SelectorConfig, eager_greedy_select, lazy_greedy_select,
};

fn random_vec(dim: usize, seed: u64) -> Vec<f32> {
    let mut x = seed.wrapping_add(1);
    (0..dim)
        .map(|_| {
            x = x
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((x >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
        })
        .collect()
}

/// Non-negative vectors so relevance stays non-negative.
fn pool(n: usize, dim: usize) -> (Vec<f32>, Vec<Vec<f32>>) {
    let abs = |v: Vec<f32>| v.into_iter().map(f32::abs).collect::<Vec<_>>();
    let reference = abs(random_vec(dim, 0));
    let embeddings = (1..=n as u64).map(|i| abs(random_vec(dim, i))).collect();
    (reference, embeddings)
}

fn bench_lazy_vs_eager(c: &mut Criterion) {
    let mut g = c.benchmark_group("greedy");
    let config = SelectorConfig::default();

    for &n in &[20, 100, 400] {
        let (reference, embeddings) = pool(n, 256);
        let model = CoverageModel::new(&reference, &embeddings, DEFAULT_ALPHA).unwrap();
        let k = n / 4;

        g.bench_with_input(BenchmarkId::new("lazy", n), &k, |bench, &k| {
            bench.iter(|| black_box(lazy_greedy_select(&model, k, &config).unwrap()));
        });

        g.bench_with_input(BenchmarkId::new("eager", n), &k, |bench, &k| {
            bench.iter(|| black_box(eager_greedy_select(&model, k, &config).unwrap()));
        });
    }

    g.finish();
}

fn bench_model_construction(c: &mut Criterion) {
    let (reference, embeddings) = pool(100, 1024);

    c.bench_function("coverage_model_100x1024", |bench| {
        bench.iter(|| black_box(CoverageModel::new(&reference, &embeddings, DEFAULT_ALPHA).unwrap()));
    });
}

criterion_group!(benches, bench_lazy_vs_eager, bench_model_construction);
criterion_main!(benches);
