//! Criterion benchmarks for the ILS sampling engine.
//!
//! Measures the hill climber and full ILS runs on the built-in
//! problems, covering both the incremental (OneMax) and full
//! re-evaluation (number partitioning) scoring paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lon_sampler::ils::{hill_climb, IlsConfig, IlsProblem, IlsRunner};
use lon_sampler::problems::{NumberPartitioning, OneMax};
use lon_sampler::solution::Solution;
use lon_sampler::trajectory::TrajectoryLog;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_hill_climb_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climb_onemax");

    for &n in &[32, 64, 128] {
        let problem = OneMax::new(n);
        for (label, first) in [("first", true), ("best", false)] {
            group.bench_with_input(
                BenchmarkId::new(label, n),
                &problem,
                |b, p| {
                    b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(42);
                        let mut start = Solution::rnd_bitstring(n, &mut rng);
                        p.full_eval(&mut start);
                        let optimum = hill_climb(black_box(start), p, first, &mut rng);
                        black_box(optimum)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_ils_npp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ils_npp");
    group.sample_size(10);

    for &n in &[15, 20, 25] {
        let problem = NumberPartitioning::new(n, 0.5, 1);
        let config = IlsConfig::default().with_non_improving_iters(100).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut log = TrajectoryLog::new(std::io::sink());
                    let result = IlsRunner::run(black_box(p), black_box(c), &mut log);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hill_climb_onemax, bench_ils_npp);
criterion_main!(benches);
