use crate::common::{bench_render_options, Algorithm, BenchOptions, VolumeKind, DEFAULT_CAMERA_POSITIONS};
use criterion::Criterion;

pub fn render_parallel_analytic(c: &mut Criterion) {
    let bench_options = BenchOptions::new(
        bench_render_options(),
        Algorithm::Parallel,
        VolumeKind::Analytic,
        &DEFAULT_CAMERA_POSITIONS,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_parallel_grid(c: &mut Criterion) {
    let bench_options = BenchOptions::new(
        bench_render_options(),
        Algorithm::Parallel,
        VolumeKind::Grid,
        &DEFAULT_CAMERA_POSITIONS,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}
