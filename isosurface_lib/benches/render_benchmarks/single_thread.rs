use crate::common::{bench_render_options, Algorithm, BenchOptions, VolumeKind, DEFAULT_CAMERA_POSITIONS};
use criterion::Criterion;

pub fn render_analytic(c: &mut Criterion) {
    let bench_options = BenchOptions::new(
        bench_render_options(),
        Algorithm::Serial,
        VolumeKind::Analytic,
        &DEFAULT_CAMERA_POSITIONS,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}

pub fn render_grid(c: &mut Criterion) {
    let bench_options = BenchOptions::new(
        bench_render_options(),
        Algorithm::Serial,
        VolumeKind::Grid,
        &DEFAULT_CAMERA_POSITIONS,
    );

    let benchmark = bench_options.get_benchmark();

    benchmark(c);
}
