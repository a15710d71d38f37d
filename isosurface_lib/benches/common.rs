use criterion::{black_box, Criterion};
use nalgebra::{point, vector, Point3, Vector2};

use isosurface_lib::{
    render::{ParallelRenderer, RenderOptions, Renderer},
    test_helpers::{self, FnVolume},
    volumetric::{LinearVolume, TransferFunction, Volume},
    PerspectiveCamera,
};

pub const WIDTH: u16 = 512;
pub const HEIGHT: u16 = 512;
pub const RESOLUTION: Vector2<u16> = vector![WIDTH, HEIGHT];

/// Side of the synthetic volumes
pub const VOLUME_SIDE: usize = 128;

pub const DEFAULT_CAMERA_POSITIONS: [Point3<f32>; 4] = [
    point![1.5, 1.5, 1.5],
    point![-2.0, 0.0, 0.0],
    point![0.0, 1.0, -2.0],
    point![0.7, -1.2, 1.8],
];

pub enum Algorithm {
    Serial,
    Parallel,
}

pub enum VolumeKind {
    Analytic,
    Grid,
}

pub struct BenchOptions {
    pub render_options: RenderOptions,
    pub name: String,
    pub algorithm: Algorithm,
    pub kind: VolumeKind,
    pub camera_positions: &'static [Point3<f32>],
}

impl BenchOptions {
    pub fn new(
        render_options: RenderOptions,
        algorithm: Algorithm,
        kind: VolumeKind,
        camera_positions: &'static [Point3<f32>],
    ) -> Self {
        let alg = match algorithm {
            Algorithm::Serial => "ST",
            Algorithm::Parallel => "MT",
        };
        let vol = match kind {
            VolumeKind::Analytic => "analytic",
            VolumeKind::Grid => "grid",
        };
        let res = render_options.resolution;
        let name = format!("Render {alg} | {vol} sphere | {}x{}", res.x, res.y);
        BenchOptions {
            render_options,
            name,
            algorithm,
            kind,
            camera_positions,
        }
    }

    pub fn get_benchmark(self) -> impl FnOnce(&mut Criterion) {
        move |c: &mut Criterion| match self.kind {
            VolumeKind::Analytic => {
                let volume: FnVolume = test_helpers::sphere_volume(VOLUME_SIDE);
                self.run(c, volume)
            }
            VolumeKind::Grid => {
                let volume: LinearVolume = test_helpers::sphere_grid_volume(VOLUME_SIDE);
                self.run(c, volume)
            }
        }
    }

    fn run<V>(&self, c: &mut Criterion, volume: V)
    where
        V: Volume + Sync,
    {
        let res = self.render_options.resolution;
        let cameras: Vec<PerspectiveCamera> = self
            .camera_positions
            .iter()
            .map(|&pos| {
                let mut camera = PerspectiveCamera::looking_at_center(pos);
                camera.change_aspect_from_resolution(res.x, res.y);
                camera
            })
            .collect();

        let renderer = Renderer::new(volume, TransferFunction::identity(), self.render_options);

        match self.algorithm {
            Algorithm::Serial => {
                let mut buffer = vec![0; self.render_options.pixel_count() * 4];
                c.bench_function(&self.name, |b| {
                    b.iter(|| {
                        for camera in &cameras {
                            renderer.render(camera, black_box(&mut buffer));
                        }
                    })
                });
            }
            Algorithm::Parallel => {
                let parallel = ParallelRenderer::with_default_workers(renderer);
                c.bench_function(&self.name, |b| {
                    b.iter(|| {
                        for camera in &cameras {
                            parallel.render(black_box(camera)).unwrap();
                        }
                    })
                });
            }
        }
    }
}

/// Options shared by all benchmarks
pub fn bench_render_options() -> RenderOptions {
    RenderOptions::builder()
        .resolution(RESOLUTION)
        .threshold(0.5)
        .build_unchecked()
}
