//! Module with helper functions
//! Saves repetition in unit tests, integration tests and benchmarks

use nalgebra::{point, vector, Point3, Vector3};

use crate::{
    render::{RenderOptions, Renderer},
    volumetric::{
        BuildVolume, DataSource, FunctionVolume, LinearVolume, TransferFunction, VolumeMetadata,
    },
};

/// Volume defined by a plain function
pub type FnVolume = FunctionVolume<fn(Point3<f32>) -> f32>;

pub const SPHERE_CENTER: Point3<f32> = point![0.5, 0.5, 0.5];
pub const SPHERE_RADIUS: f32 = 0.3;

/// 1 inside sphere of radius 0.3 around the center of the volume, 0 outside
pub fn sphere_density(pos: Point3<f32>) -> f32 {
    if (pos - SPHERE_CENTER).norm() <= SPHERE_RADIUS {
        1.0
    } else {
        0.0
    }
}

/// 0 for x < 0.5, 1 otherwise
pub fn step_density(pos: Point3<f32>) -> f32 {
    if pos.x < 0.5 {
        0.0
    } else {
        1.0
    }
}

/// Density equal to x coordinate
pub fn ramp_density(pos: Point3<f32>) -> f32 {
    pos.x
}

pub fn sphere_volume(side: usize) -> FnVolume {
    FunctionVolume::new(vector![side, side, side], sphere_density as fn(_) -> _)
}

pub fn step_volume(side: usize) -> FnVolume {
    FunctionVolume::new(vector![side, side, side], step_density as fn(_) -> _)
}

pub fn ramp_volume(side: usize) -> FnVolume {
    FunctionVolume::new(vector![side, side, side], ramp_density as fn(_) -> _)
}

/// Sphere sampled on a grid, interpolated in between
pub fn sphere_grid_volume(side: usize) -> LinearVolume {
    LinearVolume::from_fn(vector![side, side, side], sphere_density).unwrap()
}

/// Options with iso value 0.5 and square resolution
pub fn render_options(side: u16) -> RenderOptions {
    RenderOptions::builder()
        .resolution(vector![side, side])
        .threshold(0.5)
        .build()
        .unwrap()
}

/// Renderer of analytic sphere with identity transfer function
pub fn sphere_renderer(opts: RenderOptions) -> Renderer<FnVolume> {
    Renderer::new(sphere_volume(64), TransferFunction::identity(), opts)
}

pub fn white_vol_meta() -> VolumeMetadata {
    let data = vec![0, 32, 64, 64 + 32, 128, 128 + 32, 128 + 64, 255];
    VolumeMetadata {
        size: vector![2, 2, 2],
        cell_shape: vector![1.0, 1.0, 1.0],
        data: DataSource::from_vec(data),
        data_offset: 0,
    }
}

pub fn empty_vol_meta(size: Vector3<usize>) -> VolumeMetadata {
    let data = vec![0; size.x * size.y * size.z];
    VolumeMetadata {
        size,
        cell_shape: vector![1.0, 1.0, 1.0],
        data: DataSource::from_vec(data),
        data_offset: 0,
    }
}

pub fn white_volume<V>() -> V
where
    V: BuildVolume,
{
    let meta = white_vol_meta();
    BuildVolume::build(meta).unwrap()
}

pub fn empty_volume<V>(size: Vector3<usize>) -> V
where
    V: BuildVolume,
{
    let meta = empty_vol_meta(size);
    BuildVolume::build(meta).unwrap()
}
