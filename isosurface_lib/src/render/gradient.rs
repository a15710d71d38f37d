use nalgebra::{vector, Point3, Vector3};

use crate::volumetric::{Volume, VolumeSampler};

/// Offset of central difference samples
pub const DEFAULT_GRADIENT_DELTA: f32 = 0.01;

/// Gradients with smaller magnitude are considered degenerate
pub const MIN_GRADIENT_MAGNITUDE: f32 = 1e-6;

/// Normalized gradient of the driving value, pointing from high to low values.
///
/// On an iso-surface of an ascending crossing this is the outward normal.
/// Degenerate gradient (flat neighbourhood) yields a zero vector,
/// which turns off diffuse lighting of that point.
pub fn estimate_gradient<V>(sampler: &VolumeSampler<V>, pos: Point3<f32>, delta: f32) -> Vector3<f32>
where
    V: Volume + ?Sized,
{
    let dx = vector![delta, 0.0, 0.0];
    let dy = vector![0.0, delta, 0.0];
    let dz = vector![0.0, 0.0, delta];

    let minus = vector![
        sampler.sample(pos - dx),
        sampler.sample(pos - dy),
        sampler.sample(pos - dz)
    ];
    let plus = vector![
        sampler.sample(pos + dx),
        sampler.sample(pos + dy),
        sampler.sample(pos + dz)
    ];

    let gradient = (minus - plus) / 2.0;
    gradient
        .try_normalize(MIN_GRADIENT_MAGNITUDE)
        .unwrap_or_else(Vector3::zeros)
}
