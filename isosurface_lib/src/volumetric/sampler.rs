use nalgebra::Point3;

use crate::color::RGBA;

use super::{TransferFunction, Volume};

/// Position along a ray together with the driving value sampled there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub position: Point3<f32>,
    pub value: f32,
}

/// Volume seen through a transfer function.
///
/// The driving value of a position is the opacity the transfer function
/// assigns to the density sampled there.
pub struct VolumeSampler<'a, V>
where
    V: Volume + ?Sized,
{
    volume: &'a V,
    tf: &'a TransferFunction,
}

// Manual impls, derive would require `V: Clone`
impl<V> Clone for VolumeSampler<'_, V>
where
    V: Volume + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for VolumeSampler<'_, V> where V: Volume + ?Sized {}

impl<'a, V> VolumeSampler<'a, V>
where
    V: Volume + ?Sized,
{
    pub fn new(volume: &'a V, tf: &'a TransferFunction) -> Self {
        Self { volume, tf }
    }

    /// Driving value at `pos`
    pub fn sample(&self, pos: Point3<f32>) -> f32 {
        let density = self.volume.sample_at(pos);
        self.tf.opacity(density)
    }

    pub fn sample_point(&self, position: Point3<f32>) -> SamplePoint {
        SamplePoint {
            position,
            value: self.sample(position),
        }
    }

    /// Full transfer function color at `pos`
    pub fn color(&self, pos: Point3<f32>) -> RGBA {
        let density = self.volume.sample_at(pos);
        self.tf.lookup(density)
    }
}

/// Sign as `-1`, `0` or `1`; zero and NaN map to 0.
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Position lies inside the unit cube.
///
/// Per axis, `sign(p)` and `sign(1 - p)` are multiplied and the products summed.
/// Only a sum of 3 means inside, so a coordinate lying exactly on a face
/// (sign 0) counts as outside.
pub fn is_inside(pos: &Point3<f32>) -> bool {
    let lower = pos.coords.map(sign);
    let upper = pos.coords.map(|v| sign(1.0 - v));
    lower.dot(&upper) >= 3.0
}
