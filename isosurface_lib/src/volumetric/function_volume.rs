use nalgebra::{vector, Point3, Vector3};

use super::{volume::grid_position, Volume};

/// Volume defined by a function of normalized position.
///
/// No interpolation takes place, the function is evaluated directly.
/// Useful for synthetic data with sharp features, such as step functions.
pub struct FunctionVolume<F>
where
    F: Fn(Point3<f32>) -> f32,
{
    size: Vector3<usize>,
    function: F,
}

impl<F> FunctionVolume<F>
where
    F: Fn(Point3<f32>) -> f32,
{
    /// `size` is the nominal resolution, it determines the default step length
    pub fn new(size: Vector3<usize>, function: F) -> Self {
        Self { size, function }
    }
}

impl<F> Volume for FunctionVolume<F>
where
    F: Fn(Point3<f32>) -> f32,
{
    fn get_size(&self) -> Vector3<usize> {
        self.size
    }

    fn sample_at(&self, pos: Point3<f32>) -> f32 {
        (self.function)(pos.map(|v| v.clamp(0.0, 1.0)))
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        let pos = grid_position(vector![x, y, z], self.size);
        Some((self.function)(pos))
    }

    fn get_name(&self) -> &str {
        "FunctionVolume"
    }
}
