use nalgebra::{Point3, Vector3};

use crate::error::VolumeError;

/// Scalar field on the unit cube.
///
/// Positions are normalized, `<0;1>` on every axis.
/// Samples are densities in range `<0;1>`.
pub trait Volume {
    /// Resolution of the sampled grid
    fn get_size(&self) -> Vector3<usize>;

    /// Interpolated sample at normalized position.
    /// Positions outside the unit cube are clamped to its surface.
    fn sample_at(&self, pos: Point3<f32>) -> f32;

    /// Sample at grid point, `None` if out of range.
    /// For building and tests, mostly
    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32>;

    fn get_name(&self) -> &str;

    /// One voxel per step on every axis
    fn default_step_length(&self) -> Vector3<f32> {
        self.get_size().map(|v| 1.0 / v.max(1) as f32)
    }
}

/// Number of samples in grid of `size`, error if it overflows
pub fn sample_count(size: Vector3<usize>) -> Result<usize, VolumeError> {
    size.x
        .checked_mul(size.y)
        .and_then(|xy| xy.checked_mul(size.z))
        .ok_or(VolumeError::TooLarge {
            x: size.x,
            y: size.y,
            z: size.z,
        })
}

/// Normalized position of grid point `index` in grid of `size` points.
/// Grid points sit on the corners of cells, first and last point on the faces of the unit cube.
pub fn grid_position(index: Vector3<usize>, size: Vector3<usize>) -> Point3<f32> {
    let coords = index.zip_map(&size, |i, s| {
        if s > 1 {
            i as f32 / (s - 1) as f32
        } else {
            0.0
        }
    });
    Point3::from(coords)
}

#[cfg(test)]
mod test {
    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn counts_samples() {
        assert_eq!(sample_count(vector![3, 5, 7]).unwrap(), 105);
        assert!(matches!(
            sample_count(vector![usize::MAX, 2, 1]),
            Err(VolumeError::TooLarge { .. })
        ));
    }

    #[test]
    fn grid_corners() {
        let size = vector![3, 5, 1];
        assert_eq!(grid_position(vector![0, 0, 0], size), point![0.0, 0.0, 0.0]);
        assert_eq!(grid_position(vector![2, 4, 0], size), point![1.0, 1.0, 0.0]);
        assert_eq!(grid_position(vector![1, 1, 0], size), point![0.5, 0.25, 0.0]);
    }
}
