use nalgebra::{vector, Point3, Vector3};

use crate::error::VolumeError;

use super::{
    vol_builder::{BuildVolume, VolumeMetadata},
    volume::{grid_position, sample_count},
    Volume,
};

/// Volume with samples stored in one continuous buffer.
/// Z axis is the fastest growing one.
pub struct LinearVolume {
    size: Vector3<usize>,
    cell_shape: Vector3<f32>,
    data: Vec<f32>,
}

impl std::fmt::Debug for LinearVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Volume")
            .field("size", &self.size)
            .field("cell_shape", &self.cell_shape)
            .field("data len ", &self.data.len())
            .finish()
    }
}

impl LinearVolume {
    /// Construct volume from normalized samples
    pub fn new(size: Vector3<usize>, data: Vec<f32>) -> Result<LinearVolume, VolumeError> {
        if size.iter().any(|&v| v == 0) {
            return Err(VolumeError::ZeroDimension {
                x: size.x,
                y: size.y,
                z: size.z,
            });
        }

        let expected = sample_count(size)?;
        if data.len() != expected {
            return Err(VolumeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(LinearVolume {
            size,
            cell_shape: vector![1.0, 1.0, 1.0],
            data,
        })
    }

    /// Sample function `f` on every grid point
    pub fn from_fn<F>(size: Vector3<usize>, f: F) -> Result<LinearVolume, VolumeError>
    where
        F: Fn(Point3<f32>) -> f32,
    {
        let mut data = Vec::with_capacity(sample_count(size)?);
        for x in 0..size.x {
            for y in 0..size.y {
                for z in 0..size.z {
                    data.push(f(grid_position(vector![x, y, z], size)));
                }
            }
        }
        LinearVolume::new(size, data)
    }

    /// Shape of cells, as read from the volume header
    pub fn get_cell_shape(&self) -> Vector3<f32> {
        self.cell_shape
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        z + y * self.size.z + x * self.size.y * self.size.z
    }
}

impl Volume for LinearVolume {
    fn sample_at(&self, pos: Point3<f32>) -> f32 {
        let max_index = self.size.map(|v| (v - 1) as f32);
        let coord = pos
            .coords
            .component_mul(&max_index)
            .zip_map(&max_index, |c, m| c.clamp(0.0, m));

        let x = coord.x as usize;
        let y = coord.y as usize;
        let z = coord.z as usize;

        let x_t = coord.x.fract();
        let y_t = coord.y.fract();
        let z_t = coord.z.fract();

        // Clamp to edge
        let x1 = usize::min(x + 1, self.size.x - 1);
        let y1 = usize::min(y + 1, self.size.y - 1);
        let z1 = usize::min(z + 1, self.size.z - 1);

        let d = |x, y, z| self.data[self.get_3d_index(x, y, z)];

        // first plane
        // c000, c001, c010, c011
        let mut x_low_vec = vector![d(x, y, z), d(x, y, z1), d(x, y1, z), d(x, y1, z1)];

        // second plane
        // c100, c101, c110, c111
        let mut x_hi_vec = vector![d(x1, y, z), d(x1, y, z1), d(x1, y1, z), d(x1, y1, z1)];

        x_low_vec *= 1.0 - x_t;
        x_hi_vec *= x_t;

        // x plane
        x_low_vec += x_hi_vec;
        let inv_y_t = 1.0 - y_t;
        x_low_vec.component_mul_assign(&vector![inv_y_t, inv_y_t, y_t, y_t]);

        // z line
        let c0: f32 = x_low_vec.x + x_low_vec.z;
        let c1: f32 = x_low_vec.y + x_low_vec.w;

        c0 * (1.0 - z_t) + c1 * z_t
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.size.x || y >= self.size.y || z >= self.size.z {
            return None;
        }
        self.data.get(self.get_3d_index(x, y, z)).copied()
    }

    fn get_size(&self) -> Vector3<usize> {
        self.size
    }

    fn get_name(&self) -> &str {
        "LinearVolume"
    }
}

impl BuildVolume for LinearVolume {
    fn build(metadata: VolumeMetadata) -> Result<LinearVolume, VolumeError> {
        let slice = metadata.data.get_slice();
        let samples = slice.get(metadata.data_offset..).unwrap_or(&[]);

        let size = metadata.size;
        let data: Vec<f32> = samples
            .iter()
            .take(sample_count(size)?)
            .map(|&val| f32::from(val) / 255.0)
            .collect();

        let mut volume = LinearVolume::new(size, data)?;
        volume.cell_shape = metadata.cell_shape;

        log::info!(
            "New linear volume, size {:?} cell shape {:?}",
            volume.size,
            volume.cell_shape
        );

        Ok(volume)
    }
}
