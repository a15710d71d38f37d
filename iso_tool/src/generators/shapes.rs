use nalgebra::{vector, Vector3};

use super::{normalized_position, SampleGenerator};

/// Ball centered in the volume
pub struct SphereGenerator {
    dims: Vector3<u32>,
    /// Radius relative to volume side
    radius: f32,
    sample: u8,
}

impl SphereGenerator {
    pub fn new(dims: Vector3<u32>, radius: f32, sample: u8) -> SphereGenerator {
        SphereGenerator {
            dims,
            radius,
            sample,
        }
    }
}

impl SampleGenerator for SphereGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u8 {
        let pos = normalized_position(coords, self.dims);
        let center = vector![0.5, 0.5, 0.5];
        if (pos - center).norm() <= self.radius {
            self.sample
        } else {
            0
        }
    }
}

/// Empty for `x < 0.5`, filled from there on
pub struct StepGenerator {
    dims: Vector3<u32>,
    sample: u8,
}

impl StepGenerator {
    pub fn new(dims: Vector3<u32>, sample: u8) -> StepGenerator {
        StepGenerator { dims, sample }
    }
}

impl SampleGenerator for StepGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u8 {
        let pos = normalized_position(coords, self.dims);
        if pos.x < 0.5 {
            0
        } else {
            self.sample
        }
    }
}

/// Density equal to x coordinate, 0 to 255
pub struct RampGenerator {
    dims: Vector3<u32>,
}

impl RampGenerator {
    pub fn new(dims: Vector3<u32>) -> RampGenerator {
        RampGenerator { dims }
    }
}

impl SampleGenerator for RampGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u8 {
        let pos = normalized_position(coords, self.dims);
        (pos.x * u8::MAX as f32).round() as u8
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sphere_center_and_corner() {
        let gen = SphereGenerator::new(vector![9, 9, 9], 0.3, 200);
        assert_eq!(gen.sample_at(vector![4, 4, 4]), 200);
        assert_eq!(gen.sample_at(vector![0, 0, 0]), 0);
        // 0.25 from center
        assert_eq!(gen.sample_at(vector![2, 4, 4]), 200);
    }

    #[test]
    fn step_halves() {
        let gen = StepGenerator::new(vector![10, 2, 2], 9);
        assert_eq!(gen.sample_at(vector![4, 0, 0]), 0);
        assert_eq!(gen.sample_at(vector![5, 1, 1]), 9);
    }

    #[test]
    fn ramp_ends() {
        let gen = RampGenerator::new(vector![6, 3, 3]);
        assert_eq!(gen.sample_at(vector![0, 2, 1]), 0);
        assert_eq!(gen.sample_at(vector![5, 0, 0]), 255);
        assert_eq!(gen.sample_at(vector![1, 0, 0]), 51);
    }
}
