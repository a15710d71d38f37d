use nalgebra::Vector3;

use super::SampleGenerator;

/// Border of empty samples around the solid
const PAD: u32 = 5;

/// Generate solid volume
/// All sample values are the same, except for empty border
pub struct SolidGenerator {
    /// The sample value
    sample: u8,
    pad: u32,
    dims: Vector3<u32>,
}

impl SolidGenerator {
    pub fn new(dims: Vector3<u32>, sample: u8) -> SolidGenerator {
        // Thin volumes get no border
        let pad = if dims.iter().all(|&d| d > 2 * PAD) {
            PAD
        } else {
            0
        };
        SolidGenerator { sample, pad, dims }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u8 {
        let pad_end = self.dims.map(|d| d - self.pad);
        let inside = coords
            .iter()
            .zip(pad_end.iter())
            .all(|(&c, &end)| c >= self.pad && c < end);
        if inside {
            self.sample
        } else {
            0
        }
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn border_is_empty() {
        let gen = SolidGenerator::new(vector![20, 20, 20], 100);
        assert_eq!(gen.sample_at(vector![0, 10, 10]), 0);
        assert_eq!(gen.sample_at(vector![15, 10, 10]), 0);
        assert_eq!(gen.sample_at(vector![5, 14, 10]), 100);
    }

    #[test]
    fn thin_volume_is_full() {
        let gen = SolidGenerator::new(vector![4, 20, 20], 3);
        assert_eq!(gen.sample_at(vector![0, 0, 0]), 3);
    }
}
