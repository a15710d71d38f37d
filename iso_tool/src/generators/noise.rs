use nalgebra::Vector3;

use super::SampleGenerator;

/// Uniformly random samples
pub struct NoiseGenerator {
    rng: fastrand::Rng,
}

impl NoiseGenerator {
    pub fn new(seed: Option<u64>) -> NoiseGenerator {
        let rng = fastrand::Rng::new();
        if let Some(seed) = seed {
            rng.seed(seed);
        }
        NoiseGenerator { rng }
    }
}

impl SampleGenerator for NoiseGenerator {
    fn sample_at(&self, _coords: Vector3<u32>) -> u8 {
        self.rng.u8(..)
    }
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;
    use crate::generators::generate_samples;

    #[test]
    fn seed_repeats() {
        let a = generate_samples(&NoiseGenerator::new(Some(7)), vector![4, 4, 4]);
        let b = generate_samples(&NoiseGenerator::new(Some(7)), vector![4, 4, 4]);
        assert_eq!(a, b);
        assert!(a.iter().any(|&s| s != a[0]));
    }
}
