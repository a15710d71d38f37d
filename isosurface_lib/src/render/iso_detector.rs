use crate::volumetric::{is_inside, SamplePoint, Volume, VolumeSampler};

use super::ray_generator::MarchRay;

/// Upper bound of steps taken along one ray
pub const MAX_SAMPLES: u32 = 1000;

/// Iso value of the rendered surface
pub const DEFAULT_THRESHOLD: f32 = 40.0 / 255.0;

/// Two consecutive samples enclosing the surface.
/// `near.value < threshold <= far.value`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoCrossing {
    pub near: SamplePoint,
    pub far: SamplePoint,
}

/// How marching of a ray ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarchOutcome {
    /// Ray left the volume
    Exited,
    /// Step budget ran out
    Exhausted,
    /// Ascending crossing of the threshold
    Crossing(IsoCrossing),
}

/// March along `ray` until the driving value rises over `threshold`.
///
/// The entry coordinate itself is never sampled, first sample is one step further.
/// Each iteration looks one step ahead, descending crossings are ignored.
pub fn find_crossing<V>(
    sampler: &VolumeSampler<V>,
    ray: &MarchRay,
    threshold: f32,
    max_samples: u32,
) -> MarchOutcome
where
    V: Volume + ?Sized,
{
    let mut pos = ray.origin;

    for _ in 0..max_samples {
        pos += ray.step;

        if !is_inside(&pos) {
            return MarchOutcome::Exited;
        }

        let near = sampler.sample_point(pos);
        let far = sampler.sample_point(pos + ray.step);

        if near.value < threshold && far.value >= threshold {
            return MarchOutcome::Crossing(IsoCrossing { near, far });
        }
    }

    MarchOutcome::Exhausted
}

#[cfg(test)]
mod test {
    use nalgebra::{point, vector, Point3};

    use super::*;
    use crate::{
        render::ray_generator::generate_ray,
        volumetric::{FunctionVolume, TransferFunction},
    };

    fn step_x(p: Point3<f32>) -> f32 {
        if p.x < 0.5 {
            0.0
        } else {
            1.0
        }
    }

    #[test]
    fn brackets_step() {
        let vol = FunctionVolume::new(vector![64, 64, 64], step_x);
        let tf = TransferFunction::identity();
        let sampler = VolumeSampler::new(&vol, &tf);
        let ray = generate_ray(
            point![0.0, 0.5, 0.5],
            point![-2.0, 0.0, 0.0],
            vol.default_step_length(),
        );

        let outcome = find_crossing(&sampler, &ray, DEFAULT_THRESHOLD, MAX_SAMPLES);
        let crossing = match outcome {
            MarchOutcome::Crossing(c) => c,
            other => panic!("expected crossing, got {other:?}"),
        };
        assert!(crossing.near.position.x < 0.5);
        assert!(crossing.far.position.x >= 0.5);
        assert!(crossing.near.value < DEFAULT_THRESHOLD);
        assert!(crossing.far.value >= DEFAULT_THRESHOLD);
    }

    #[test]
    fn descending_ignored() {
        let vol = FunctionVolume::new(vector![64, 64, 64], |p: Point3<f32>| 1.0 - step_x(p));
        let tf = TransferFunction::identity();
        let sampler = VolumeSampler::new(&vol, &tf);
        let ray = generate_ray(
            point![0.0, 0.5, 0.5],
            point![-2.0, 0.0, 0.0],
            vol.default_step_length(),
        );

        let outcome = find_crossing(&sampler, &ray, DEFAULT_THRESHOLD, MAX_SAMPLES);
        assert_eq!(outcome, MarchOutcome::Exited);
    }

    #[test]
    fn budget_exhausted() {
        let vol = FunctionVolume::new(vector![64, 64, 64], step_x);
        let tf = TransferFunction::identity();
        let sampler = VolumeSampler::new(&vol, &tf);
        let ray = generate_ray(
            point![0.0, 0.5, 0.5],
            point![-2.0, 0.0, 0.0],
            vector![1e-4, 1e-4, 1e-4],
        );

        let outcome = find_crossing(&sampler, &ray, DEFAULT_THRESHOLD, MAX_SAMPLES);
        assert_eq!(outcome, MarchOutcome::Exhausted);
    }

    #[test]
    fn entry_outside() {
        let vol = FunctionVolume::new(vector![64, 64, 64], |_| 1.0);
        let tf = TransferFunction::identity();
        let sampler = VolumeSampler::new(&vol, &tf);
        let ray = generate_ray(
            point![2.0, 2.0, 2.0],
            point![3.0, 3.0, 3.0],
            vol.default_step_length(),
        );

        let outcome = find_crossing(&sampler, &ray, DEFAULT_THRESHOLD, MAX_SAMPLES);
        assert_eq!(outcome, MarchOutcome::Exited);
    }
}
