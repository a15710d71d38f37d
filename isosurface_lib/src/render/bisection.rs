use nalgebra::{center, Point3};

use crate::volumetric::{Volume, VolumeSampler};

/// Number of halvings, surface is located to 1/16 of a step.
/// Fixed so that every ray costs the same.
pub const BISECTION_STEPS: u32 = 4;

/// Narrow bracket `[left, right]` around the threshold crossing.
///
/// `left` is expected under the threshold, `right` at or over it.
/// Returns middle of the final bracket.
pub fn refine<V>(
    sampler: &VolumeSampler<V>,
    mut left: Point3<f32>,
    mut right: Point3<f32>,
    threshold: f32,
) -> Point3<f32>
where
    V: Volume + ?Sized,
{
    for _ in 0..BISECTION_STEPS {
        let mid = center(&left, &right);
        if sampler.sample(mid) < threshold {
            left = mid;
        } else {
            right = mid;
        }
    }
    center(&left, &right)
}

#[cfg(test)]
mod test {
    use nalgebra::{point, vector};

    use super::*;
    use crate::volumetric::{FunctionVolume, TransferFunction};

    #[test]
    fn converges_on_step() {
        let vol = FunctionVolume::new(vector![64, 64, 64], |p: Point3<f32>| {
            if p.y < 0.3 {
                0.0
            } else {
                1.0
            }
        });
        let tf = TransferFunction::identity();
        let sampler = VolumeSampler::new(&vol, &tf);

        let left = point![0.5, 0.25, 0.5];
        let right = point![0.5, 0.35, 0.5];
        let surface = refine(&sampler, left, right, 0.5);

        // bracket width 0.1, four halvings
        assert!((surface.y - 0.3).abs() <= 0.1 / 16.0);
        assert_eq!(surface.x, 0.5);
    }

    #[test]
    fn zero_width_bracket() {
        let vol = FunctionVolume::new(vector![8, 8, 8], |p: Point3<f32>| p.x);
        let tf = TransferFunction::identity();
        let sampler = VolumeSampler::new(&vol, &tf);

        let p = point![0.3, 0.6, 0.1];
        assert_eq!(refine(&sampler, p, p, 0.5), p);
    }
}
