use nalgebra::{Point3, Vector3};

/// Ray marched through the volume by one invocation.
///
/// `origin` is the entry coordinate, normalized.
/// `step` is the constant offset between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchRay {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
    pub step: Vector3<f32>,
}

/// Ray from camera through entry coordinate.
///
/// # Params
/// * `entry` - entry coordinate in normalized volume space `<0;1>^3`
/// * `camera_position` - camera in object space, where the volume spans `<-0.5;0.5>^3`
/// * `step_length` - length of step on each axis, usually inverse of volume resolution
pub fn generate_ray(
    entry: Point3<f32>,
    camera_position: Point3<f32>,
    step_length: Vector3<f32>,
) -> MarchRay {
    let entry_object = entry - Vector3::repeat(0.5);
    let direction = (entry_object - camera_position).normalize();
    let step = direction.component_mul(&step_length);
    MarchRay {
        origin: entry,
        direction,
        step,
    }
}

#[cfg(test)]
mod test {
    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn axis_aligned() {
        let ray = generate_ray(
            point![0.0, 0.5, 0.5],
            point![-2.0, 0.0, 0.0],
            vector![0.01, 0.01, 0.01],
        );
        assert_eq!(ray.origin, point![0.0, 0.5, 0.5]);
        assert_eq!(ray.direction, vector![1.0, 0.0, 0.0]);
        assert_eq!(ray.step, vector![0.01, 0.0, 0.0]);
    }

    #[test]
    fn anisotropic_step() {
        let ray = generate_ray(
            point![1.0, 1.0, 1.0],
            point![1.5, 1.5, 1.5],
            vector![0.1, 0.2, 0.4],
        );
        let d = -1.0 / 3.0_f32.sqrt();
        assert!((ray.direction - vector![d, d, d]).norm() < 1e-6);
        assert!((ray.step - vector![0.1 * d, 0.2 * d, 0.4 * d]).norm() < 1e-6);
    }
}
