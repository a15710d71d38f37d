use nalgebra::Vector3;

use crate::color::{self, RGBA};

/// Lower bound of the specular cosine, keeps `powf` away from zero and negative bases
pub const SPECULAR_FLOOR: f32 = 1e-5;

/// Default exponent of the specular highlight
pub const DEFAULT_SPECULAR_POWER: f32 = 32.0;

/// Blinn-Phong lighting with a white highlight.
///
/// # Params
/// * `light` - direction towards light, unit vector
/// * `normal` - surface normal, unit vector or zero
/// * `view` - direction towards viewer, unit vector
///
/// Result is opaque, color channels may exceed 1.
pub fn phong(
    light: &Vector3<f32>,
    normal: &Vector3<f32>,
    view: &Vector3<f32>,
    specular_power: f32,
    diffuse_color: &Vector3<f32>,
) -> RGBA {
    let diffuse = f32::max(light.dot(normal), 0.0);

    // Opposite light and view, fall back to light
    let half = (light + view)
        .try_normalize(f32::EPSILON)
        .unwrap_or(*light);
    let specular = f32::max(SPECULAR_FLOOR, half.dot(normal)).powf(specular_power);

    let rgb = diffuse_color * diffuse + Vector3::repeat(specular);
    color::opaque(rgb)
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn head_light_facing() {
        let l = vector![0.0, 0.0, 1.0];
        let c = phong(&l, &l, &l, 32.0, &vector![0.5, 0.25, 0.0]);
        assert!((c - color::new(1.5, 1.25, 1.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn grazing_incidence() {
        let l = vector![0.0, 0.0, 1.0];
        let n = vector![1.0, 0.0, 0.0];
        let c = phong(&l, &n, &l, 32.0, &vector![1.0, 1.0, 1.0]);

        // no diffuse light, specular floored
        let specular = SPECULAR_FLOOR.powf(32.0);
        assert!(c.x.is_finite());
        assert!(c.x >= 0.0);
        assert_eq!(c.x, specular);
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn facing_away() {
        let l = vector![0.0, 0.0, 1.0];
        let n = vector![0.0, 0.0, -1.0];
        let c = phong(&l, &n, &l, 2.0, &vector![1.0, 1.0, 1.0]);
        assert!(c.xyz().iter().all(|&v| v.is_finite() && v >= 0.0 && v < 1e-9));
    }

    #[test]
    fn zero_normal() {
        let l = vector![0.0, 1.0, 0.0];
        let c = phong(&l, &Vector3::zeros(), &l, 8.0, &vector![1.0, 1.0, 1.0]);
        assert!(c.xyz().iter().all(|&v| v.is_finite() && v < 1e-30));
        assert_eq!(c.w, 1.0);
    }

    #[test]
    fn opposite_light_and_view() {
        let l = vector![0.0, 1.0, 0.0];
        let c = phong(&l, &l, &-l, 8.0, &vector![0.0, 0.0, 0.0]);
        assert!((c.x - 1.0).abs() < 1e-6);
    }
}
