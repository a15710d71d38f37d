use nalgebra::{Point3, Vector3};

/// Ray cast by camera, in object space.
/// Main usecase is getting the entry point into the volume ([`BoundBox::intersect`](super::BoundBox::intersect)).
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Construct new ray using `origin` and `direction`.
    /// `direction` must be unit vector.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Ray {
        Ray { origin, direction }
    }

    /// Returns point `t` units far from ray origin in ray direction
    pub fn point_from_t(&self, t: f32) -> Point3<f32> {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod test {
    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn point_along_ray() {
        let ray = Ray::new(point![1.0, 0.0, -1.0], vector![0.0, 0.0, 1.0]);
        assert_eq!(ray.point_from_t(2.5), point![1.0, 0.0, 1.5]);
    }
}
