use nalgebra::{vector, Vector3};

/// Grid coordinates in file order, z grows fastest
pub fn linear_coords(dims: Vector3<u32>) -> impl Iterator<Item = Vector3<u32>> {
    (0..dims.x).flat_map(move |x| {
        (0..dims.y).flat_map(move |y| (0..dims.z).map(move |z| vector![x, y, z]))
    })
}

/// Number of coordinates [`linear_coords`] yields, saturating
pub fn coord_count(dims: Vector3<u32>) -> u64 {
    dims.iter()
        .map(|&d| u64::from(d))
        .fold(1, u64::saturating_mul)
}
