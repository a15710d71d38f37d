use nalgebra::{vector, Vector3, Vector4};

/// Color with all channels in range `<0;1>`
pub type RGBA = Vector4<f32>;

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

/// Fully transparent black, result of a ray that hit nothing
pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn mono(v: f32, opacity: f32) -> RGBA {
    vector![v, v, v, opacity]
}

/// Opaque color from RGB components
pub fn opaque(rgb: Vector3<f32>) -> RGBA {
    vector![rgb.x, rgb.y, rgb.z, 1.0]
}

/// Convert to 8 bit channels.
/// Channels are clamped to `<0;1>` first, so overexposed highlights saturate.
pub fn to_rgba8(color: &RGBA) -> [u8; 4] {
    let c = color.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
    [c.x, c.y, c.z, c.w]
}
