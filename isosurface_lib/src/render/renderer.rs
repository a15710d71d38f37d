use std::ops::Range;

use nalgebra::{Point3, Vector3};

use crate::{
    camera::PerspectiveCamera,
    color::{self, RGBA},
    common::{BoundBox, Ray},
    volumetric::{TransferFunction, Volume, VolumeSampler},
};

use super::{
    bisection::refine,
    gradient::estimate_gradient,
    iso_detector::{find_crossing, MarchOutcome},
    ray_generator::{generate_ray, MarchRay},
    render_options::{DiffuseColor, RenderOptions},
    shading::phong,
};

/// Refined surface point with its normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub position: Point3<f32>,
    /// Unit vector, or zero where the gradient is degenerate
    pub normal: Vector3<f32>,
}

/// Iso-surface renderer.
///
/// Every pixel is computed independently of the others,
/// renderer holds no state that changes while rendering.
pub struct Renderer<V>
where
    V: Volume,
{
    volume: V,
    tf: TransferFunction,
    render_options: RenderOptions,
}

impl<V> Renderer<V>
where
    V: Volume,
{
    pub fn new(volume: V, tf: TransferFunction, render_options: RenderOptions) -> Renderer<V> {
        log::info!(
            "New renderer | {} {:?} | threshold {} | max samples {}",
            volume.get_name(),
            volume.get_size(),
            render_options.threshold,
            render_options.max_samples
        );
        Renderer {
            volume,
            tf,
            render_options,
        }
    }

    pub fn set_render_options(&mut self, opts: RenderOptions) {
        self.render_options = opts;
    }

    pub fn get_render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn set_render_resolution(&mut self, res: nalgebra::Vector2<u16>) {
        self.render_options.resolution = res;
    }

    pub fn get_volume(&self) -> &V {
        &self.volume
    }

    pub fn set_tf(&mut self, tf: TransferFunction) {
        self.tf = tf;
    }

    pub fn get_tf(&self) -> &TransferFunction {
        &self.tf
    }

    /// Step length in normalized coordinates, configured or one voxel
    pub fn step_length(&self) -> Vector3<f32> {
        self.render_options
            .step_length
            .unwrap_or_else(|| self.volume.default_step_length())
    }

    fn sampler(&self) -> VolumeSampler<V> {
        VolumeSampler::new(&self.volume, &self.tf)
    }

    fn trace_ray(&self, ray: &MarchRay) -> Option<SurfaceHit> {
        let sampler = self.sampler();
        let opts = &self.render_options;

        let crossing = match find_crossing(&sampler, ray, opts.threshold, opts.max_samples) {
            MarchOutcome::Crossing(c) => c,
            MarchOutcome::Exited | MarchOutcome::Exhausted => return None,
        };

        let position = refine(
            &sampler,
            crossing.near.position,
            crossing.far.position,
            opts.threshold,
        );
        let normal = estimate_gradient(&sampler, position, opts.gradient_delta);

        Some(SurfaceHit { position, normal })
    }

    /// Find first surface along ray from camera through `entry`.
    ///
    /// # Params
    /// * `entry` - normalized entry coordinate into the volume
    /// * `camera_position` - camera in object space
    pub fn trace(&self, entry: Point3<f32>, camera_position: Point3<f32>) -> Option<SurfaceHit> {
        let ray = generate_ray(entry, camera_position, self.step_length());
        self.trace_ray(&ray)
    }

    /// Color of one invocation, transparent if no surface was hit.
    /// Light is placed at the camera.
    pub fn shade(&self, entry: Point3<f32>, camera_position: Point3<f32>) -> RGBA {
        let ray = generate_ray(entry, camera_position, self.step_length());

        let hit = match self.trace_ray(&ray) {
            Some(hit) => hit,
            None => return color::zero(),
        };

        let diffuse_color = match self.render_options.diffuse_color {
            DiffuseColor::Constant(rgb) => rgb,
            DiffuseColor::TransferFunction => self.sampler().color(hit.position).xyz(),
        };

        let to_eye = -ray.direction;
        phong(
            &to_eye,
            &hit.normal,
            &to_eye,
            self.render_options.specular_power,
            &diffuse_color,
        )
    }

    /// Color of pixel, transparent if camera ray misses the volume
    ///
    /// # Arguments
    ///
    /// * pixel_coord - Coordinates in the range of `<0;1>x<0;1>`, point \[0,0\] being upper left corner
    pub fn render_pixel(&self, camera: &PerspectiveCamera, pixel_coord: (f32, f32)) -> RGBA {
        let ray = camera.get_ray(pixel_coord);
        match entry_and_eye(&ray) {
            Some((entry, eye)) => self.shade(entry, eye),
            None => color::zero(),
        }
    }

    /// Render whole frame into `buffer`.
    ///
    /// Buffer is RGBA8, row-major, y=0 is up.
    pub fn render(&self, camera: &PerspectiveCamera, buffer: &mut [u8]) {
        let res = self.render_options.resolution;
        self.render_region(camera, 0..res.x as usize, 0..res.y as usize, buffer);
    }

    /// Render rectangle of the frame into `buffer`, rows of `x_range.len()` pixels.
    pub fn render_region(
        &self,
        camera: &PerspectiveCamera,
        x_range: Range<usize>,
        y_range: Range<usize>,
        buffer: &mut [u8],
    ) {
        let res = self.render_options.resolution;
        let step_x = 1.0 / res.x as f32;
        let step_y = 1.0 / res.y as f32;

        let coords = y_range.flat_map(|y| x_range.clone().map(move |x| (x, y)));

        for ((x, y), pixel) in coords.zip(buffer.chunks_exact_mut(4)) {
            // pixel centers
            let pixel_coord = ((x as f32 + 0.5) * step_x, (y as f32 + 0.5) * step_y);
            let ray_color = self.render_pixel(camera, pixel_coord);
            pixel.copy_from_slice(&color::to_rgba8(&ray_color));
        }
    }
}

/// Normalized coordinate where camera ray enters the volume.
/// Camera inside the volume enters at its own position.
pub fn entry_coordinate(ray: &Ray) -> Option<Point3<f32>> {
    entry_and_eye(ray).map(|(entry, _)| entry)
}

/// Entry coordinate together with the eye position the invocation marches from.
///
/// A camera inside the volume (or on its surface) coincides with the entry point,
/// so the eye is moved one unit back along the ray and the marching direction
/// stays the direction of the camera ray.
fn entry_and_eye(ray: &Ray) -> Option<(Point3<f32>, Point3<f32>)> {
    let (t0, _) = BoundBox::unit_object().intersect(ray)?;
    if t0 > 0.0 {
        Some((ray.point_from_t(t0) + Vector3::repeat(0.5), ray.origin))
    } else {
        Some((ray.origin + Vector3::repeat(0.5), ray.origin - ray.direction))
    }
}
