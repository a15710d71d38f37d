//! Iso-surface rendering
//!
//! One invocation per pixel:
//! ray generation, marching until crossing, bisection, gradient, shading.

mod bisection;
mod gradient;
mod iso_detector;
mod parallel_renderer;
mod ray_generator;
mod render_options;
mod renderer;
mod shading;

pub use bisection::{refine, BISECTION_STEPS};
pub use gradient::{estimate_gradient, DEFAULT_GRADIENT_DELTA, MIN_GRADIENT_MAGNITUDE};
pub use iso_detector::{find_crossing, IsoCrossing, MarchOutcome, DEFAULT_THRESHOLD, MAX_SAMPLES};
pub use parallel_renderer::{ParallelRenderer, Tile, DEFAULT_TILE_SIDE};
pub use ray_generator::{generate_ray, MarchRay};
pub use render_options::{DiffuseColor, RenderOptions, RenderOptionsBuilder};
pub use renderer::{entry_coordinate, Renderer, SurfaceHit};
pub use shading::{phong, DEFAULT_SPECULAR_POWER, SPECULAR_FLOOR};
