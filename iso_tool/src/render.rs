//! Render volume into PNG image

use std::error::Error;

use isosurface_lib::{
    premade::transfer_functions::{by_name, step_tf},
    render::{ParallelRenderer, RenderOptions, Renderer, DEFAULT_TILE_SIDE},
    volumetric::{from_file, BuildVolume, DataSource, LinearVolume, TransferFunction, VolumeMetadata},
    PerspectiveCamera,
};
use nalgebra::vector;

use crate::{
    config::{RenderConfig, VolumeSource},
    generators::{generate_samples, get_sample_generator},
};

pub fn load_volume(source: &VolumeSource) -> Result<LinearVolume, Box<dyn Error>> {
    let volume = match source {
        VolumeSource::File(path) => {
            log::info!("Loading volume {:?}", path);
            from_file(path)?
        }
        VolumeSource::Synthetic { generator, dims } => {
            log::info!("Generating {:?} volume in memory", generator);
            let sg = get_sample_generator(*generator, *dims);
            let meta = VolumeMetadata {
                size: dims.cast::<usize>(),
                cell_shape: vector![1.0, 1.0, 1.0],
                data: DataSource::from_vec(generate_samples(sg.as_ref(), *dims)),
                data_offset: 0,
            };
            LinearVolume::build(meta)?
        }
    };
    Ok(volume)
}

pub fn get_transfer_function(name: &str, threshold: f32) -> Result<TransferFunction, Box<dyn Error>> {
    if name == "step" {
        return Ok(step_tf(threshold)?);
    }
    match by_name(name) {
        Some(tf) => Ok(TransferFunction::from_tf(tf)),
        None => Err(format!("Unknown transfer function {name}").into()),
    }
}

/// Render frame, RGBA8 buffer
pub fn render_frame(cfg: &RenderConfig) -> Result<Vec<u8>, Box<dyn Error>> {
    let volume = load_volume(&cfg.source)?;
    let tf = get_transfer_function(&cfg.tf_name, cfg.threshold)?;

    let render_options = RenderOptions::builder()
        .resolution(cfg.resolution)
        .threshold(cfg.threshold)
        .build()?;

    let mut camera = PerspectiveCamera::looking_at_center(cfg.camera);
    camera.change_aspect_from_resolution(cfg.resolution.x, cfg.resolution.y);

    let renderer = Renderer::new(volume, tf, render_options);
    let parallel = match cfg.threads {
        Some(threads) => ParallelRenderer::new(renderer, threads, DEFAULT_TILE_SIDE)?,
        None => ParallelRenderer::with_default_workers(renderer),
    };

    log::info!(
        "Rendering {}x{} with {} threads",
        cfg.resolution.x,
        cfg.resolution.y,
        parallel.worker_count()
    );
    parallel.render(&camera)?;

    let buffer = parallel.get_shared_buffer();
    let frame = buffer.lock().clone();
    Ok(frame)
}

pub fn render_to_file(cfg: &RenderConfig) -> Result<(), Box<dyn Error>> {
    let frame = render_frame(cfg)?;

    image::save_buffer(
        &cfg.file_name,
        &frame,
        cfg.resolution.x as u32,
        cfg.resolution.y as u32,
        image::ColorType::Rgba8,
    )?;

    log::info!("Image saved to {:?}", cfg.file_name);
    Ok(())
}

#[cfg(test)]
mod test {
    use nalgebra::point;

    use super::*;
    use crate::config::GeneratorConfig;

    fn sphere_config() -> RenderConfig {
        RenderConfig {
            source: VolumeSource::Synthetic {
                generator: GeneratorConfig::Sphere {
                    sample: 255,
                    radius: 0.3,
                },
                dims: vector![32, 32, 32],
            },
            tf_name: "identity".into(),
            resolution: vector![24, 16],
            camera: point![0.0, 0.0, 2.0],
            threshold: 0.5,
            threads: Some(2),
            file_name: "unused.png".into(),
        }
    }

    #[test]
    fn sphere_frame() {
        let frame = render_frame(&sphere_config()).unwrap();
        assert_eq!(frame.len(), 24 * 16 * 4);

        // center pixel hits, corner misses
        let center = (8 * 24 + 12) * 4;
        assert_eq!(frame[center + 3], 255);
        assert_eq!(&frame[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn transfer_function_names() {
        assert!(get_transfer_function("skull", 0.5).is_ok());
        assert!(get_transfer_function("step", 0.5).is_ok());
        assert!(get_transfer_function("nope", 0.5).is_err());
    }

    #[test]
    fn missing_volume_file() {
        let source = VolumeSource::File("/no/such/file.vol".into());
        assert!(load_volume(&source).is_err());
    }
}
