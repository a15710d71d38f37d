use std::{
    error::Error,
    io::{BufWriter, Write},
};

use indicatif::ProgressBar;
use nalgebra::Vector3;

use crate::{
    config::{GenerateConfig, GeneratorConfig},
    file::open_create_file,
    header::generate_header,
    orders::{coord_count, linear_coords},
};

mod noise;
mod shapes;
mod solid;

pub use noise::NoiseGenerator;
pub use shapes::{RampGenerator, SphereGenerator, StepGenerator};
pub use solid::SolidGenerator;

// Generates one sample at a time, at any location
pub trait SampleGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u8;
}

pub fn get_sample_generator(
    generator: GeneratorConfig,
    dims: Vector3<u32>,
) -> Box<dyn SampleGenerator> {
    match generator {
        GeneratorConfig::Sphere { sample, radius } => {
            Box::new(SphereGenerator::new(dims, radius, sample))
        }
        GeneratorConfig::Step { sample } => Box::new(StepGenerator::new(dims, sample)),
        GeneratorConfig::Ramp => Box::new(RampGenerator::new(dims)),
        GeneratorConfig::Solid { sample } => Box::new(SolidGenerator::new(dims, sample)),
        GeneratorConfig::Noise { seed } => Box::new(NoiseGenerator::new(seed)),
    }
}

/// Position of grid point in `<0;1>^3`, first and last sample lie on the faces
pub fn normalized_position(coords: Vector3<u32>, dims: Vector3<u32>) -> Vector3<f32> {
    coords
        .cast::<f32>()
        .zip_map(&dims, |c, d| c / (d.max(2) - 1) as f32)
}

/// Samples of whole volume in file order
pub fn generate_samples(sg: &dyn SampleGenerator, dims: Vector3<u32>) -> Vec<u8> {
    linear_coords(dims)
        .map(|coords| sg.sample_at(coords))
        .collect()
}

pub fn generate_vol(config: &GenerateConfig) -> Result<(), Box<dyn Error>> {
    let sg = get_sample_generator(config.generator, config.dims);
    let total = coord_count(config.dims);

    log::info!(
        "Generating {:?} volume {}x{}x{} ({} samples)",
        config.generator,
        config.dims.x,
        config.dims.y,
        config.dims.z,
        total
    );

    let file = open_create_file(&config.file_name)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&generate_header(config.dims, config.cell_shape))?;

    // Progress is counted in z lines
    let line = u64::from(config.dims.z.max(1));
    let progress = ProgressBar::new(total / line);
    for coords in linear_coords(config.dims) {
        writer.write_all(&[sg.sample_at(coords)])?;
        if coords.z + 1 == config.dims.z {
            progress.inc(1);
        }
    }
    writer.flush()?;
    progress.finish_and_clear();

    log::info!("Generating finished, result in {:?}", config.file_name);
    Ok(())
}
