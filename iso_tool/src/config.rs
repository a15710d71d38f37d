use std::{ffi::OsString, path::PathBuf, str::FromStr};

use clap::ArgMatches;
use nalgebra::{vector, Point3, Vector2, Vector3};

/// Transform `Values` into `Vector`
fn values_to_vector<T, const N: usize>(args: &ArgMatches, key: &str) -> Result<[T; N], String>
where
    T: FromStr + Copy + Default,
{
    let vals = args
        .values_of(key)
        .ok_or_else(|| format!("Missing argument {key}"))?;

    let mut out = [T::default(); N];
    let mut count = 0;
    for (slot, val) in out.iter_mut().zip(vals) {
        *slot = val
            .parse::<T>()
            .map_err(|_| format!("Cannot parse {key} value {val}"))?;
        count += 1;
    }
    if count != N {
        return Err(format!("Argument {key} requires {N} values"));
    }
    Ok(out)
}

fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Result<Vector3<T>, String>
where
    T: FromStr + Copy + Default + nalgebra::Scalar,
{
    let [x, y, z] = values_to_vector::<T, 3>(args, key)?;
    Ok(vector![x, y, z])
}

fn value_of<T>(args: &ArgMatches, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    args.value_of(key)
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| format!("Cannot parse {key} value {s}"))
        })
        .transpose()
}

fn required_value_of<T>(args: &ArgMatches, key: &str) -> Result<T, String>
where
    T: FromStr,
{
    value_of(args, key)?.ok_or_else(|| format!("Missing argument {key}"))
}

/// Chosen subcommand with its configuration
#[derive(Debug)]
pub enum Config {
    Generate(GenerateConfig),
    Render(RenderConfig),
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        match args.subcommand() {
            Some(("generate", sub)) => Ok(Config::Generate(GenerateConfig::from_args(sub)?)),
            Some(("render", sub)) => Ok(Config::Render(RenderConfig::from_args(sub)?)),
            Some((name, _)) => Err(format!("Unknown subcommand {name}")),
            None => Err("Subcommand required".into()),
        }
    }
}

/// Configuration of `generate` subcommand
#[derive(Debug)]
pub struct GenerateConfig {
    /// Dimensions of volume
    pub dims: Vector3<u32>,
    /// Shape of cells
    pub cell_shape: Vector3<f32>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    // Output file name
    pub file_name: OsString,
}

impl GenerateConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GenerateConfig, String> {
        let dims = values_to_vector3(args, "dims")?;
        let cell_shape = values_to_vector3(args, "shape")?;
        let generator = GeneratorConfig::from_args(args)?;
        let file_name = args
            .value_of_os("output-file")
            .ok_or("Missing output file")?
            .into();

        Ok(GenerateConfig {
            dims,
            cell_shape,
            generator,
            file_name,
        })
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    /// Ball in the middle of volume
    Sphere { sample: u8, radius: f32 },
    /// Lower half along x empty, upper half filled
    Step { sample: u8 },
    /// Density rising along x axis
    Ramp,
    /// Solid volume with empty border
    Solid { sample: u8 },
    /// Uniformly random samples
    Noise { seed: Option<u64> },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        let name: String = required_value_of(args, "generator")?;
        let sample = value_of(args, "sample")?.unwrap_or(u8::MAX);
        let radius = value_of(args, "radius")?.unwrap_or(0.3);
        let seed = value_of(args, "seed")?;

        GeneratorConfig::from_name(&name, sample, radius, seed)
    }

    pub fn from_name(
        name: &str,
        sample: u8,
        radius: f32,
        seed: Option<u64>,
    ) -> Result<GeneratorConfig, String> {
        let cfg = match name {
            "sphere" => GeneratorConfig::Sphere { sample, radius },
            "step" => GeneratorConfig::Step { sample },
            "ramp" => GeneratorConfig::Ramp,
            "solid" => GeneratorConfig::Solid { sample },
            "noise" => GeneratorConfig::Noise { seed },
            _ => return Err(format!("Unknown generator {name}")),
        };
        Ok(cfg)
    }
}

/// Where rendered volume comes from
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeSource {
    File(PathBuf),
    Synthetic {
        generator: GeneratorConfig,
        dims: Vector3<u32>,
    },
}

/// Configuration of `render` subcommand
#[derive(Debug)]
pub struct RenderConfig {
    pub source: VolumeSource,
    /// Name of premade transfer function
    pub tf_name: String,
    pub resolution: Vector2<u16>,
    /// Camera in object space, looking at center of volume
    pub camera: Point3<f32>,
    pub threshold: f32,
    /// `None` means one thread per core
    pub threads: Option<usize>,
    pub file_name: OsString,
}

impl RenderConfig {
    pub fn from_args(args: &ArgMatches) -> Result<RenderConfig, String> {
        let source = match args.value_of_os("volume") {
            Some(path) => VolumeSource::File(path.into()),
            None => {
                let name: String = required_value_of(args, "synthetic")?;
                let generator = GeneratorConfig::from_name(&name, u8::MAX, 0.3, None)?;
                let dims = values_to_vector3(args, "dims")?;
                VolumeSource::Synthetic { generator, dims }
            }
        };

        let [w, h] = values_to_vector::<u16, 2>(args, "resolution")?;
        let camera = values_to_vector3::<f32>(args, "camera")?.into();

        Ok(RenderConfig {
            source,
            tf_name: required_value_of(args, "tf")?,
            resolution: vector![w, h],
            camera,
            threshold: required_value_of(args, "threshold")?,
            threads: value_of(args, "threads")?,
            file_name: args
                .value_of_os("output-file")
                .ok_or("Missing output file")?
                .into(),
        })
    }
}
