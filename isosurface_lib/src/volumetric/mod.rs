//! Volumetric data and its sampling

mod function_volume;
mod linear_volume;
pub mod parse;
mod sampler;
mod transfer_function;
mod vol_builder;
mod volume;

pub use function_volume::FunctionVolume;
pub use linear_volume::LinearVolume;
pub use sampler::{is_inside, SamplePoint, VolumeSampler};
pub use transfer_function::{TransferFunction, TF, TF_LUT_LEN};
pub use vol_builder::{from_file, BuildVolume, DataSource, VolumeMetadata};
pub use volume::{grid_position, sample_count, Volume};
