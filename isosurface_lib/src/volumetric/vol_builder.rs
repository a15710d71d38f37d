use std::{fs::File, path::Path};

use memmap::{Mmap, MmapOptions};
use nalgebra::Vector3;

use crate::error::VolumeError;

use super::{parse::volume_parser, Volume};

pub trait BuildVolume
where
    Self: Sized,
{
    fn build(metadata: VolumeMetadata) -> Result<Self, VolumeError>;
}

/// Parse volume file and build volume of type `V`
pub fn from_file<P, V>(path: P) -> Result<V, VolumeError>
where
    P: AsRef<Path>,
    V: BuildVolume + Volume,
{
    let ds = DataSource::from_file(path)?;
    let metadata = volume_parser(ds)?;
    BuildVolume::build(metadata)
}

/// Raw bytes of a volume, either owned or memory mapped
pub enum DataSource {
    Vec(Vec<u8>),
    Mmap(Mmap),
}

impl DataSource {
    pub fn get_slice(&self) -> &[u8] {
        match self {
            DataSource::Vec(v) => v.as_slice(),
            DataSource::Mmap(m) => &m[..],
        }
    }

    pub fn from_vec(vec: Vec<u8>) -> DataSource {
        DataSource::Vec(vec)
    }

    pub fn from_file<P>(path: P) -> Result<DataSource, VolumeError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(VolumeError::NotAFile(path.to_owned()));
        }

        let file = File::open(path)?;

        // Safety: file is only read; modifying it while mapped is up to the caller
        let mmap = unsafe { MmapOptions::new().map(&file) }?;

        log::debug!("Mapped volume file {:?}, {} bytes", path, mmap.len());

        Ok(DataSource::Mmap(mmap))
    }
}

/// Parsed header together with the data it describes
pub struct VolumeMetadata {
    pub size: Vector3<usize>,
    pub cell_shape: Vector3<f32>, // shape of voxels
    pub data: DataSource,
    pub data_offset: usize,
}
