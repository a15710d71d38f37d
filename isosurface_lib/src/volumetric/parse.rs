//! Volume file header.
//!
//! Little-endian, total length 27B
//! 1. resolution -- 3x 32bit ints (x,y,z)
//! 2. 1 byte padding
//! 3. cell shape -- 3x 32bit floats
//! 4. sample order -- 2x 8bit -- first byte order, second byte parameter to the order
//! 5. data -- x*y*z 8bit values, z axis growing fastest

use nalgebra::{vector, Vector3};
use nom::{
    bytes::complete::take,
    number::complete::{le_f32, le_u32, u8 as byte},
    sequence::tuple,
    IResult,
};

use crate::error::VolumeError;

use super::{
    vol_builder::{DataSource, VolumeMetadata},
    volume::sample_count,
};

pub const HEADER_LEN: usize = 3 * 4 + 1 + 3 * 4 + 2;

/// Samples stored linearly, no parameter
pub const SAMPLE_ORDER_LINEAR: u8 = 1;

struct ExtractedMeta {
    size: Vector3<usize>,
    cell_shape: Vector3<f32>,
    sample_order: u8,
}

pub fn volume_parser(data_source: DataSource) -> Result<VolumeMetadata, VolumeError> {
    let slice = data_source.get_slice();

    let (_, meta) = header_inner(slice).map_err(|_| VolumeError::Parse)?;

    let ExtractedMeta {
        size,
        cell_shape,
        sample_order,
    } = meta;

    if sample_order != SAMPLE_ORDER_LINEAR {
        return Err(VolumeError::UnknownSampleOrder(sample_order));
    }

    let expected = sample_count(size)?;
    let actual = slice.len() - HEADER_LEN;
    if actual < expected {
        return Err(VolumeError::SizeMismatch { expected, actual });
    }

    Ok(VolumeMetadata {
        size,
        cell_shape,
        data: data_source,
        data_offset: HEADER_LEN,
    })
}

fn header_inner(s: &[u8]) -> IResult<&[u8], ExtractedMeta> {
    let mut header = tuple((
        tuple((le_u32, le_u32, le_u32)),
        take(1_u8),
        tuple((le_f32, le_f32, le_f32)),
        tuple((byte, byte)),
    ));

    let (s, (size, _, cell_shape, (sample_order, _))) = header(s)?;

    let size = vector![size.0 as usize, size.1 as usize, size.2 as usize];
    let cell_shape = vector![cell_shape.0, cell_shape.1, cell_shape.2];

    Ok((
        s,
        ExtractedMeta {
            size,
            cell_shape,
            sample_order,
        },
    ))
}
