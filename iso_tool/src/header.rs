use byteorder::{ByteOrder, LittleEndian};
use nalgebra::Vector3;

pub const HEADER_LEN: usize = 3 * 4 + 1 + 3 * 4 + 2;
const SAMPLE_ORDER_LINEAR: u8 = 1;
const SAMPLE_ORDER_PARAMETER: u8 = 0;

/// Volume file header
/// little-endian, total length 27B
/// 1. resolution -- 3x 32bit ints (x,y,z)
/// 2. 1 byte padding
/// 3. cell shape -- 3x 32bit floats
/// 4. sample_order -- 2x 8bit -- first byte sample_order, second byte parameter to the sample_order
/// 5. data -- x*y*z 8bit values, z grows fastest
pub fn generate_header(dims: Vector3<u32>, cell_shape: Vector3<f32>) -> Vec<u8> {
    let mut vec = vec![0; HEADER_LEN];
    let slice = &mut vec[..];

    LittleEndian::write_u32(&mut slice[0..4], dims.x);
    LittleEndian::write_u32(&mut slice[4..8], dims.y);
    LittleEndian::write_u32(&mut slice[8..12], dims.z);
    // 1 byte gap
    LittleEndian::write_f32(&mut slice[13..17], cell_shape.x);
    LittleEndian::write_f32(&mut slice[17..21], cell_shape.y);
    LittleEndian::write_f32(&mut slice[21..25], cell_shape.z);

    slice[25] = SAMPLE_ORDER_LINEAR;
    slice[26] = SAMPLE_ORDER_PARAMETER;

    vec
}
