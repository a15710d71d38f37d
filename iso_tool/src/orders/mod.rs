//! Orders in which samples can be laid out.
//! Files are written in linear order only, z axis grows fastest.

mod linear_order;

pub use linear_order::{coord_count, linear_coords};
