mod master_thread;
mod messages;
mod render_worker;

pub use master_thread::{ParallelRenderer, DEFAULT_TILE_SIDE};
pub use messages::Tile;
