use nalgebra::Vector2;

/// Rectangle of pixels rendered as one task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Tile {
    /// Cover frame of `resolution` with tiles of `side`.
    /// Tiles on the right and bottom edge may be smaller.
    pub fn split(resolution: Vector2<u16>, side: u16) -> Vec<Tile> {
        let (width, height) = (resolution.x as usize, resolution.y as usize);
        let side = side as usize;

        let mut tiles = Vec::new();
        for y in (0..height).step_by(side) {
            for x in (0..width).step_by(side) {
                tiles.push(Tile {
                    x,
                    y,
                    width: usize::min(side, width - x),
                    height: usize::min(side, height - y),
                });
            }
        }
        tiles
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Task from master to render worker
pub struct RenderTask {
    pub tile: Tile,
}

/// Rendered tile, RGBA8 rows of `tile.width` pixels
pub struct TileResult {
    pub tile: Tile,
    pub pixels: Vec<u8>,
}

#[cfg(test)]
mod test {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn split_covers_frame() {
        let tiles = Tile::split(vector![35, 20], 16);
        assert_eq!(tiles.len(), 3 * 2);
        let total: usize = tiles.iter().map(Tile::pixel_count).sum();
        assert_eq!(total, 35 * 20);
        assert_eq!(
            tiles[2],
            Tile {
                x: 32,
                y: 0,
                width: 3,
                height: 16
            }
        );
        assert_eq!(tiles[5].height, 4);
    }
}
