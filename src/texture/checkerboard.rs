//! Checkerboard floor texture generator.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::draw::color;

/// Output filename for the floor texture.
pub const FILE_NAME: &str = "floor_texture.png";

/// Parameters for the checkerboard pattern.
///
/// The canvas is square with `tile_size * num_tiles` pixels per axis,
/// partitioned into a `num_tiles` by `num_tiles` grid of square tiles.
#[derive(Debug, Clone)]
pub struct CheckerboardParams {
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    /// Number of tiles along each axis.
    pub num_tiles: u32,
    /// Fill for tiles whose grid coordinates sum to an even number.
    pub color1: Rgb<u8>,
    /// Fill for tiles whose grid coordinates sum to an odd number.
    pub color2: Rgb<u8>,
}

impl Default for CheckerboardParams {
    fn default() -> Self {
        Self {
            tile_size: 64,
            num_tiles: 8,
            color1: color::CHECKER_LIGHT,
            color2: color::CHECKER_DARK,
        }
    }
}

impl CheckerboardParams {
    /// Canvas edge length in pixels.
    pub fn canvas_size(&self) -> u32 {
        self.tile_size * self.num_tiles
    }
}

/// Generates the checkerboard texture.
///
/// Tile at grid coordinate (x, y) is filled with `color1` if `x + y`
/// is even, `color2` otherwise. Tiles partition the canvas exactly, so
/// every pixel belongs to precisely one tile. Deterministic: identical
/// parameters produce byte-identical output.
pub fn generate(params: &CheckerboardParams) -> RgbImage {
    let size = params.canvas_size();
    let mut canvas = RgbImage::from_pixel(size, size, params.color1);

    for ty in 0..params.num_tiles {
        for tx in 0..params.num_tiles {
            let fill = if (tx + ty) % 2 == 0 {
                params.color1
            } else {
                params.color2
            };
            let tile = Rect::at((tx * params.tile_size) as i32, (ty * params.tile_size) as i32)
                .of_size(params.tile_size, params.tile_size);
            draw_filled_rect_mut(&mut canvas, tile, fill);
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_is_512_square() {
        let texture = generate(&CheckerboardParams::default());
        assert_eq!(texture.dimensions(), (512, 512));
    }

    #[test]
    fn first_two_tiles_use_the_expected_grays() {
        let params = CheckerboardParams::default();
        let texture = generate(&params);
        // Sample tile centers: (0, 0) is light, (1, 0) is dark.
        assert_eq!(texture.get_pixel(32, 32), &Rgb([180, 180, 180]));
        assert_eq!(texture.get_pixel(96, 32), &Rgb([100, 100, 100]));
    }

    #[test]
    fn tile_parity_holds_across_the_whole_grid() {
        let params = CheckerboardParams::default();
        let texture = generate(&params);

        for ty in 0..params.num_tiles {
            for tx in 0..params.num_tiles {
                let expected = if (tx + ty) % 2 == 0 {
                    params.color1
                } else {
                    params.color2
                };
                let px = tx * params.tile_size + params.tile_size / 2;
                let py = ty * params.tile_size + params.tile_size / 2;
                assert_eq!(texture.get_pixel(px, py), &expected, "tile ({tx}, {ty})");
            }
        }
    }

    #[test]
    fn tile_boundaries_partition_exactly() {
        let texture = generate(&CheckerboardParams::default());
        // First pixel of the second tile column belongs to the dark tile.
        assert_eq!(texture.get_pixel(64, 0), &Rgb([100, 100, 100]));
        // Last pixel of the first tile column is still light.
        assert_eq!(texture.get_pixel(63, 0), &Rgb([180, 180, 180]));
    }

    #[test]
    fn generation_is_deterministic() {
        let params = CheckerboardParams::default();
        assert_eq!(generate(&params).as_raw(), generate(&params).as_raw());
    }
}
