//! Rendering grids to images, so a template can be checked without the editor that consumes it.

use crate::{error::Error, grid::SparseGrid, point::Point};

use image::{Rgba, RgbaImage};

/// Largest width or height `image_from_grid` will allocate.
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

/// Draws one `tile_size` square per painted cell of `layer`, coloured by atlas coordinate. The
/// image always covers the grid origin so cell positions stay absolute. Returns `None` if the layer
/// is empty, and an error if the image would be empty or exceed `MAX_IMAGE_DIMENSION`.
pub fn image_from_grid(
    grid: &SparseGrid,
    layer: usize,
    tile_size: u32,
) -> Result<Option<RgbaImage>, Error> {
    let (min, max) = match grid.bounds(layer) {
        Some(bounds) => bounds,
        None => return Ok(None),
    };
    let min = Point::new(min.x.min(0), min.y.min(0));

    // Widened so neither the cell span nor the pixel size can overflow.
    let cells_wide = (i64::from(max.x) - i64::from(min.x) + 1) as u64;
    let cells_high = (i64::from(max.y) - i64::from(min.y) + 1) as u64;
    let width = cells_wide.saturating_mul(u64::from(tile_size));
    let height = cells_high.saturating_mul(u64::from(tile_size));
    let limit = u64::from(MAX_IMAGE_DIMENSION);
    if width == 0 || height == 0 || width > limit || height > limit {
        return Err(Error::InvalidImageSize {
            width,
            height,
            max: MAX_IMAGE_DIMENSION,
        });
    }

    let mut img = RgbaImage::new(width as u32, height as u32);
    for (position, cell) in grid.layer_cells(layer) {
        let color = color_for_atlas(cell.atlas_coords);
        let local_x = (i64::from(position.x) - i64::from(min.x)) as u32;
        let local_y = (i64::from(position.y) - i64::from(min.y)) as u32;
        let (x0, y0) = (local_x * tile_size, local_y * tile_size);
        for y in y0..y0 + tile_size {
            for x in x0..x0 + tile_size {
                img.put_pixel(x, y, color);
            }
        }
    }

    Ok(Some(img))
}

/// A stable, opaque colour per atlas cell.
pub fn color_for_atlas(atlas_coords: Point) -> Rgba<u8> {
    let mut h = (atlas_coords.x as u32).wrapping_mul(0x9E37_79B9)
        ^ (atlas_coords.y as u32).wrapping_mul(0x85EB_CA6B);
    h ^= h >> 15;

    Rgba([h as u8 | 0x40, (h >> 8) as u8 | 0x40, (h >> 16) as u8 | 0x40, 255])
}
