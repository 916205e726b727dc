use crate::{grid::TileGrid, layout::GridLayout, table::CoordinateTable};

use log::{info, warn};

/// Reads the atlas cell painted at each pattern's placement. Patterns whose cell is empty are
/// left out of the table, so a partly painted grid gives a sparse table.
///
/// Editor plugins that read the host tilemap directly record unpainted cells as `(-1, -1)` and
/// always write every pattern. Tables written from this function have no entry for those
/// patterns instead; consumers should treat a missing index like `(-1, -1)` (see
/// `CoordinateTable::get_or`).
pub fn read_coordinate_table<G: TileGrid>(
    grid: &G,
    layer: usize,
    layout: &GridLayout,
    num_patterns: usize,
) -> CoordinateTable {
    let mut table = CoordinateTable::new();
    for (index, placement) in layout.placements(num_patterns) {
        match grid.cell_atlas_coords(layer, placement) {
            Some(atlas_coords) => {
                table.insert(index, atlas_coords);
            }
            None => warn!("No tile painted for pattern {} at {}", index, placement),
        }
    }
    info!("Read {} of {} patterns", table.len(), num_patterns);

    table
}
