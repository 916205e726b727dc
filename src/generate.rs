use crate::{
    grid::{SourceId, TileGrid},
    layout::GridLayout,
    offset::OffsetGroup,
    permutation::Permutations,
    point::Point,
};

use log::{debug, info};

/// Atlas cells of the template tile source used to draw a pattern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TemplateMarkers {
    pub source_id: SourceId,
    /// Drawn at every placement.
    pub center: Point,
    /// Drawn at each occupied neighbour of a placement.
    pub neighbour: Point,
}

impl Default for TemplateMarkers {
    fn default() -> Self {
        TemplateMarkers {
            source_id: 0,
            center: Point::new(1, 0),
            neighbour: Point::new(0, 0),
        }
    }
}

/// Paints one 3x3 marker per permutation onto `grid`: the center marker at the pattern's
/// placement and a neighbour marker on each occupied slot around it.
pub fn paint_template<G: TileGrid>(
    grid: &mut G,
    layer: usize,
    layout: &GridLayout,
    permutations: &Permutations,
    offsets: &OffsetGroup,
    markers: &TemplateMarkers,
) {
    for (index, permutation) in permutations.iter() {
        let placement = layout.placement_for(index);
        debug!("Pattern {} ({}) at {}", index, permutation, placement);

        grid.set_cell(layer, placement, markers.source_id, markers.center);
        for offset in permutation.occupied_offsets(offsets) {
            grid.set_cell(layer, placement + offset, markers.source_id, markers.neighbour);
        }
    }

    info!(
        "Painted {} patterns in {} columns",
        permutations.num_elements(),
        layout.columns
    );
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{
        grid::SparseGrid,
        permutation::{generate_all, PatternIndex},
    };

    fn template() -> SparseGrid {
        let mut grid = SparseGrid::new();
        paint_template(
            &mut grid,
            0,
            &GridLayout::default(),
            &generate_all(),
            &OffsetGroup::neighbours(),
            &TemplateMarkers::default(),
        );

        grid
    }

    #[test]
    fn every_placement_has_a_center_marker() {
        let grid = template();
        let layout = GridLayout::default();
        for (_, placement) in layout.placements(256) {
            assert_eq!(grid.cell_atlas_coords(0, placement), Some(Point::new(1, 0)));
        }
    }

    #[test]
    fn neighbour_markers_follow_permutation() {
        let grid = template();
        let layout = GridLayout::default();
        let permutations = generate_all();
        let offsets = OffsetGroup::neighbours();
        for (index, permutation) in permutations.iter() {
            let placement = layout.placement_for(index);
            for (id, offset) in offsets.iter() {
                let expected = if permutation.is_occupied(id.0) {
                    Some(Point::new(0, 0))
                } else {
                    None
                };
                assert_eq!(grid.cell_atlas_coords(0, placement + *offset), expected);
            }
        }
    }

    #[test]
    fn cell_count() {
        // 256 centers plus one neighbour marker per set bit: 8 slots * 128 permutations each.
        assert_eq!(template().num_cells(), 256 + 8 * 128);
    }

    #[test]
    fn full_pattern_fills_the_ring() {
        let grid = template();
        let placement = GridLayout::default().placement_for(PatternIndex(255));
        for y in -1..=1 {
            for x in -1..=1 {
                assert!(grid.get(0, placement + Point::new(x, y)).is_some());
            }
        }
    }
}
