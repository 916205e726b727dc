use crate::{error::Error, point::Point};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Identifies the tile source (atlas image) a cell draws from.
pub type SourceId = u32;

/// A layered 2D tile grid that can be painted and read back. This is the only capability the
/// template and analysis actions need from whatever owns the tilemap.
pub trait TileGrid {
    fn set_cell(&mut self, layer: usize, position: Point, source_id: SourceId, atlas_coords: Point);

    /// `None` if nothing is painted at `position`.
    fn cell_atlas_coords(&self, layer: usize, position: Point) -> Option<Point>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub source_id: SourceId,
    pub atlas_coords: Point,
}

/// One painted cell as it appears in a grid file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub layer: usize,
    pub position: Point,
    pub source_id: SourceId,
    pub atlas_coords: Point,
}

/// In-memory `TileGrid` that only stores painted cells.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<GridCell>", into = "Vec<GridCell>")]
pub struct SparseGrid {
    cells: BTreeMap<(usize, Point), Cell>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, layer: usize, position: Point) -> Option<&Cell> {
        self.cells.get(&(layer, position))
    }

    pub fn clear_cell(&mut self, layer: usize, position: Point) -> Option<Cell> {
        self.cells.remove(&(layer, position))
    }

    /// Painted cells of one layer.
    pub fn layer_cells(&self, layer: usize) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.cells
            .iter()
            .filter(move |((l, _), _)| *l == layer)
            .map(|((_, p), c)| (*p, c))
    }

    /// Inclusive min and max corners of the painted cells in `layer`.
    pub fn bounds(&self, layer: usize) -> Option<(Point, Point)> {
        self.layer_cells(layer).fold(None, |bounds, (p, _)| {
            Some(match bounds {
                None => (p, p),
                Some((min, max)) => (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                ),
            })
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

impl TileGrid for SparseGrid {
    fn set_cell(&mut self, layer: usize, position: Point, source_id: SourceId, atlas_coords: Point) {
        self.cells.insert(
            (layer, position),
            Cell {
                source_id,
                atlas_coords,
            },
        );
    }

    fn cell_atlas_coords(&self, layer: usize, position: Point) -> Option<Point> {
        self.get(layer, position).map(|c| c.atlas_coords)
    }
}

impl From<Vec<GridCell>> for SparseGrid {
    fn from(cells: Vec<GridCell>) -> Self {
        let mut grid = SparseGrid::new();
        for c in cells.into_iter() {
            grid.set_cell(c.layer, c.position, c.source_id, c.atlas_coords);
        }

        grid
    }
}

impl From<SparseGrid> for Vec<GridCell> {
    fn from(grid: SparseGrid) -> Self {
        grid.cells
            .into_iter()
            .map(|((layer, position), cell)| GridCell {
                layer,
                position,
                source_id: cell.source_id,
                atlas_coords: cell.atlas_coords,
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_and_read_back() {
        let mut grid = SparseGrid::new();
        grid.set_cell(0, Point::new(2, 2), 1, Point::new(3, 4));
        assert_eq!(grid.cell_atlas_coords(0, Point::new(2, 2)), Some(Point::new(3, 4)));
        assert_eq!(grid.cell_atlas_coords(1, Point::new(2, 2)), None);
        assert_eq!(grid.cell_atlas_coords(0, Point::new(2, 3)), None);

        grid.set_cell(0, Point::new(2, 2), 1, Point::new(5, 5));
        assert_eq!(grid.num_cells(), 1);
        assert_eq!(grid.clear_cell(0, Point::new(2, 2)).map(|c| c.source_id), Some(1));
        assert_eq!(grid.num_cells(), 0);
    }

    #[test]
    fn bounds_per_layer() {
        let mut grid = SparseGrid::new();
        assert_eq!(grid.bounds(0), None);
        grid.set_cell(0, Point::new(1, 5), 0, Point::default());
        grid.set_cell(0, Point::new(4, -2), 0, Point::default());
        grid.set_cell(1, Point::new(100, 100), 0, Point::default());
        assert_eq!(grid.bounds(0), Some((Point::new(1, -2), Point::new(4, 5))));
    }

    #[test]
    fn json_keeps_every_cell() {
        let mut grid = SparseGrid::new();
        grid.set_cell(0, Point::new(1, 1), 0, Point::new(1, 0));
        grid.set_cell(2, Point::new(-3, 7), 4, Point::new(0, 0));

        let json = serde_json::to_string(&grid).unwrap();
        let restored: SparseGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);
    }
}
