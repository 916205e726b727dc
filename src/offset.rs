use crate::point::Point;

use std::collections::HashMap;

/// Number of cells surrounding a center cell on a square grid.
pub const NUM_NEIGHBOURS: usize = 8;

/// The 3x3 ring around a center cell, excluding the center. The order defines the slot order of
/// every `Permutation`: up-left, up-center, up-right, left-center, right-center, down-left,
/// down-center, down-right. Y grows downwards.
const NEIGHBOUR_OFFSETS: [[i32; 2]; NUM_NEIGHBOURS] = [
    [-1, -1],
    [0, -1],
    [1, -1],
    [-1, 0],
    [1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
];

pub fn neighbour_offsets() -> Vec<Point> {
    NEIGHBOUR_OFFSETS.iter().map(|o| Point::from(*o)).collect()
}

#[derive(Clone, Debug)]
pub struct OffsetGroup {
    offsets: Vec<Point>,
    offset_index: HashMap<Point, usize>,
}

impl OffsetGroup {
    /// `offsets` must be in slot order.
    pub fn new(offsets: &[Point]) -> Self {
        // Build the index so callers holding a relative cell can find the slot it controls.
        let offset_index: HashMap<Point, usize> = offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| (*offset, i))
            .collect();
        let offsets = offsets.to_vec();

        OffsetGroup {
            offsets,
            offset_index,
        }
    }

    /// The 8-neighbour group every template is built from.
    pub fn neighbours() -> Self {
        OffsetGroup::new(&neighbour_offsets())
    }

    pub fn num_offsets(&self) -> usize {
        self.offsets.len()
    }

    pub fn offset(&self, id: OffsetId) -> Option<Point> {
        self.offsets.get(id.0).copied()
    }

    pub fn offset_id(&self, offset: &Point) -> Option<OffsetId> {
        self.offset_index.get(offset).map(|i| OffsetId(*i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (OffsetId, &Point)> {
        self.offsets
            .iter()
            .enumerate()
            .map(|(i, o)| (OffsetId(i), o))
    }
}

/// Represents one of the neighbour slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OffsetId(pub usize);
