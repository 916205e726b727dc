//! Tooling for building auto-tiling rule sets.
//!
//! Every occupancy pattern of the 8 cells around a center tile is enumerated and laid out as a
//! template grid. Once the matching visual tile has been painted at each pattern's placement in a
//! second grid, the pattern to atlas-cell mapping is read back and saved as a `CoordinateTable`.

mod analyze;
mod error;
mod generate;
mod grid;
mod image;
mod layout;
mod offset;
mod permutation;
mod point;
mod static_vec;
mod table;

pub use crate::image::{color_for_atlas, image_from_grid, MAX_IMAGE_DIMENSION};
pub use analyze::read_coordinate_table;
pub use error::{Error, FormatError};
pub use generate::{paint_template, TemplateMarkers};
pub use grid::{Cell, GridCell, SourceId, SparseGrid, TileGrid};
pub use layout::{placement_for, GridLayout, DEFAULT_COLUMNS, DEFAULT_ORIGIN, DEFAULT_SPACING};
pub use offset::{neighbour_offsets, OffsetGroup, OffsetId, NUM_NEIGHBOURS};
pub use permutation::{
    generate_all, generate_with_slots, PatternIndex, Permutation, Permutations, MAX_SLOTS,
};
pub use point::Point;
pub use static_vec::{Id, StaticVec};
pub use table::CoordinateTable;
